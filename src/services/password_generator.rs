//! Password Generator for Passify.
//!
//! Produces random password strings from a character-class policy. The
//! randomness source is a general-purpose PRNG (`SmallRng`), not a
//! cryptographically secure one. That matches the tool's documented
//! behavior and is a known weakness: do not reuse this generator where
//! cryptographic guarantees on the randomness source are required.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::errors::GeneratorError;
use crate::types::generator::GenerationPolicy;

/// Trait defining password generation operations.
pub trait PasswordGeneratorTrait {
    fn generate(&mut self, policy: &GenerationPolicy) -> Result<String, GeneratorError>;
}

/// Password generator holding its own PRNG state.
pub struct PasswordGenerator {
    rng: SmallRng,
}

impl PasswordGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates a generator with a fixed seed, making output deterministic.
    /// Intended for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGeneratorTrait for PasswordGenerator {
    /// Generates a password for the given policy.
    ///
    /// The effective pool is the enabled classes concatenated in fixed
    /// class order. An empty pool yields an empty string regardless of
    /// `length`. Each character is an independent uniform draw with
    /// replacement, so repeats are expected. A negative `length` is the
    /// only error case.
    fn generate(&mut self, policy: &GenerationPolicy) -> Result<String, GeneratorError> {
        if policy.length < 0 {
            return Err(GeneratorError::InvalidArgument(policy.length));
        }

        let pool: Vec<char> = policy.effective_pool().chars().collect();
        if pool.is_empty() {
            return Ok(String::new());
        }

        let password = (0..policy.length)
            .map(|_| pool[self.rng.random_range(0..pool.len())])
            .collect();
        Ok(password)
    }
}
