use serde::{Deserialize, Serialize};

/// The 26 uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 26 lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// The 10 ASCII digits.
pub const DIGITS: &str = "0123456789";

/// The 32 printable ASCII punctuation characters.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Character-class policy for password generation.
///
/// All classes default to disabled. The effective pool is the enabled
/// classes' characters concatenated in fixed class order (upper, lower,
/// digits, symbols); with no class enabled the pool is empty and
/// generation yields an empty string regardless of `length`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    /// Desired output length. Negative values are a caller contract
    /// violation and rejected by the generator.
    pub length: i64,
}

impl GenerationPolicy {
    /// Builds the effective character pool in fixed class order.
    pub fn effective_pool(&self) -> String {
        let mut pool = String::new();
        if self.include_upper {
            pool.push_str(UPPERCASE);
        }
        if self.include_lower {
            pool.push_str(LOWERCASE);
        }
        if self.include_digits {
            pool.push_str(DIGITS);
        }
        if self.include_symbols {
            pool.push_str(SYMBOLS);
        }
        pool
    }
}
