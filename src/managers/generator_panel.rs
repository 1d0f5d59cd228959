//! Generator Panel for Passify.
//!
//! View-model state for the password generator screen. Every policy change
//! regenerates the password immediately, and the two length widgets
//! (slider and numeric stepper) are kept mutually synchronized: changing
//! one updates the other before regeneration.

use crate::services::password_generator::{PasswordGenerator, PasswordGeneratorTrait};
use crate::types::errors::GeneratorError;
use crate::types::generator::GenerationPolicy;

/// Trait defining the generator panel interface.
pub trait GeneratorPanelTrait {
    fn set_slider(&mut self, value: i64) -> Result<(), GeneratorError>;
    fn set_stepper(&mut self, value: i64) -> Result<(), GeneratorError>;
    fn set_include_upper(&mut self, enabled: bool) -> Result<(), GeneratorError>;
    fn set_include_lower(&mut self, enabled: bool) -> Result<(), GeneratorError>;
    fn set_include_digits(&mut self, enabled: bool) -> Result<(), GeneratorError>;
    fn set_include_symbols(&mut self, enabled: bool) -> Result<(), GeneratorError>;
    fn regenerate(&mut self) -> Result<(), GeneratorError>;
    fn policy(&self) -> &GenerationPolicy;
    fn password(&self) -> &str;
    fn slider_value(&self) -> i64;
    fn stepper_value(&self) -> i64;
}

/// Interactive generator state: policy, current password, widget values.
pub struct GeneratorPanel {
    generator: PasswordGenerator,
    policy: GenerationPolicy,
    slider_value: i64,
    stepper_value: i64,
    password: String,
}

impl GeneratorPanel {
    /// Creates a panel with the default policy (no classes enabled,
    /// length 0). The initial password is empty accordingly.
    pub fn new(generator: PasswordGenerator) -> Self {
        Self {
            generator,
            policy: GenerationPolicy::default(),
            slider_value: 0,
            stepper_value: 0,
            password: String::new(),
        }
    }

    fn set_length(&mut self, value: i64) -> Result<(), GeneratorError> {
        self.slider_value = value;
        self.stepper_value = value;
        self.policy.length = value;
        self.regenerate()
    }
}

impl GeneratorPanelTrait for GeneratorPanel {
    /// Slider moved: mirror the value to the stepper, then regenerate.
    fn set_slider(&mut self, value: i64) -> Result<(), GeneratorError> {
        self.set_length(value)
    }

    /// Stepper changed: mirror the value to the slider, then regenerate.
    fn set_stepper(&mut self, value: i64) -> Result<(), GeneratorError> {
        self.set_length(value)
    }

    fn set_include_upper(&mut self, enabled: bool) -> Result<(), GeneratorError> {
        self.policy.include_upper = enabled;
        self.regenerate()
    }

    fn set_include_lower(&mut self, enabled: bool) -> Result<(), GeneratorError> {
        self.policy.include_lower = enabled;
        self.regenerate()
    }

    fn set_include_digits(&mut self, enabled: bool) -> Result<(), GeneratorError> {
        self.policy.include_digits = enabled;
        self.regenerate()
    }

    fn set_include_symbols(&mut self, enabled: bool) -> Result<(), GeneratorError> {
        self.policy.include_symbols = enabled;
        self.regenerate()
    }

    /// Runs the generator with the current policy and stores the result.
    /// With no class enabled the stored password becomes empty.
    fn regenerate(&mut self) -> Result<(), GeneratorError> {
        self.password = self.generator.generate(&self.policy)?;
        Ok(())
    }

    fn policy(&self) -> &GenerationPolicy {
        &self.policy
    }

    fn password(&self) -> &str {
        &self.password
    }

    fn slider_value(&self) -> i64 {
        self.slider_value
    }

    fn stepper_value(&self) -> i64 {
        self.stepper_value
    }
}
