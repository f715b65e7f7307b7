//! Activation dynamics parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ActivationError, Result};

/// Smallest admissible time constant and the margin kept below an activation
/// of one. Equal to `f64::EPSILON.sqrt()`, i.e. 2^-26.
pub const SMALL_TOLERANCE: f64 = 1.490_116_119_384_765_6e-8;

/// Parameters of the first-order activation model.
///
/// `validate` checks the domain; the model only ever holds validated values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivationParams {
    /// Time constant while activation rises, in seconds.
    pub tau_activation: f64,

    /// Time constant while activation decays, in seconds.
    /// Physiologically larger than `tau_activation`.
    pub tau_deactivation: f64,

    /// Floor on activation (baseline muscle tone), in [0, 1).
    pub min_activation: f64,
}

impl Default for ActivationParams {
    fn default() -> Self {
        Self {
            tau_activation: 0.010,   // 10 ms
            tau_deactivation: 0.040, // 40 ms
            min_activation: 0.01,    // 1% baseline
        }
    }
}

impl ActivationParams {
    /// Create parameters without validating them.
    #[must_use]
    pub fn new(tau_activation: f64, tau_deactivation: f64, min_activation: f64) -> Self {
        Self {
            tau_activation,
            tau_deactivation,
            min_activation,
        }
    }

    /// Fast-twitch (Type II) fibers.
    #[must_use]
    pub fn fast_twitch() -> Self {
        Self::default()
    }

    /// Slow-twitch (Type I) fibers.
    #[must_use]
    pub fn slow_twitch() -> Self {
        Self {
            tau_activation: 0.020,   // 20 ms
            tau_deactivation: 0.080, // 80 ms
            min_activation: 0.01,
        }
    }

    /// Set the activation time constant.
    #[must_use]
    pub fn with_tau_activation(mut self, tau_activation: f64) -> Self {
        self.tau_activation = tau_activation;
        self
    }

    /// Set the deactivation time constant.
    #[must_use]
    pub fn with_tau_deactivation(mut self, tau_deactivation: f64) -> Self {
        self.tau_deactivation = tau_deactivation;
        self
    }

    /// Set the minimum activation level.
    #[must_use]
    pub fn with_min_activation(mut self, min_activation: f64) -> Self {
        self.min_activation = min_activation;
        self
    }

    /// Check every parameter against its domain.
    ///
    /// Time constants must exceed [`SMALL_TOLERANCE`] and the minimum
    /// activation must lie in `[0, 1 - SMALL_TOLERANCE)`. NaN fails every
    /// check.
    pub fn validate(&self, label: &str) -> Result<()> {
        check_time_constant(label, "activation time constant", self.tau_activation)?;
        check_time_constant(label, "deactivation time constant", self.tau_deactivation)?;
        check_min_activation(label, self.min_activation)
    }

    /// `min_activation / (1 - min_activation)`, the normalized floor.
    #[must_use]
    pub fn min_activation_ratio(&self) -> f64 {
        self.min_activation / (1.0 - self.min_activation)
    }
}

pub(crate) fn check_time_constant(label: &str, parameter: &'static str, tau: f64) -> Result<()> {
    if tau > SMALL_TOLERANCE {
        Ok(())
    } else {
        Err(ActivationError::invalid_parameter(
            label,
            parameter,
            tau,
            "time constants must be greater than sqrt(eps)",
        ))
    }
}

pub(crate) fn check_min_activation(label: &str, min_activation: f64) -> Result<()> {
    if min_activation >= 0.0 && min_activation < 1.0 - SMALL_TOLERANCE {
        Ok(())
    } else {
        Err(ActivationError::invalid_parameter(
            label,
            "minimum activation",
            min_activation,
            "minimum activation must be at least 0 and less than 1 - sqrt(eps)",
        ))
    }
}
