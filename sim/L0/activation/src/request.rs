//! Evaluation inputs: the operating point and the derivative request.
//!
//! A generic solver addresses a function by an argument vector and a list of
//! partial-derivative components. The activation model only understands two of
//! those shapes, so the list is folded into a [`DerivativeRequest`] up front.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ActivationError, Result};

/// Index of activation in an argument vector.
pub const ACTIVATION_INDEX: usize = 0;

/// Index of excitation in an argument vector.
pub const EXCITATION_INDEX: usize = 1;

/// Number of arguments the activation ODE takes.
pub const ARGUMENT_SIZE: usize = 2;

/// The (activation, excitation) pair the ODE is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperatingPoint {
    /// Current activation.
    pub activation: f64,
    /// Current neural excitation.
    pub excitation: f64,
}

impl OperatingPoint {
    /// Create an operating point.
    #[must_use]
    pub fn new(activation: f64, excitation: f64) -> Self {
        Self {
            activation,
            excitation,
        }
    }

    /// Read an operating point from an argument vector.
    ///
    /// `label` names the model in the error if `x` does not hold exactly
    /// [`ARGUMENT_SIZE`] entries.
    pub fn from_slice(label: &str, x: &[f64]) -> Result<Self> {
        match *x {
            [activation, excitation] => Ok(Self::new(activation, excitation)),
            _ => Err(ActivationError::argument_count(label, ARGUMENT_SIZE, x.len())),
        }
    }

    /// The argument vector form, activation first.
    #[must_use]
    pub fn to_array(self) -> [f64; ARGUMENT_SIZE] {
        [self.activation, self.excitation]
    }
}

/// What a caller wants evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivativeRequest {
    /// The zeroth derivative, i.e. the activation itself.
    Value,
    /// d(activation)/dt.
    ActivationRate,
    /// Any other partial or a higher order.
    Unsupported {
        /// The components as requested.
        components: Vec<usize>,
    },
}

impl DerivativeRequest {
    /// Fold a derivative component list into a request.
    #[must_use]
    pub fn from_components(components: &[usize]) -> Self {
        match components {
            [] => Self::Value,
            [ACTIVATION_INDEX] => Self::ActivationRate,
            _ => Self::Unsupported {
                components: components.to_vec(),
            },
        }
    }

    /// Whether the model can answer this request.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}
