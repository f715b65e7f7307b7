//! Error types for activation dynamics.

use thiserror::Error;

/// Coarse classification of an [`ActivationError`].
///
/// Configuration errors surface while a model is being set up; argument and
/// derivative errors surface per evaluation, so an integrator can decide
/// whether to reject a single step or halt the whole simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A model parameter is outside its domain.
    InvalidParameter,
    /// An operating point has the wrong shape or leaves its bounds.
    InvalidArgument,
    /// The requested derivative is not defined by the model.
    UnsupportedDerivative,
}

/// Errors that can occur while configuring or evaluating activation dynamics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActivationError {
    /// A parameter failed validation.
    #[error("{label}: invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        /// Name of the model being configured.
        label: String,
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
        /// The domain the value must lie in.
        reason: &'static str,
    },

    /// Generic malformed argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operating point did not contain exactly the expected entries.
    #[error("{label}: {expected} arguments are required (activation, excitation), got {actual}")]
    ArgumentCount {
        /// Name of the model being evaluated.
        label: String,
        /// Number of arguments the model takes.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// Excitation outside [0, 1].
    #[error("{label}: excitation out of bounds: {excitation} is not in [0, 1]")]
    ExcitationOutOfBounds {
        /// Name of the model being evaluated.
        label: String,
        /// The rejected excitation.
        excitation: f64,
    },

    /// Activation outside [min_activation, 1].
    #[error("{label}: activation out of bounds: {activation} is not in [{min_activation}, 1]")]
    ActivationOutOfBounds {
        /// Name of the model being evaluated.
        label: String,
        /// The rejected activation.
        activation: f64,
        /// Configured minimum activation.
        min_activation: f64,
    },

    /// Derivative request other than the value or the first activation partial.
    #[error("{label}: derivative {components:?} unsupported, only the value and da/dt are defined")]
    UnsupportedDerivative {
        /// Name of the model being evaluated.
        label: String,
        /// The requested derivative components.
        components: Vec<usize>,
    },
}

impl ActivationError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(
        label: impl Into<String>,
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            label: label.into(),
            parameter,
            value,
            reason,
        }
    }

    /// Create a generic invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an argument count error.
    pub fn argument_count(label: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ArgumentCount {
            label: label.into(),
            expected,
            actual,
        }
    }

    /// Create an excitation out of bounds error.
    pub fn excitation_out_of_bounds(label: impl Into<String>, excitation: f64) -> Self {
        Self::ExcitationOutOfBounds {
            label: label.into(),
            excitation,
        }
    }

    /// Create an activation out of bounds error.
    pub fn activation_out_of_bounds(
        label: impl Into<String>,
        activation: f64,
        min_activation: f64,
    ) -> Self {
        Self::ActivationOutOfBounds {
            label: label.into(),
            activation,
            min_activation,
        }
    }

    /// Create an unsupported derivative error.
    pub fn unsupported_derivative(label: impl Into<String>, components: &[usize]) -> Self {
        Self::UnsupportedDerivative {
            label: label.into(),
            components: components.to_vec(),
        }
    }

    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::InvalidArgument(_)
            | Self::ArgumentCount { .. }
            | Self::ExcitationOutOfBounds { .. }
            | Self::ActivationOutOfBounds { .. } => ErrorKind::InvalidArgument,
            Self::UnsupportedDerivative { .. } => ErrorKind::UnsupportedDerivative,
        }
    }

    /// Whether this error came from model configuration rather than evaluation.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        self.kind() == ErrorKind::InvalidParameter
    }
}

/// Result type for activation operations.
pub type Result<T> = std::result::Result<T, ActivationError>;
