//! First-order muscle activation dynamics.
//!
//! Activation dynamics model the delay and filtering between neural excitation
//! (the control signal) and muscle activation (the actual contractile state).
//!
//! # Model
//!
//! Activation is first rescaled so the configured floor maps to zero:
//!
//! ```text
//! ã = a / (1 - a_min) - a_min / (1 - a_min)       maps [a_min, 1] onto [0, 1]
//!
//! da/dt = (u - ã) / τ(u, ã)
//!
//! τ(u, ã) = τ_act   · (0.5 + 1.5 ã)   if u > ã
//!         = τ_deact · (0.5 + 1.5 ã)   otherwise
//! ```
//!
//! The `(0.5 + 1.5 ã)` factor lies in [0.5, 2], so dynamics are faster at low
//! activation and slower near full activation, and τ stays strictly positive
//! on the validated domain.
//!
//! Inputs are never clamped here: an excitation outside [0, 1] or an
//! activation outside [a_min, 1] is an error.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ActivationError, Result};
use crate::params::{ActivationParams, check_min_activation, check_time_constant};
use crate::request::{ARGUMENT_SIZE, DerivativeRequest, OperatingPoint};

/// Label given to a model built without a muscle name.
pub const DEFAULT_NAME: &str = "default_activation";

/// First-order activation dynamics with a minimum-activation floor.
///
/// The normalized floor `a_min / (1 - a_min)` is cached and recomputed every
/// time the minimum activation changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstOrderActivation {
    name: String,
    params: ActivationParams,
    min_activation_ratio: f64,
}

impl Default for FirstOrderActivation {
    fn default() -> Self {
        let params = ActivationParams::default();
        Self {
            name: DEFAULT_NAME.to_string(),
            min_activation_ratio: params.min_activation_ratio(),
            params,
        }
    }
}

impl FirstOrderActivation {
    /// Create a model for the named muscle.
    ///
    /// The model is labelled `<muscle_name>_activation`.
    ///
    /// # Errors
    ///
    /// Returns [`ActivationError::InvalidParameter`] if a time constant is not
    /// above `sqrt(eps)` or `min_activation` is outside `[0, 1 - sqrt(eps))`.
    pub fn new(
        tau_activation: f64,
        tau_deactivation: f64,
        min_activation: f64,
        muscle_name: &str,
    ) -> Result<Self> {
        Self::from_params(
            ActivationParams::new(tau_activation, tau_deactivation, min_activation),
            muscle_name,
        )
    }

    /// Create a model for the named muscle from a parameter set.
    pub fn from_params(params: ActivationParams, muscle_name: &str) -> Result<Self> {
        let name = format!("{muscle_name}_activation");
        params.validate(&name)?;

        debug!(
            name = %name,
            tau_activation = params.tau_activation,
            tau_deactivation = params.tau_deactivation,
            min_activation = params.min_activation,
            "Created first-order activation model"
        );

        Ok(Self {
            name,
            min_activation_ratio: params.min_activation_ratio(),
            params,
        })
    }

    /// Label used in errors.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current parameters.
    #[must_use]
    pub fn params(&self) -> &ActivationParams {
        &self.params
    }

    /// Activation time constant (seconds).
    #[must_use]
    pub fn activation_time_constant(&self) -> f64 {
        self.params.tau_activation
    }

    /// Deactivation time constant (seconds).
    #[must_use]
    pub fn deactivation_time_constant(&self) -> f64 {
        self.params.tau_deactivation
    }

    /// Minimum activation.
    #[must_use]
    pub fn min_activation(&self) -> f64 {
        self.params.min_activation
    }

    /// Cached `min_activation / (1 - min_activation)`.
    #[must_use]
    pub fn min_activation_ratio(&self) -> f64 {
        self.min_activation_ratio
    }

    /// Set the activation time constant. The model is unchanged on error.
    pub fn set_activation_time_constant(&mut self, tau: f64) -> Result<()> {
        check_time_constant(&self.name, "activation time constant", tau)?;
        self.params.tau_activation = tau;
        debug!(name = %self.name, tau_activation = tau, "Updated activation time constant");
        Ok(())
    }

    /// Set the deactivation time constant. The model is unchanged on error.
    pub fn set_deactivation_time_constant(&mut self, tau: f64) -> Result<()> {
        check_time_constant(&self.name, "deactivation time constant", tau)?;
        self.params.tau_deactivation = tau;
        debug!(name = %self.name, tau_deactivation = tau, "Updated deactivation time constant");
        Ok(())
    }

    /// Set the minimum activation and refresh the cached ratio.
    /// The model is unchanged on error.
    pub fn set_min_activation(&mut self, min_activation: f64) -> Result<()> {
        check_min_activation(&self.name, min_activation)?;
        self.params.min_activation = min_activation;
        self.min_activation_ratio = self.params.min_activation_ratio();
        debug!(name = %self.name, min_activation, "Updated minimum activation");
        Ok(())
    }

    /// Replace all parameters at once. The model is unchanged on error.
    pub fn set_params(&mut self, params: ActivationParams) -> Result<()> {
        params.validate(&self.name)?;
        self.params = params;
        self.min_activation_ratio = params.min_activation_ratio();
        debug!(
            name = %self.name,
            tau_activation = params.tau_activation,
            tau_deactivation = params.tau_deactivation,
            min_activation = params.min_activation,
            "Updated activation parameters"
        );
        Ok(())
    }

    /// Number of ODE arguments: activation and excitation.
    #[must_use]
    pub const fn argument_size(&self) -> usize {
        ARGUMENT_SIZE
    }

    /// Highest derivative the model can evaluate.
    #[must_use]
    pub const fn max_derivative_order(&self) -> usize {
        1
    }

    /// Value of the state variable at `point`: the activation itself.
    ///
    /// No bounds are checked.
    #[must_use]
    pub fn value(&self, point: OperatingPoint) -> f64 {
        point.activation
    }

    /// Map activation from `[min_activation, 1]` onto `[0, 1]`.
    #[must_use]
    pub fn normalized_activation(&self, activation: f64) -> f64 {
        let scaled = activation / (1.0 - self.params.min_activation);
        scaled - self.min_activation_ratio
    }

    /// Effective time constant for a normalized activation.
    ///
    /// Uses the activation constant while excitation exceeds the normalized
    /// activation and the deactivation constant otherwise.
    #[must_use]
    pub fn time_constant(&self, excitation: f64, normalized_activation: f64) -> f64 {
        let scale = 0.5 + 1.5 * normalized_activation;
        if excitation > normalized_activation {
            self.params.tau_activation * scale
        } else {
            self.params.tau_deactivation * scale
        }
    }

    /// Activation rate of change, da/dt (1/s).
    ///
    /// # Errors
    ///
    /// Excitation outside `[0, 1]` or activation outside
    /// `[min_activation, 1]` is rejected.
    pub fn derivative(&self, activation: f64, excitation: f64) -> Result<f64> {
        self.activation_rate(OperatingPoint::new(activation, excitation))
    }

    /// Evaluate a request at an operating point.
    pub fn evaluate(&self, request: &DerivativeRequest, point: OperatingPoint) -> Result<f64> {
        match request {
            DerivativeRequest::Value => Ok(self.value(point)),
            DerivativeRequest::ActivationRate => self.activation_rate(point),
            DerivativeRequest::Unsupported { components } => Err(
                ActivationError::unsupported_derivative(&self.name, components),
            ),
        }
    }

    /// Evaluate a derivative addressed by component list and argument vector.
    ///
    /// An empty list yields the value, `[0]` the activation rate. The argument
    /// vector must hold exactly `[activation, excitation]`.
    pub fn derivative_of(&self, components: &[usize], x: &[f64]) -> Result<f64> {
        let point = OperatingPoint::from_slice(&self.name, x)?;
        self.evaluate(&DerivativeRequest::from_components(components), point)
    }

    fn activation_rate(&self, point: OperatingPoint) -> Result<f64> {
        let OperatingPoint {
            activation,
            excitation,
        } = point;

        if !(0.0..=1.0).contains(&excitation) {
            return Err(ActivationError::excitation_out_of_bounds(
                &self.name, excitation,
            ));
        }

        let min_activation = self.params.min_activation;
        if !(min_activation..=1.0).contains(&activation) {
            return Err(ActivationError::activation_out_of_bounds(
                &self.name,
                activation,
                min_activation,
            ));
        }

        let offset = self.normalized_activation(activation);
        let tau = self.time_constant(excitation, offset);

        Ok((excitation - offset) / tau)
    }
}

/// Activation state carried between integration steps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivationState {
    /// Current activation level.
    pub activation: f64,

    /// Current neural excitation.
    pub excitation: f64,
}

impl ActivationState {
    /// Start at the model's activation floor with no excitation.
    #[must_use]
    pub fn new(model: &FirstOrderActivation) -> Self {
        Self {
            activation: model.min_activation(),
            excitation: 0.0,
        }
    }

    /// Set the neural excitation command. Validated on the next step.
    pub fn set_excitation(&mut self, excitation: f64) {
        self.excitation = excitation;
    }

    /// The operating point this state represents.
    #[must_use]
    pub fn operating_point(&self) -> OperatingPoint {
        OperatingPoint::new(self.activation, self.excitation)
    }

    /// Take one explicit Euler step of length `dt` (seconds).
    ///
    /// The new activation is kept within `[min_activation, 1]` so the next
    /// evaluation stays in the model's domain. Returns the rate used.
    ///
    /// # Errors
    ///
    /// A negative or non-finite `dt` is rejected, and evaluation errors are
    /// propagated. The state is unchanged on error.
    pub fn advance(&mut self, model: &FirstOrderActivation, dt: f64) -> Result<f64> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(ActivationError::invalid_argument(format!(
                "{}: time step must be finite and non-negative, got {dt}",
                model.name()
            )));
        }

        let rate = model.derivative(self.activation, self.excitation)?;
        let next = self.activation + dt * rate;
        self.activation = next.clamp(model.min_activation(), 1.0);

        trace!(
            name = model.name(),
            activation = self.activation,
            excitation = self.excitation,
            rate,
            "Advanced activation state"
        );

        Ok(rate)
    }
}
