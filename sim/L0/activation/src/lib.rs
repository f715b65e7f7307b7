//! First-order muscle activation dynamics for biomechanical simulation.
//!
//! Converts a neural excitation signal `u ∈ [0, 1]` into a muscle activation
//! state `a ∈ [a_min, 1]`, the effective fraction of maximal force available,
//! by answering the activation ODE at each step of an external integrator.
//!
//! ```text
//!   excitation u ──► ┌─────────────────────────┐
//!                    │  da/dt = (u - ã) / τ    │ ──► da/dt
//!   activation a ──► │  ã = normalized a       │
//!                    └─────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use sim_activation::{ActivationState, FirstOrderActivation};
//!
//! let model = FirstOrderActivation::new(0.010, 0.040, 0.01, "biceps")?;
//!
//! // Rate of change at the activation floor under full excitation.
//! let rate = model.derivative(0.01, 1.0)?;
//! assert!((rate - 200.0).abs() < 1e-9);
//!
//! // Or let the crate step a state forward.
//! let mut state = ActivationState::new(&model);
//! state.set_excitation(0.7);
//! for _ in 0..100 {
//!     state.advance(&model, 0.001)?;
//! }
//! assert!(state.activation > 0.5);
//! # Ok::<(), sim_activation::ActivationError>(())
//! ```
//!
//! # Solver Interface
//!
//! Generic solvers address functions by argument vector and a list of
//! partial-derivative components. [`FirstOrderActivation`] implements
//! [`ScalarFunction`] for that use: an empty component list returns the
//! activation itself, `[0]` returns da/dt, and anything else is an
//! [`ErrorKind::UnsupportedDerivative`].
//!
//! # Errors
//!
//! Nothing is clamped. Out-of-domain parameters fail construction, and
//! out-of-domain operating points fail the single evaluation; see
//! [`ErrorKind`] for the classification.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**.
//!
//! # References
//!
//! - Thelen, D.G. (2003). Adjustment of muscle mechanics model parameters.
//! - Millard, M. et al. (2013). Flexing computational muscle.
//! - Winters, J.M. (1995). An improved muscle-reflex actuator for use in
//!   large-scale neuromusculoskeletal models.

#![doc(html_root_url = "https://docs.rs/sim-activation/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::doc_markdown,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::suboptimal_flops
)]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::unwrap_used,
        clippy::panic,
        clippy::let_underscore_must_use
    )
)]

pub mod activation;
pub mod error;
pub mod params;
pub mod request;

// Re-export main types at crate root
pub use activation::{ActivationState, DEFAULT_NAME, FirstOrderActivation};
pub use error::{ActivationError, ErrorKind, Result};
pub use params::{ActivationParams, SMALL_TOLERANCE};
pub use request::{
    ACTIVATION_INDEX, ARGUMENT_SIZE, DerivativeRequest, EXCITATION_INDEX, OperatingPoint,
};

/// A scalar function of several arguments with partial derivatives.
///
/// This is the shape an external ODE solver expects: it checks
/// [`argument_size`](Self::argument_size) and
/// [`max_derivative_order`](Self::max_derivative_order) before calling, then
/// evaluates with plain slices.
pub trait ScalarFunction {
    /// Evaluate the function.
    fn value(&self, x: &[f64]) -> Result<f64>;

    /// Evaluate the partial derivative addressed by `components`.
    ///
    /// An empty list is the zeroth derivative, the function value.
    fn derivative(&self, components: &[usize], x: &[f64]) -> Result<f64>;

    /// Number of arguments the function takes.
    fn argument_size(&self) -> usize;

    /// Highest derivative order [`derivative`](Self::derivative) supports.
    fn max_derivative_order(&self) -> usize;
}

impl ScalarFunction for FirstOrderActivation {
    fn value(&self, x: &[f64]) -> Result<f64> {
        let point = OperatingPoint::from_slice(self.name(), x)?;
        Ok(self.value(point))
    }

    fn derivative(&self, components: &[usize], x: &[f64]) -> Result<f64> {
        self.derivative_of(components, x)
    }

    fn argument_size(&self) -> usize {
        self.argument_size()
    }

    fn max_derivative_order(&self) -> usize {
        self.max_derivative_order()
    }
}
