//! Integration scenarios for first-order activation dynamics.
//!
//! Tests cover:
//! - Construction boundaries for time constants and minimum activation
//! - Reference derivative values for the default model
//! - Bounds on excitation and activation
//! - Unsupported derivative requests through the solver interface
//! - Stepping a state to steady state

use approx::assert_relative_eq;
use sim_activation::{
    ActivationError, ActivationParams, ActivationState, ErrorKind, FirstOrderActivation,
    SMALL_TOLERANCE, ScalarFunction,
};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn tau_at_tolerance_is_rejected() {
    let err = FirstOrderActivation::new(SMALL_TOLERANCE, 0.04, 0.01, "m").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);

    let err = FirstOrderActivation::new(0.01, SMALL_TOLERANCE, 0.01, "m").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);

    let tau = 2.0 * SMALL_TOLERANCE;
    assert!(FirstOrderActivation::new(tau, tau, 0.0, "m").is_ok());
}

#[test]
fn min_activation_of_one_is_rejected() {
    let err = FirstOrderActivation::new(0.01, 0.04, 1.0, "soleus").unwrap_err();
    assert!(matches!(
        err,
        ActivationError::InvalidParameter {
            parameter: "minimum activation",
            ..
        }
    ));
}

#[test]
fn min_activation_just_below_limit_is_accepted() {
    let min_activation = 1.0 - 2.0 * SMALL_TOLERANCE;
    let model = FirstOrderActivation::new(0.01, 0.04, min_activation, "m").unwrap();

    assert_eq!(
        model.min_activation_ratio(),
        min_activation / (1.0 - min_activation)
    );
}

#[test]
fn negative_min_activation_is_rejected() {
    let err = FirstOrderActivation::new(0.01, 0.04, -1e-12, "m").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

#[test]
fn from_params_matches_new() {
    let a = FirstOrderActivation::from_params(ActivationParams::slow_twitch(), "soleus").unwrap();
    let b = FirstOrderActivation::new(0.020, 0.080, 0.01, "soleus").unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// Reference values
// =============================================================================

#[test]
fn full_excitation_at_floor() {
    let model = FirstOrderActivation::default();

    assert_relative_eq!(model.normalized_activation(0.01), 0.0, epsilon = 1e-15);
    assert_relative_eq!(model.derivative(0.01, 1.0).unwrap(), 200.0, epsilon = 1e-9);
}

#[test]
fn no_excitation_at_full_activation() {
    let model = FirstOrderActivation::default();

    assert_relative_eq!(model.normalized_activation(1.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(model.derivative(1.0, 0.0).unwrap(), -12.5, epsilon = 1e-9);
}

#[test]
fn equilibrium_has_zero_rate() {
    let model = FirstOrderActivation::default();
    assert_eq!(model.derivative(0.01, 0.0).unwrap(), 0.0);
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn excitation_bounds() {
    let model = FirstOrderActivation::default();

    for excitation in [-0.01, 1.01] {
        let err = model.derivative(0.5, excitation).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("excitation out of bounds"));
    }
}

#[test]
fn activation_below_floor() {
    let model = FirstOrderActivation::new(0.01, 0.04, 0.05, "biceps").unwrap();

    let err = model.derivative(0.04, 0.5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let msg = err.to_string();
    assert!(msg.contains("activation out of bounds"));
    assert!(msg.contains("0.05"));
    assert!(msg.contains("biceps_activation"));
}

// =============================================================================
// Solver interface
// =============================================================================

#[test]
fn two_components_unsupported() {
    let model = FirstOrderActivation::default();

    let err = ScalarFunction::derivative(&model, &[0, 0], &[0.5, 0.5]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedDerivative);

    let err = ScalarFunction::derivative(&model, &[0, 1], &[0.5, 0.5]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedDerivative);
}

#[test]
fn excitation_component_unsupported() {
    let model = FirstOrderActivation::default();

    let err = ScalarFunction::derivative(&model, &[1], &[0.5, 0.5]).unwrap_err();
    assert!(matches!(
        err,
        ActivationError::UnsupportedDerivative { ref components, .. } if components == &[1]
    ));
}

#[test]
fn wrong_argument_count() {
    let model = FirstOrderActivation::default();

    for x in [&[][..], &[0.5][..], &[0.5, 0.5, 0.5][..]] {
        assert_eq!(
            ScalarFunction::derivative(&model, &[0], x).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ScalarFunction::derivative(&model, &[], x).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}

#[test]
fn boxed_as_trait_object() {
    let functions: Vec<Box<dyn ScalarFunction>> = vec![
        Box::new(FirstOrderActivation::default()),
        Box::new(
            FirstOrderActivation::from_params(ActivationParams::slow_twitch(), "soleus").unwrap(),
        ),
    ];

    let rates: Vec<f64> = functions
        .iter()
        .map(|f| f.derivative(&[0], &[0.01, 1.0]).unwrap())
        .collect();

    // Slow-twitch rises at half the rate.
    assert_relative_eq!(rates[0], 200.0, epsilon = 1e-9);
    assert_relative_eq!(rates[1], 100.0, epsilon = 1e-9);
}

// =============================================================================
// Stepping
// =============================================================================

#[test]
fn activation_is_faster_than_deactivation() {
    let model = FirstOrderActivation::default();
    let dt = 0.001;

    let mut rising = ActivationState::new(&model);
    rising.set_excitation(1.0);
    let mut rise_steps = 0;
    while model.normalized_activation(rising.activation) < 0.5 {
        rising.advance(&model, dt).unwrap();
        rise_steps += 1;
    }

    let mut falling = ActivationState {
        activation: 1.0,
        excitation: 0.0,
    };
    let mut fall_steps = 0;
    while model.normalized_activation(falling.activation) > 0.5 {
        falling.advance(&model, dt).unwrap();
        fall_steps += 1;
    }

    assert!(rise_steps < fall_steps, "{rise_steps} vs {fall_steps}");
}

#[test]
fn stepping_with_updated_floor() {
    let mut model = FirstOrderActivation::default();
    model.set_min_activation(0.1).unwrap();

    let mut state = ActivationState::new(&model);
    assert_eq!(state.activation, 0.1);
    assert_eq!(state.advance(&model, 0.001).unwrap(), 0.0);
    assert_eq!(state.activation, 0.1);
}
