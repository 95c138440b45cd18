//! Fixed-step numerical integration.
//!
//! A single shipped scheme: explicit forward Euler, first order. The step
//! is a pure function from one phase-space point to the next; no component
//! holds hidden mutable simulation state.
//!
//! Numerical semantics are plain IEEE double arithmetic. The step itself
//! never traps NaN or infinity; blow-up from a bad dt propagates as
//! non-finite values and is surfaced separately (see
//! [`crate::trajectory::Trajectory::check_finite`]).

use crate::state::Vec3;
use crate::system::VectorField;

/// Fixed-step integrator trait.
pub trait Integrator {
    /// Advance `state` by one step of size `dt` through `field`.
    fn step(&self, field: &dyn VectorField, state: Vec3, dt: f64) -> Vec3;

    /// Get the error order of this integrator.
    fn error_order(&self) -> u32;
}

/// Forward Euler integrator (1st order, explicit).
///
/// ```text
/// x_{n+1} = x_n + f(x_n) * dt
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl EulerIntegrator {
    /// Create a new Euler integrator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Integrator for EulerIntegrator {
    fn step(&self, field: &dyn VectorField, state: Vec3, dt: f64) -> Vec3 {
        state + field.velocity(&state) * dt
    }

    fn error_order(&self) -> u32 {
        1
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::system::LorenzSystem;
    use proptest::prelude::*;

    proptest! {
        /// dt = 0 leaves any finite state exactly unchanged.
        #[test]
        fn prop_zero_dt_identity(
            x in -1e6f64..1e6,
            y in -1e6f64..1e6,
            z in -1e6f64..1e6,
        ) {
            let system = LorenzSystem::default();
            let state = Vec3::new(x, y, z);
            let next = EulerIntegrator::new().step(&system, state, 0.0);
            prop_assert_eq!(next, state);
        }
    }
}
