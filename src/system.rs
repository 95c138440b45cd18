//! The Lorenz system.
//!
//! Parameters, vector field, and closed-form critical points for the
//! three-dimensional Lorenz equations:
//!
//! ```text
//! dx/dt = sigma * (y - x)
//! dy/dt = x * (rho - z) - y
//! dz/dt = x * y - beta * z
//! ```
//!
//! The chaotic-regime parameters rho = 28, sigma = 10, beta = 8/3 are the
//! crate-wide defaults.

use serde::{Deserialize, Serialize};

use crate::error::{LorenzError, LorenzResult};
use crate::state::Vec3;

/// Immutable Lorenz parameter set.
///
/// Carried as a plain value and passed explicitly into every component
/// that needs it; never global state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzParams {
    /// Rayleigh number rho.
    pub rho: f64,
    /// Prandtl number sigma.
    pub sigma: f64,
    /// Geometric factor beta.
    pub beta: f64,
}

impl LorenzParams {
    /// Create a parameter set.
    #[must_use]
    pub const fn new(rho: f64, sigma: f64, beta: f64) -> Self {
        Self { rho, sigma, beta }
    }

    /// The classic chaotic-regime parameters: rho = 28, sigma = 10,
    /// beta = 8/3.
    #[must_use]
    pub const fn chaotic() -> Self {
        Self {
            rho: 28.0,
            sigma: 10.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self::chaotic()
    }
}

/// Vector field trait: velocity of the flow at a phase-space point.
pub trait VectorField {
    /// Compute the instantaneous velocity at `point`.
    fn velocity(&self, point: &Vec3) -> Vec3;
}

/// The Lorenz system with a fixed parameter set.
#[derive(Debug, Clone, Copy, Default)]
pub struct LorenzSystem {
    params: LorenzParams,
}

impl LorenzSystem {
    /// Create a system from a parameter set.
    #[must_use]
    pub const fn new(params: LorenzParams) -> Self {
        Self { params }
    }

    /// The system's parameter set.
    #[must_use]
    pub const fn params(&self) -> LorenzParams {
        self.params
    }

    /// The two non-trivial fixed points of the system, in closed form:
    /// (s, s, rho - 1) and (-s, -s, rho - 1) with s = sqrt(beta * (rho - 1)).
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError::Domain`] if rho <= 1, where the square root
    /// argument is non-positive and the fixed points collapse into the
    /// origin.
    pub fn critical_points(&self) -> LorenzResult<[Vec3; 2]> {
        let LorenzParams { rho, sigma: _, beta } = self.params;
        if rho <= 1.0 {
            return Err(LorenzError::Domain { rho });
        }

        let s = (beta * (rho - 1.0)).sqrt();
        let z = rho - 1.0;
        Ok([Vec3::new(s, s, z), Vec3::new(-s, -s, z)])
    }
}

impl VectorField for LorenzSystem {
    fn velocity(&self, point: &Vec3) -> Vec3 {
        let LorenzParams { rho, sigma, beta } = self.params;
        let Vec3 { x, y, z } = *point;

        Vec3 {
            x: sigma * (y - x),
            y: x * (rho - z) - y,
            z: x * y - beta * z,
        }
    }
}
