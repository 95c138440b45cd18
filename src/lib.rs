//! # lorenzviz
//!
//! Lorenz attractor simulator and animation builder.
//!
//! Integrates the Lorenz system with fixed-step forward Euler, decimates
//! the trajectory, packages successive trajectory prefixes into
//! plotly-shaped animation frames, and merges two trajectories' frames to
//! illustrate sensitivity to initial conditions.
//!
//! ## Example
//!
//! ```rust
//! use lorenzviz::prelude::*;
//!
//! let config = LorenzConfig::builder()
//!     .steps(100)
//!     .stride(5)
//!     .build();
//! let figure = lorenzviz::pipeline::build_figure(&config)?;
//! assert_eq!(figure.frames.len(), 21);
//! # Ok::<(), LorenzError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::suboptimal_flops, // Arithmetic order is pinned for reproducibility
    clippy::imprecise_flops,  // Numerical code choices are intentional
    clippy::missing_const_for_fn
)]

pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod figure;
pub mod integrate;
pub mod pipeline;
pub mod scene;
pub mod state;
pub mod system;
pub mod trajectory;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{LorenzConfig, LorenzConfigBuilder};
    pub use crate::error::{LorenzError, LorenzResult};
    pub use crate::figure::{Figure, Frame, Trace};
    pub use crate::integrate::{EulerIntegrator, Integrator};
    pub use crate::state::Vec3;
    pub use crate::system::{LorenzParams, LorenzSystem, VectorField};
    pub use crate::trajectory::{Trajectory, TrajectoryConfig};
}

/// Re-export for public API
pub use error::{LorenzError, LorenzResult};
