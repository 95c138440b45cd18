//! End-to-end figure construction.
//!
//! Wires the whole pipeline: configuration -> system -> two trajectories
//! -> two frame sequences -> merged frames attached to the static scene.
//! Everything is computed eagerly and in full before the figure is handed
//! to the renderer; there is no streaming path.

use crate::animation::{assemble_frames, merge_frames};
use crate::config::LorenzConfig;
use crate::error::LorenzResult;
use crate::figure::Figure;
use crate::integrate::EulerIntegrator;
use crate::scene::init_figure;
use crate::state::Vec3;
use crate::system::LorenzSystem;
use crate::trajectory::Trajectory;

/// Build the complete animated figure described by `config`.
///
/// # Errors
///
/// Returns an error if the configured rho admits no critical points, or
/// if either trajectory blows up to non-finite values.
pub fn build_figure(config: &LorenzConfig) -> LorenzResult<Figure> {
    let system = LorenzSystem::new(config.params());
    let integrator = EulerIntegrator::new();
    let trajectory_config = config.trajectory_config();

    let first = Trajectory::generate(
        &integrator,
        &system,
        Vec3::from(config.particles.first),
        &trajectory_config,
    );
    first.check_finite()?;

    let second = Trajectory::generate(
        &integrator,
        &system,
        Vec3::from(config.particles.second),
        &trajectory_config,
    );
    second.check_finite()?;

    let frames = merge_frames(&assemble_frames(&first), &assemble_frames(&second))?;

    let mut figure = init_figure(&system, config.output.title.clone())?;
    figure.frames = frames;
    Ok(figure)
}
