//! Static initial scene.
//!
//! Builds the figure shown before the animation starts: fixed axis
//! ranges, a fixed camera pose, one placeholder origin marker per
//! particle, and the two labelled critical-point markers. Pure
//! data-structure assembly; the only computation is embedding the
//! closed-form critical points.

use crate::error::LorenzResult;
use crate::figure::{Axis, Camera, Figure, Layout, Scene, Trace};
use crate::state::Vec3;
use crate::system::LorenzSystem;

/// Marker color of the two particle placeholders.
pub const PARTICLE_COLOR: &str = "rgb(0,255,0)";

/// Marker color of the critical-point markers.
pub const CRITICAL_POINT_COLOR: &str = "rgb(255,0,0)";

/// Fixed x/y axis range.
const AXIS_RANGE: (f64, f64) = (0.0, 5.0);

/// Build the initial figure for `system`, titled `title`.
///
/// The data section holds, in order: two green origin placeholders (one
/// per animated particle, overwritten by the frames at render time) and
/// the two red critical-point markers.
///
/// # Errors
///
/// Returns [`crate::error::LorenzError::Domain`] if the system's rho <= 1,
/// where no critical points exist.
pub fn init_figure(system: &LorenzSystem, title: impl Into<String>) -> LorenzResult<Figure> {
    let [cp1, cp2] = system.critical_points()?;

    let layout = Layout {
        xaxis: Axis::fixed(AXIS_RANGE.0, AXIS_RANGE.1),
        yaxis: Axis::fixed(AXIS_RANGE.0, AXIS_RANGE.1),
        scene: Scene {
            camera: Camera {
                up: Vec3::new(0.0, 0.0, 0.5),
                center: Vec3::zero(),
                eye: Vec3::new(1.25, 0.0, 1.25),
            },
        },
        title: title.into(),
    };

    let data = vec![
        Trace::scatter3d(vec![0.0], vec![0.0], vec![0.0]).colored(PARTICLE_COLOR),
        Trace::scatter3d(vec![0.0], vec![0.0], vec![0.0]).colored(PARTICLE_COLOR),
        Trace::scatter3d(vec![cp1.x], vec![cp1.y], vec![cp1.z])
            .named("critical point 1")
            .colored(CRITICAL_POINT_COLOR),
        Trace::scatter3d(vec![cp2.x], vec![cp2.y], vec![cp2.z])
            .named("critical point 2")
            .colored(CRITICAL_POINT_COLOR),
    ];

    Ok(Figure {
        layout,
        data,
        frames: Vec::new(),
    })
}
