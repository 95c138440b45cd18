//! Frame assembly and merging.
//!
//! Converts a trajectory into a sequence of animation frames (a growing
//! cumulative polyline plus a current-position marker), and merges two
//! parallel frame sequences for a side-by-side comparison of diverging
//! trajectories.

use crate::error::{LorenzError, LorenzResult};
use crate::figure::{Frame, Trace};
use crate::trajectory::Trajectory;

/// Legend name of the cumulative path trace in each frame.
pub const PATH_TRACE_NAME: &str = "particle trajectory";

/// Legend name of the current-position marker in each frame.
pub const MARKER_TRACE_NAME: &str = "particle";

/// Build one frame per trajectory point.
///
/// Frame k carries an owned snapshot of the first k + 1 points as a
/// polyline plus a single marker at point k, so each frame's path strictly
/// extends the previous frame's by one point. The coordinate buffers are
/// cloned at frame creation; later growth never reaches back into earlier
/// frames.
#[must_use]
pub fn assemble_frames(trajectory: &Trajectory) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(trajectory.len());
    let mut xs: Vec<f64> = Vec::with_capacity(trajectory.len());
    let mut ys: Vec<f64> = Vec::with_capacity(trajectory.len());
    let mut zs: Vec<f64> = Vec::with_capacity(trajectory.len());

    for point in trajectory.points() {
        xs.push(point.x);
        ys.push(point.y);
        zs.push(point.z);

        let path = Trace::lines(xs.clone(), ys.clone(), zs.clone()).named(PATH_TRACE_NAME);
        let marker = Trace::point_marker(*point).named(MARKER_TRACE_NAME);

        frames.push(Frame {
            data: vec![path, marker],
        });
    }

    frames
}

/// Merge two equal-length frame sequences index-wise.
///
/// Merged frame i holds `first[i]`'s traces followed by `second[i]`'s.
///
/// # Errors
///
/// Returns [`LorenzError::FrameLengthMismatch`] if the sequences differ in
/// length; the merge never truncates silently.
pub fn merge_frames(first: &[Frame], second: &[Frame]) -> LorenzResult<Vec<Frame>> {
    if first.len() != second.len() {
        return Err(LorenzError::FrameLengthMismatch {
            left: first.len(),
            right: second.len(),
        });
    }

    Ok(first
        .iter()
        .zip(second)
        .map(|(a, b)| {
            let mut data = Vec::with_capacity(a.data.len() + b.data.len());
            data.extend(a.data.iter().cloned());
            data.extend(b.data.iter().cloned());
            Frame { data }
        })
        .collect())
}
