//! The figure contract handed to the 3D plotting front-end.
//!
//! These types serialize to the plotly figure JSON shape: a `layout`
//! section (axis ranges, 3D camera, title), a `data` section of scatter3d
//! traces, and an ordered list of animation `frames` whose data replaces
//! the figure's data section at render time.
//!
//! This is an external collaborator's data format; nothing here computes,
//! it only carries.

use serde::{Deserialize, Serialize};

use crate::state::Vec3;

/// A complete figure: static layout and data plus animation frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Static layout: axes, camera, title.
    pub layout: Layout,
    /// Initial traces shown before the animation starts.
    pub data: Vec<Trace>,
    /// Animation frames, one data section per animation step.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

/// Figure layout section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// X axis range, auto-ranging disabled.
    pub xaxis: Axis,
    /// Y axis range, auto-ranging disabled.
    pub yaxis: Axis,
    /// 3D scene settings (camera pose).
    pub scene: Scene,
    /// Figure title.
    pub title: String,
}

/// A fixed `[min, max]` axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis range as a `[min, max]` pair.
    pub range: [f64; 2],
    /// Always false: the range above is authoritative.
    pub autorange: bool,
}

impl Axis {
    /// A fixed-range axis.
    #[must_use]
    pub const fn fixed(min: f64, max: f64) -> Self {
        Self {
            range: [min, max],
            autorange: false,
        }
    }
}

/// 3D scene settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Camera pose.
    pub camera: Camera,
}

/// Camera pose as up/center/eye vectors.
///
/// The vectors reuse [`Vec3`], which serializes as `{x, y, z}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Up direction.
    pub up: Vec3,
    /// Point the camera looks at.
    pub center: Vec3,
    /// Camera position.
    pub eye: Vec3,
}

/// Display mode of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    /// Connected polyline.
    Lines,
    /// Discrete markers.
    Markers,
}

/// Marker styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// CSS color string, e.g. `rgb(255,0,0)`.
    pub color: String,
}

/// A single renderable scatter3d trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Render type tag; always `scatter3d` in this crate.
    #[serde(rename = "type")]
    pub trace_type: String,
    /// X coordinates.
    pub x: Vec<f64>,
    /// Y coordinates.
    pub y: Vec<f64>,
    /// Z coordinates.
    pub z: Vec<f64>,
    /// Display mode; omitted from JSON when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TraceMode>,
    /// Legend name; omitted from JSON when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Marker styling; omitted from JSON when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    /// A bare scatter3d trace with the given coordinate arrays.
    #[must_use]
    pub fn scatter3d(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        Self {
            trace_type: "scatter3d".to_string(),
            x,
            y,
            z,
            mode: None,
            name: None,
            marker: None,
        }
    }

    /// A polyline trace through the given coordinates.
    #[must_use]
    pub fn lines(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        Self {
            mode: Some(TraceMode::Lines),
            ..Self::scatter3d(x, y, z)
        }
    }

    /// A single-point marker trace at `point`.
    #[must_use]
    pub fn point_marker(point: Vec3) -> Self {
        Self {
            mode: Some(TraceMode::Markers),
            ..Self::scatter3d(vec![point.x], vec![point.y], vec![point.z])
        }
    }

    /// Set the legend name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the marker color.
    #[must_use]
    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.marker = Some(Marker {
            color: color.into(),
        });
        self
    }

    /// Number of points in this trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether this trace holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// One animation frame: the traces that replace the data section at this
/// animation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Renderable traces for this frame.
    pub data: Vec<Trace>,
}
