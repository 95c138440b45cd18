//! Trajectory generation with decimation.
//!
//! Runs every integration step but retains only a stride-spaced subset of
//! the computed states, to keep the animation payload small.

use serde::{Deserialize, Serialize};

use crate::error::{LorenzError, LorenzResult};
use crate::integrate::Integrator;
use crate::state::Vec3;
use crate::system::VectorField;

/// Trajectory generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    /// Integration time step.
    pub dt: f64,
    /// Total number of integration steps; all of them always execute.
    pub steps: usize,
    /// Retain the computed state at every stride-th loop index.
    pub stride: usize,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            steps: 1000,
            stride: 5,
        }
    }
}

impl TrajectoryConfig {
    /// Number of points a generated trajectory will contain:
    /// the initial condition plus one retained point per stride interval.
    #[must_use]
    pub fn expected_len(&self) -> usize {
        1 + self.steps.div_ceil(self.stride.max(1))
    }
}

/// An ordered, finite sequence of phase-space points: the initial
/// condition followed by every retained integration step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    points: Vec<Vec3>,
}

impl Trajectory {
    /// Integrate `steps` Euler (or other fixed-step) updates from
    /// `initial`, retaining the post-step state at loop indices where
    /// `i % stride == 0`.
    ///
    /// Retention phase: the retained indices are 0, stride, 2*stride, ...,
    /// so the second trajectory point lies a single step past the initial
    /// condition and subsequent retained points are `stride` steps apart.
    /// With the default 1000 steps and stride 5 this yields 201 points.
    #[must_use]
    pub fn generate<I, F>(integrator: &I, field: &F, initial: Vec3, config: &TrajectoryConfig) -> Self
    where
        I: Integrator,
        F: VectorField,
    {
        // Stride 0 behaves as 1; config validation rejects it upstream.
        let stride = config.stride.max(1);

        let mut points = Vec::with_capacity(1 + config.steps.div_ceil(stride));
        points.push(initial);

        let mut state = initial;
        for i in 0..config.steps {
            state = integrator.step(field, state, config.dt);
            if i % stride == 0 {
                points.push(state);
            }
        }

        Self { points }
    }

    /// Build a trajectory directly from points (test scaffolding and
    /// replays).
    #[must_use]
    pub const fn from_points(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// The retained points, initial condition first.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of retained points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trajectory holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last retained point.
    #[must_use]
    pub fn last(&self) -> Option<&Vec3> {
        self.points.last()
    }

    /// Report the first non-finite point, if any.
    ///
    /// Integration itself never traps NaN or infinity; callers that want
    /// blow-up surfaced as an error run this check after generation.
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError::NonFinite`] with the index of the first
    /// non-finite point.
    pub fn check_finite(&self) -> LorenzResult<()> {
        for (index, point) in self.points.iter().enumerate() {
            if !point.is_finite() {
                return Err(LorenzError::NonFinite { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::integrate::EulerIntegrator;
    use crate::system::LorenzSystem;

    fn generate_default(initial: Vec3) -> Trajectory {
        Trajectory::generate(
            &EulerIntegrator::new(),
            &LorenzSystem::default(),
            initial,
            &TrajectoryConfig::default(),
        )
    }

    #[test]
    fn test_default_config() {
        let config = TrajectoryConfig::default();
        assert!((config.dt - 0.01).abs() < f64::EPSILON);
        assert_eq!(config.steps, 1000);
        assert_eq!(config.stride, 5);
        assert_eq!(config.expected_len(), 201);
    }

    #[test]
    fn test_default_trajectory_has_201_points() {
        let trajectory = generate_default(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(trajectory.len(), 201);
        assert!(!trajectory.is_empty());
    }

    #[test]
    fn test_initial_condition_comes_first() {
        let initial = Vec3::new(1.0, 2.0, 3.0);
        let trajectory = generate_default(initial);
        assert_eq!(trajectory.points()[0], initial);
    }

    #[test]
    fn test_second_point_is_one_step() {
        // Retention happens at loop index 0, one step past the initial
        // condition.
        let system = LorenzSystem::default();
        let euler = EulerIntegrator::new();
        let initial = Vec3::new(1.0, 2.0, 3.0);

        let trajectory = generate_default(initial);
        let one_step = euler.step(&system, initial, 0.01);
        assert_eq!(trajectory.points()[1], one_step);
    }

    #[test]
    fn test_third_point_is_six_steps() {
        // Indices 0 and 5 are retained, so points[2] sits 6 steps out.
        let system = LorenzSystem::default();
        let euler = EulerIntegrator::new();
        let mut state = Vec3::new(1.0, 2.0, 3.0);

        let trajectory = generate_default(state);
        for _ in 0..6 {
            state = euler.step(&system, state, 0.01);
        }
        assert_eq!(trajectory.points()[2], state);
    }

    #[test]
    fn test_stride_one_retains_everything() {
        let config = TrajectoryConfig {
            dt: 0.01,
            steps: 10,
            stride: 1,
        };
        let trajectory = Trajectory::generate(
            &EulerIntegrator::new(),
            &LorenzSystem::default(),
            Vec3::new(1.0, 2.0, 3.0),
            &config,
        );
        assert_eq!(trajectory.len(), 11);
        assert_eq!(trajectory.len(), config.expected_len());
    }

    #[test]
    fn test_zero_steps_keeps_only_initial() {
        let config = TrajectoryConfig {
            dt: 0.01,
            steps: 0,
            stride: 5,
        };
        let initial = Vec3::new(1.0, 2.0, 3.0);
        let trajectory = Trajectory::generate(
            &EulerIntegrator::new(),
            &LorenzSystem::default(),
            initial,
            &config,
        );
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.last(), Some(&initial));
    }

    #[test]
    fn test_check_finite_ok() {
        let trajectory = generate_default(Vec3::new(1.0, 2.0, 3.0));
        assert!(trajectory.check_finite().is_ok());
    }

    #[test]
    fn test_check_finite_reports_first_bad_index() {
        let trajectory = Trajectory::from_points(vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(f64::NAN, 0.0, 0.0),
            Vec3::new(f64::INFINITY, 0.0, 0.0),
        ]);
        let err = trajectory.check_finite().unwrap_err();
        assert!(matches!(err, crate::error::LorenzError::NonFinite { index: 1 }));
    }

    #[test]
    fn test_blow_up_from_huge_dt_is_detectable() {
        // An absurd step size drives the state non-finite within the run.
        let config = TrajectoryConfig {
            dt: 100.0,
            steps: 50,
            stride: 1,
        };
        let trajectory = Trajectory::generate(
            &EulerIntegrator::new(),
            &LorenzSystem::default(),
            Vec3::new(1.0, 2.0, 3.0),
            &config,
        );
        assert!(trajectory.check_finite().is_err());
    }
}
