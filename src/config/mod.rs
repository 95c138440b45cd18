//! Configuration system with YAML schema and validation.
//!
//! Type-safe configuration structs with serde defaults matching the
//! classic chaotic-regime run (rho = 28, sigma = 10, beta = 8/3, dt = 0.01,
//! 1000 steps, stride 5, particles at (1,2,3) and (1,2,3.1)), plus runtime
//! semantic validation beyond what the schema can express.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{LorenzError, LorenzResult};
use crate::system::LorenzParams;
use crate::trajectory::TrajectoryConfig;

/// Top-level configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LorenzConfig {
    /// Lorenz system parameters.
    #[serde(default)]
    pub system: SystemConfig,

    /// Integration settings.
    #[validate(nested)]
    #[serde(default)]
    pub integration: IntegrationConfig,

    /// The two simulated particles.
    #[serde(default)]
    pub particles: ParticlesConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for LorenzConfig {
    fn default() -> Self {
        Self {
            system: SystemConfig::default(),
            integration: IntegrationConfig::default(),
            particles: ParticlesConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl LorenzConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> LorenzResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> LorenzResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> LorenzConfigBuilder {
        LorenzConfigBuilder::default()
    }

    /// Validate semantic constraints beyond the schema.
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError::Config`] on a violated constraint.
    pub fn validate_semantic(&self) -> LorenzResult<()> {
        let dt = self.integration.dt;
        if dt <= 0.0 {
            return Err(LorenzError::config("timestep must be positive"));
        }
        if !dt.is_finite() {
            return Err(LorenzError::config("timestep must be finite"));
        }

        // Critical-point markers are always part of the scene.
        if self.system.rho <= 1.0 {
            return Err(LorenzError::config(format!(
                "rho must exceed 1 for critical points to exist, got {}",
                self.system.rho
            )));
        }

        Ok(())
    }

    /// The Lorenz parameter set this configuration describes.
    #[must_use]
    pub const fn params(&self) -> LorenzParams {
        LorenzParams::new(self.system.rho, self.system.sigma, self.system.beta)
    }

    /// The trajectory settings this configuration describes.
    #[must_use]
    pub const fn trajectory_config(&self) -> TrajectoryConfig {
        TrajectoryConfig {
            dt: self.integration.dt,
            steps: self.integration.steps,
            stride: self.integration.stride,
        }
    }
}

/// Lorenz system parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    /// Rayleigh number rho.
    #[serde(default = "default_rho")]
    pub rho: f64,
    /// Prandtl number sigma.
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    /// Geometric factor beta.
    #[serde(default = "default_beta")]
    pub beta: f64,
}

const fn default_rho() -> f64 {
    28.0
}

const fn default_sigma() -> f64 {
    10.0
}

const fn default_beta() -> f64 {
    8.0 / 3.0
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            rho: default_rho(),
            sigma: default_sigma(),
            beta: default_beta(),
        }
    }
}

/// Integration settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct IntegrationConfig {
    /// Integration time step.
    #[serde(default = "default_dt")]
    pub dt: f64,
    /// Total number of integration steps.
    #[validate(range(min = 1))]
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Decimation stride: retain every stride-th computed state.
    #[validate(range(min = 1))]
    #[serde(default = "default_stride")]
    pub stride: usize,
}

const fn default_dt() -> f64 {
    0.01
}

const fn default_steps() -> usize {
    1000
}

const fn default_stride() -> usize {
    5
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            steps: default_steps(),
            stride: default_stride(),
        }
    }
}

/// Initial conditions of the two simulated particles.
///
/// The defaults differ by 0.1 in z to demonstrate sensitivity to initial
/// conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParticlesConfig {
    /// First particle's initial position.
    #[serde(default = "default_first_particle")]
    pub first: [f64; 3],
    /// Second particle's initial position.
    #[serde(default = "default_second_particle")]
    pub second: [f64; 3],
}

const fn default_first_particle() -> [f64; 3] {
    [1.0, 2.0, 3.0]
}

const fn default_second_particle() -> [f64; 3] {
    [1.0, 2.0, 3.1]
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            first: default_first_particle(),
            second: default_second_particle(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output file path.
    #[serde(default = "default_output_path")]
    pub path: std::path::PathBuf,
    /// Figure title.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_output_path() -> std::path::PathBuf {
    std::path::PathBuf::from("lorenz.html")
}

fn default_title() -> String {
    "Lorenz attractor".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            title: default_title(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct LorenzConfigBuilder {
    rho: Option<f64>,
    sigma: Option<f64>,
    beta: Option<f64>,
    dt: Option<f64>,
    steps: Option<usize>,
    stride: Option<usize>,
    first: Option<[f64; 3]>,
    second: Option<[f64; 3]>,
    title: Option<String>,
}

impl LorenzConfigBuilder {
    /// Set rho.
    #[must_use]
    pub const fn rho(mut self, rho: f64) -> Self {
        self.rho = Some(rho);
        self
    }

    /// Set sigma.
    #[must_use]
    pub const fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = Some(sigma);
        self
    }

    /// Set beta.
    #[must_use]
    pub const fn beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Set the timestep.
    #[must_use]
    pub const fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Set the total step count.
    #[must_use]
    pub const fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Set the decimation stride.
    #[must_use]
    pub const fn stride(mut self, stride: usize) -> Self {
        self.stride = Some(stride);
        self
    }

    /// Set the first particle's initial position.
    #[must_use]
    pub const fn first_particle(mut self, position: [f64; 3]) -> Self {
        self.first = Some(position);
        self
    }

    /// Set the second particle's initial position.
    #[must_use]
    pub const fn second_particle(mut self, position: [f64; 3]) -> Self {
        self.second = Some(position);
        self
    }

    /// Set the figure title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> LorenzConfig {
        let mut config = LorenzConfig::default();

        if let Some(rho) = self.rho {
            config.system.rho = rho;
        }
        if let Some(sigma) = self.sigma {
            config.system.sigma = sigma;
        }
        if let Some(beta) = self.beta {
            config.system.beta = beta;
        }
        if let Some(dt) = self.dt {
            config.integration.dt = dt;
        }
        if let Some(steps) = self.steps {
            config.integration.steps = steps;
        }
        if let Some(stride) = self.stride {
            config.integration.stride = stride;
        }
        if let Some(first) = self.first {
            config.particles.first = first;
        }
        if let Some(second) = self.second {
            config.particles.second = second;
        }
        if let Some(title) = self.title {
            config.output.title = title;
        }

        config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_classic_run() {
        let config = LorenzConfig::default();
        assert!((config.system.rho - 28.0).abs() < f64::EPSILON);
        assert!((config.system.sigma - 10.0).abs() < f64::EPSILON);
        assert!((config.system.beta - 8.0 / 3.0).abs() < f64::EPSILON);
        assert!((config.integration.dt - 0.01).abs() < f64::EPSILON);
        assert_eq!(config.integration.steps, 1000);
        assert_eq!(config.integration.stride, 5);
        assert_eq!(config.particles.first, [1.0, 2.0, 3.0]);
        assert_eq!(config.particles.second, [1.0, 2.0, 3.1]);
        assert_eq!(config.output.title, "Lorenz attractor");
        assert!(config.validate_semantic().is_ok());
    }

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = LorenzConfig::from_yaml("{}").unwrap();
        assert_eq!(config.integration.steps, 1000);
        assert_eq!(config.trajectory_config().expected_len(), 201);
    }

    #[test]
    fn test_yaml_overrides() {
        let yaml = r"
system:
  rho: 30.0
integration:
  dt: 0.005
  steps: 2000
  stride: 10
particles:
  first: [0.0, 1.0, 1.05]
output:
  title: custom run
";
        let config = LorenzConfig::from_yaml(yaml).unwrap();
        assert!((config.system.rho - 30.0).abs() < f64::EPSILON);
        assert!((config.integration.dt - 0.005).abs() < f64::EPSILON);
        assert_eq!(config.integration.steps, 2000);
        assert_eq!(config.integration.stride, 10);
        assert_eq!(config.particles.first, [0.0, 1.0, 1.05]);
        // Unspecified fields keep their defaults.
        assert_eq!(config.particles.second, [1.0, 2.0, 3.1]);
        assert_eq!(config.output.title, "custom run");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let yaml = "unknown_section:\n  value: 1\n";
        assert!(LorenzConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_zero_stride_rejected() {
        let yaml = "integration:\n  stride: 0\n";
        assert!(LorenzConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_zero_steps_rejected() {
        let yaml = "integration:\n  steps: 0\n";
        assert!(LorenzConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_non_positive_dt_rejected() {
        let yaml = "integration:\n  dt: 0.0\n";
        assert!(LorenzConfig::from_yaml(yaml).is_err());

        let yaml = "integration:\n  dt: -0.01\n";
        assert!(LorenzConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_small_rho_rejected() {
        let yaml = "system:\n  rho: 1.0\n";
        let err = LorenzConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("rho"));
    }

    #[test]
    fn test_builder() {
        let config = LorenzConfig::builder()
            .rho(26.0)
            .dt(0.002)
            .steps(500)
            .stride(2)
            .first_particle([0.5, 0.5, 0.5])
            .title("builder run")
            .build();

        assert!((config.system.rho - 26.0).abs() < f64::EPSILON);
        assert!((config.integration.dt - 0.002).abs() < f64::EPSILON);
        assert_eq!(config.integration.steps, 500);
        assert_eq!(config.integration.stride, 2);
        assert_eq!(config.particles.first, [0.5, 0.5, 0.5]);
        assert_eq!(config.output.title, "builder run");
        // Untouched fields keep defaults.
        assert!((config.system.sigma - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_params_and_trajectory_config_conversion() {
        let config = LorenzConfig::default();
        let params = config.params();
        assert!((params.rho - 28.0).abs() < f64::EPSILON);

        let tc = config.trajectory_config();
        assert_eq!(tc.steps, 1000);
        assert_eq!(tc.stride, 5);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = LorenzConfig::builder().rho(29.5).build();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back = LorenzConfig::from_yaml(&yaml).unwrap();
        assert!((back.system.rho - 29.5).abs() < f64::EPSILON);
    }
}
