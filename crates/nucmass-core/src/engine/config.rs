use crate::core::formula::model::{MassConstants, MassModel, SemfCoefficients, StabilityWindow};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid stability window: lower ratio {lower} must be finite and below upper ratio {upper}")]
    InvalidStabilityWindow { lower: f64, upper: f64 },

    #[error("Invalid value for '{name}': {value} (must be finite and positive)")]
    NonPositive { name: &'static str, value: f64 },
}

/// Validated settings for an evaluation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub model: MassModel,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            model: MassModel::REFERENCE,
        }
    }
}

#[derive(Default)]
pub struct ReportConfigBuilder {
    coefficients: Option<SemfCoefficients>,
    masses: Option<MassConstants>,
    radius_constant: Option<f64>,
    stability: Option<StabilityWindow>,
}

impl ReportConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds every parameter from an existing model; later setters override individual parts.
    pub fn model(mut self, model: MassModel) -> Self {
        self.coefficients = Some(model.coefficients);
        self.masses = Some(model.masses);
        self.radius_constant = Some(model.radius_constant);
        self.stability = Some(model.stability);
        self
    }
    pub fn coefficients(mut self, coefficients: SemfCoefficients) -> Self {
        self.coefficients = Some(coefficients);
        self
    }
    pub fn masses(mut self, masses: MassConstants) -> Self {
        self.masses = Some(masses);
        self
    }
    pub fn radius_constant(mut self, r_0: f64) -> Self {
        self.radius_constant = Some(r_0);
        self
    }
    pub fn stability_window(mut self, window: StabilityWindow) -> Self {
        self.stability = Some(window);
        self
    }

    pub fn build(self) -> Result<ReportConfig, ConfigError> {
        let coefficients = self
            .coefficients
            .ok_or(ConfigError::MissingParameter("coefficients"))?;
        let masses = self.masses.ok_or(ConfigError::MissingParameter("masses"))?;
        let radius_constant = self
            .radius_constant
            .ok_or(ConfigError::MissingParameter("radius_constant"))?;
        let stability = self
            .stability
            .ok_or(ConfigError::MissingParameter("stability_window"))?;

        if !stability.is_valid() {
            return Err(ConfigError::InvalidStabilityWindow {
                lower: stability.lower_ratio,
                upper: stability.upper_ratio,
            });
        }
        ensure_positive("radius_constant", radius_constant)?;
        ensure_positive("masses.mev_per_u", masses.mev_per_u)?;

        Ok(ReportConfig {
            model: MassModel {
                coefficients,
                masses,
                radius_constant,
                stability,
            },
        })
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
