use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Coefficients of the Weizsäcker semi-empirical mass formula, in MeV.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct SemfCoefficients {
    /// Volume coefficient `a_v`.
    pub volume: f64,
    /// Surface coefficient `a_s`.
    pub surface: f64,
    /// Coulomb coefficient `a_c`.
    pub coulomb: f64,
    /// Asymmetry coefficient `a_a`.
    pub asymmetry: f64,
    /// Pairing amplitude `δ₀`, scaled by `A^(−3/4)`.
    pub pairing: f64,
}

impl SemfCoefficients {
    pub const REFERENCE: Self = Self {
        volume: 15.56,
        surface: 17.23,
        coulomb: 0.7,
        asymmetry: 23.285,
        pairing: 12.0,
    };
}

impl Default for SemfCoefficients {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Particle rest masses in atomic mass units and the MeV to u conversion divisor.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct MassConstants {
    pub proton: f64,
    pub neutron: f64,
    pub electron: f64,
    /// Energy equivalent of one atomic mass unit, in MeV.
    pub mev_per_u: f64,
}

impl MassConstants {
    pub const REFERENCE: Self = Self {
        proton: 1.007276,
        neutron: 1.008665,
        electron: 0.0005486,
        mev_per_u: 931.5,
    };
}

impl Default for MassConstants {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Open interval of neutron-to-proton ratios treated as stable against beta decay.
///
/// Both bounds are exclusive: a nucleus exactly on either boundary is classified as unstable.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct StabilityWindow {
    pub lower_ratio: f64,
    pub upper_ratio: f64,
}

impl StabilityWindow {
    pub const REFERENCE: Self = Self {
        lower_ratio: 1.0,
        upper_ratio: 1.6,
    };

    #[inline]
    pub fn contains(&self, ratio: f64) -> bool {
        self.lower_ratio < ratio && ratio < self.upper_ratio
    }

    pub fn is_valid(&self) -> bool {
        self.lower_ratio.is_finite()
            && self.upper_ratio.is_finite()
            && self.lower_ratio < self.upper_ratio
    }
}

impl Default for StabilityWindow {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// The complete parameter set used to evaluate a [`Nucleus`](crate::core::models::nucleus::Nucleus).
///
/// [`MassModel::REFERENCE`] holds the textbook constants; every `Nucleus` method without a
/// model argument evaluates against it. A custom model can be loaded from a TOML file in
/// which every section and key is optional, missing values falling back to the reference:
///
/// ```toml
/// radius-constant = 1.2
///
/// [coefficients]
/// volume = 15.56
/// surface = 17.23
/// coulomb = 0.7
/// asymmetry = 23.285
/// pairing = 12.0
///
/// [masses]
/// proton = 1.007276
/// neutron = 1.008665
/// electron = 0.0005486
/// mev-per-u = 931.5
///
/// [stability]
/// lower-ratio = 1.0
/// upper-ratio = 1.6
/// ```
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct MassModel {
    pub coefficients: SemfCoefficients,
    pub masses: MassConstants,
    /// Radius parameter `r₀` in femtometers, `R = r₀·A^(1/3)`.
    pub radius_constant: f64,
    pub stability: StabilityWindow,
}

impl MassModel {
    pub const REFERENCE: Self = Self {
        coefficients: SemfCoefficients::REFERENCE,
        masses: MassConstants::REFERENCE,
        radius_constant: 1.2,
        stability: StabilityWindow::REFERENCE,
    };

    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ModelLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

impl Default for MassModel {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}
