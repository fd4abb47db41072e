use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileCoefficients {
    pub volume: Option<f64>,
    pub surface: Option<f64>,
    pub coulomb: Option<f64>,
    pub asymmetry: Option<f64>,
    pub pairing: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileMasses {
    pub proton: Option<f64>,
    pub neutron: Option<f64>,
    pub electron: Option<f64>,
    pub mev_per_u: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileStability {
    pub lower_ratio: Option<f64>,
    pub upper_ratio: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileOutput {
    pub plot_dir: Option<PathBuf>,
    pub plot_width: Option<u32>,
    pub plot_height: Option<u32>,
}

/// The partial configuration as read from a TOML file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub radius_constant: Option<f64>,
    pub coefficients: Option<FileCoefficients>,
    pub masses: Option<FileMasses>,
    pub stability: Option<FileStability>,
    pub output: Option<FileOutput>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
