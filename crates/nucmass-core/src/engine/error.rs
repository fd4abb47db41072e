use thiserror::Error;

use super::config::ConfigError;
use crate::core::formula::model::ModelLoadError;
use crate::core::io::nuclides::NuclideIoError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No nuclei to evaluate")]
    EmptyInput,

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to load mass model: {source}")]
    ModelLoad {
        #[from]
        source: ModelLoadError,
    },

    #[error("Nuclide list error: {source}")]
    NuclideIo {
        #[from]
        source: NuclideIoError,
    },
}
