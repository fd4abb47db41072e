use nucmass::engine::config::ReportConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub core_config: ReportConfig,
    /// `None` when plotting is disabled.
    pub plot: Option<PlotConfig>,
    pub csv_output: Option<PathBuf>,
}
