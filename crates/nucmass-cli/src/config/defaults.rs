use nucmass::core::formula::model::MassModel;
use nucmass::core::models::nucleus::Nucleus;
use std::path::PathBuf;

/// Nuclei evaluated by `report` when none are given on the command line.
pub const DEFAULT_NUCLEI: [Nucleus; 6] = [
    Nucleus::new(238, 92),
    Nucleus::new(239, 94),
    Nucleus::new(235, 92),
    Nucleus::new(60, 28),
    Nucleus::new(135, 52),
    Nucleus::new(14, 7),
];

pub struct DefaultsConfig {
    pub model: MassModel,
    pub plot_dir: PathBuf,
    pub plot_width: u32,
    pub plot_height: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            model: MassModel::REFERENCE,
            plot_dir: PathBuf::from("."),
            plot_width: 1024,
            plot_height: 768,
        }
    }
}
