use super::nucleus::Nucleus;
use crate::core::formula::model::MassModel;
use std::fmt;

/// All derived quantities of one nucleus, evaluated once against a [`MassModel`].
///
/// The [`Display`](fmt::Display) implementation renders the one-line report format:
///
/// ```text
/// Z=92, A=238 - mass: 238.0521 u, radius: 7.44 fm, binding energy: 7.56 MeV/nucleon, beta-stability: true, can undergo even-even fission: true
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NuclearProperties {
    pub nucleus: Nucleus,
    /// Neutral-atom mass in u.
    pub atomic_mass: f64,
    /// Nuclear radius in fm.
    pub nuclear_radius: f64,
    /// Binding energy per nucleon in MeV/nucleon.
    pub binding_energy_per_nucleon: f64,
    pub beta_stable: bool,
    pub even_even_fission: bool,
}

impl NuclearProperties {
    pub fn evaluate(nucleus: Nucleus, model: &MassModel) -> Self {
        Self {
            nucleus,
            atomic_mass: nucleus.atomic_mass_with(model),
            nuclear_radius: nucleus.nuclear_radius_with(model),
            binding_energy_per_nucleon: nucleus.binding_energy_per_nucleon_with(model),
            beta_stable: nucleus.is_stable_to_beta_decay_with(model),
            even_even_fission: nucleus.is_even_even_fission_possible(),
        }
    }
}

impl fmt::Display for NuclearProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Z={}, A={} - mass: {:.4} u, radius: {:.2} fm, binding energy: {:.2} MeV/nucleon, beta-stability: {}, can undergo even-even fission: {}",
            self.nucleus.atomic_number(),
            self.nucleus.mass_number(),
            self.atomic_mass,
            self.nuclear_radius,
            self.binding_energy_per_nucleon,
            self.beta_stable,
            self.even_even_fission,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_matches_individual_nucleus_methods() {
        let nucleus = Nucleus::new(60, 28);
        let props = NuclearProperties::evaluate(nucleus, &MassModel::REFERENCE);
        assert_eq!(props.nucleus, nucleus);
        assert_eq!(props.atomic_mass, nucleus.atomic_mass());
        assert_eq!(props.nuclear_radius, nucleus.nuclear_radius());
        assert_eq!(
            props.binding_energy_per_nucleon,
            nucleus.binding_energy_per_nucleon()
        );
        assert_eq!(props.beta_stable, nucleus.is_stable_to_beta_decay());
        assert_eq!(
            props.even_even_fission,
            nucleus.is_even_even_fission_possible()
        );
    }

    #[test]
    fn display_renders_report_line_for_uranium_238() {
        let props = NuclearProperties::evaluate(Nucleus::new(238, 92), &MassModel::REFERENCE);
        assert_eq!(
            props.to_string(),
            "Z=92, A=238 - mass: 238.0521 u, radius: 7.44 fm, binding energy: 7.56 MeV/nucleon, beta-stability: true, can undergo even-even fission: true"
        );
    }

    #[test]
    fn display_renders_report_line_for_nitrogen_14() {
        let props = NuclearProperties::evaluate(Nucleus::new(14, 7), &MassModel::REFERENCE);
        assert_eq!(
            props.to_string(),
            "Z=7, A=14 - mass: 14.0061 u, radius: 2.89 fm, binding energy: 7.28 MeV/nucleon, beta-stability: false, can undergo even-even fission: false"
        );
    }
}
