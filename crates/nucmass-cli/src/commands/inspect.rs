use crate::cli::InspectArgs;
use crate::config::builder::build_report_config;
use crate::error::{CliError, Result};
use nucmass::core::formula::model::MassModel;
use nucmass::core::models::nucleus::Nucleus;
use nucmass::core::models::properties::NuclearProperties;
use std::fmt::{self, Write};
use tracing::{info, warn};

pub fn run(args: InspectArgs) -> Result<()> {
    let config = build_report_config(
        args.model.as_deref(),
        args.config.as_deref(),
        &args.set_values,
    )?;
    let nucleus = args.nuclide;

    if !nucleus.is_physical() {
        warn!("{} is outside the physical domain; values may be meaningless.", nucleus);
    }
    info!("Inspecting {}", nucleus);

    let text = describe(nucleus, &config.model).map_err(|e| CliError::Other(e.into()))?;
    print!("{}", text);
    Ok(())
}

/// Multi-line breakdown of every binding energy term followed by the report line.
fn describe(nucleus: Nucleus, model: &MassModel) -> std::result::Result<String, fmt::Error> {
    let terms = nucleus.binding_terms_with(model);
    let mass_number = f64::from(nucleus.mass_number());
    let mut out = String::new();

    writeln!(
        out,
        "{} (Z={}, N={}, A={})",
        nucleus,
        nucleus.atomic_number(),
        nucleus.neutron_number(),
        nucleus.mass_number()
    )?;
    for (label, value) in terms.labelled() {
        writeln!(out, "  {:<10} {:>+12.4} MeV", label, value)?;
    }
    writeln!(out, "  {:<10} {:>+12.4} MeV", "total", terms.total())?;
    writeln!(
        out,
        "  {:<10} {:>12.4} MeV/nucleon",
        "per nucleon",
        terms.total() / mass_number
    )?;
    writeln!(out, "{}", NuclearProperties::evaluate(nucleus, model))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_every_term_and_the_report_line() {
        let text = describe(Nucleus::new(238, 92), &MassModel::REFERENCE).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "U-238 (Z=92, N=146, A=238)");
        for label in ["volume", "surface", "coulomb", "asymmetry", "pairing", "total"] {
            assert!(
                lines.iter().any(|l| l.trim_start().starts_with(label)),
                "missing {label}"
            );
        }
        assert!(lines.iter().any(|l| l.contains("7.5648 MeV/nucleon")));
        assert_eq!(
            *lines.last().unwrap(),
            "Z=92, A=238 - mass: 238.0521 u, radius: 7.44 fm, binding energy: 7.56 MeV/nucleon, beta-stability: true, can undergo even-even fission: true"
        );
    }

    #[test]
    fn describe_shows_negative_pairing_for_odd_odd_nucleus() {
        let text = describe(Nucleus::new(14, 7), &MassModel::REFERENCE).unwrap();
        let pairing = text
            .lines()
            .find(|l| l.trim_start().starts_with("pairing"))
            .unwrap();
        assert!(pairing.contains('-'));
    }

    #[test]
    fn describe_handles_extreme_inputs() {
        let text = describe(Nucleus::new(i32::MIN, 1), &MassModel::REFERENCE).unwrap();
        assert!(text.starts_with("H--2147483648 (Z=1, N=-2147483649, A=-2147483648)"));
        assert_eq!(text.lines().count(), 9);
    }
}
