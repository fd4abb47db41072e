use crate::core::models::nucleus::Nucleus;
use crate::core::models::properties::NuclearProperties;
use crate::engine::config::ReportConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

/// Evaluated properties for a list of nuclei, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub entries: Vec<NuclearProperties>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One formatted report line per nucleus.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|entry| entry.to_string())
    }

    /// `(Z, R)` points for the radius plot.
    pub fn radius_series(&self) -> Vec<(f64, f64)> {
        self.series(|entry| entry.nuclear_radius)
    }

    /// `(Z, B/A)` points for the binding energy plot.
    pub fn binding_energy_series(&self) -> Vec<(f64, f64)> {
        self.series(|entry| entry.binding_energy_per_nucleon)
    }

    /// The entry with the largest finite binding energy per nucleon.
    pub fn most_tightly_bound(&self) -> Option<&NuclearProperties> {
        self.entries
            .iter()
            .filter(|entry| entry.binding_energy_per_nucleon.is_finite())
            .max_by(|a, b| {
                a.binding_energy_per_nucleon
                    .total_cmp(&b.binding_energy_per_nucleon)
            })
    }

    pub fn beta_stable_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.beta_stable).count()
    }

    /// One-line digest: the most tightly bound nucleus and the beta-stable count.
    pub fn summary(&self) -> String {
        let stable = format!("{} of {} beta-stable", self.beta_stable_count(), self.len());
        match self.most_tightly_bound() {
            Some(best) => format!(
                "Most tightly bound: {} ({:.2} MeV/nucleon); {}",
                best.nucleus, best.binding_energy_per_nucleon, stable
            ),
            None => format!("No finite binding energies; {}", stable),
        }
    }

    fn series(&self, value: impl Fn(&NuclearProperties) -> f64) -> Vec<(f64, f64)> {
        self.entries
            .iter()
            .map(|entry| (entry.nucleus.atomic_number() as f64, value(entry)))
            .collect()
    }
}

#[instrument(skip_all, name = "report_workflow")]
pub fn run(
    nuclei: &[Nucleus],
    config: &ReportConfig,
    reporter: &ProgressReporter,
) -> Result<Report, EngineError> {
    if nuclei.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    info!(count = nuclei.len(), "Evaluating nuclear properties.");
    for nucleus in nuclei.iter().filter(|n| !n.is_physical()) {
        warn!(
            "{} is outside the physical domain (A >= 1, 1 <= Z <= A); derived values may be non-finite.",
            nucleus
        );
    }

    let entries = reporter.phase("Evaluating nuclei", || {
        reporter.report(Progress::TaskStart {
            total_steps: nuclei.len() as u64,
        });
        let entries: Vec<NuclearProperties> = nuclei
            .par_iter()
            .map(|&nucleus| {
                let props = NuclearProperties::evaluate(nucleus, &config.model);
                debug!(nucleus = %nucleus, "{}", props);
                reporter.report(Progress::TaskIncrement);
                props
            })
            .collect();
        reporter.report(Progress::TaskFinish);
        entries
    });

    let report = Report { entries };
    info!(
        evaluated = report.len(),
        beta_stable = report.beta_stable_count(),
        "Evaluation finished."
    );
    reporter.report(Progress::Message(report.summary()));
    Ok(report)
}
