use crate::cli::ReportArgs;
use crate::config::builder::build_config;
use crate::config::defaults::DEFAULT_NUCLEI;
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use crate::plot::{self, BINDING_ENERGY_PLOT, RADIUS_PLOT};
use crate::utils::progress::CliProgressHandler;
use nucmass::core::io::nuclides;
use nucmass::core::models::nucleus::Nucleus;
use nucmass::engine::error::EngineError;
use nucmass::engine::progress::{Progress, ProgressReporter};
use nucmass::workflows::{self, report::Report};
use std::path::PathBuf;
use tracing::info;

pub fn run(args: ReportArgs, quiet: bool) -> Result<()> {
    let app_config = build_config(&args)?;
    let nuclei = collect_nuclei(&args)?;

    let progress_handler = CliProgressHandler::for_quiet(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the report workflow for {} nuclei...", nuclei.len());
    let report = workflows::report::run(&nuclei, &app_config.core_config, &reporter)?;

    for line in report.lines() {
        println!("{}", line);
    }

    for path in write_outputs(&report, &app_config, &reporter)? {
        println!("✓ Written: {}", path.display());
    }
    Ok(())
}

/// Nuclei from `--input` followed by those from `-n`, or the built-in list when both are absent.
fn collect_nuclei(args: &ReportArgs) -> Result<Vec<Nucleus>> {
    let mut nuclei = match &args.input {
        Some(path) => {
            info!("Loading nuclide list from {:?}", path);
            nuclides::read_nuclides_from_path(path).map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })?
        }
        None => Vec::new(),
    };
    nuclei.extend(args.nuclides.iter().copied());

    if nuclei.is_empty() && args.input.is_none() {
        info!("No nuclei given; using the built-in list.");
        nuclei.extend(DEFAULT_NUCLEI);
    }
    Ok(nuclei)
}

fn write_outputs(
    report: &Report,
    app_config: &AppConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if let Some(csv_path) = &app_config.csv_output {
        info!("Writing result table to {:?}", csv_path);
        nuclides::write_report_to_path(csv_path, &report.entries).map_err(EngineError::from)?;
        written.push(csv_path.clone());
    }

    let Some(plot_config) = &app_config.plot else {
        info!("Plot rendering disabled.");
        return Ok(written);
    };

    std::fs::create_dir_all(&plot_config.dir)?;
    let size = (plot_config.width, plot_config.height);
    let plots = [
        (RADIUS_PLOT, report.radius_series()),
        (BINDING_ENERGY_PLOT, report.binding_energy_series()),
    ];

    reporter.phase("Rendering plots", || -> Result<()> {
        reporter.report(Progress::TaskStart {
            total_steps: plots.len() as u64,
        });
        for (chart, points) in &plots {
            let path = plot_config.dir.join(chart.file_name);
            plot::render_svg(&path, size, chart, points)?;
            reporter.report(Progress::TaskIncrement);
            written.push(path);
        }
        reporter.report(Progress::TaskFinish);
        Ok(())
    })?;

    Ok(written)
}
