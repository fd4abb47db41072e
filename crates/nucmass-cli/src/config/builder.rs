use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, PlotConfig};
use crate::cli::ReportArgs;
use crate::error::{CliError, Result};
use nucmass::core::formula::model::{MassConstants, MassModel, SemfCoefficients, StabilityWindow};
use nucmass::engine::config::{ReportConfig, ReportConfigBuilder};
use nucmass::engine::error::EngineError;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

pub fn build_config(args: &ReportArgs) -> Result<AppConfig> {
    let defaults = load_defaults(args.model.as_deref())?;
    let mut file_config = load_layers(args.config.as_deref(), &args.set_values)?;

    let core_config = merge_model(&mut file_config, &defaults)?;

    let plot = if args.no_plots {
        None
    } else {
        let output = file_config.output.take().unwrap_or_default();
        Some(PlotConfig {
            dir: args
                .plot_dir
                .clone()
                .or(output.plot_dir)
                .unwrap_or(defaults.plot_dir),
            width: output.plot_width.unwrap_or(defaults.plot_width),
            height: output.plot_height.unwrap_or(defaults.plot_height),
        })
    };
    if let Some(plot) = &plot {
        if plot.width == 0 || plot.height == 0 {
            return Err(CliError::Config(format!(
                "Plot size must be positive, got {}x{}",
                plot.width, plot.height
            )));
        }
    }

    Ok(AppConfig {
        core_config,
        plot,
        csv_output: args.csv_output.clone(),
    })
}

/// Builds only the model part of the configuration, ignoring output settings.
pub fn build_report_config(
    model: Option<&Path>,
    config: Option<&Path>,
    set_values: &[String],
) -> Result<ReportConfig> {
    let defaults = load_defaults(model)?;
    let mut file_config = load_layers(config, set_values)?;
    merge_model(&mut file_config, &defaults)
}

/// Built-in defaults, with the mass model replaced by the one in `model` when given.
fn load_defaults(model: Option<&Path>) -> Result<DefaultsConfig> {
    let mut defaults = DefaultsConfig::default();
    if let Some(model_path) = model {
        debug!("Loading mass model from {:?}", model_path);
        defaults.model = MassModel::load(model_path).map_err(EngineError::from)?;
    }
    Ok(defaults)
}

fn load_layers(config: Option<&Path>, set_values: &[String]) -> Result<FileConfig> {
    let file_config = if let Some(config_path) = config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    apply_set_values(file_config, set_values)
}

fn merge_model(file_config: &mut FileConfig, defaults: &DefaultsConfig) -> Result<ReportConfig> {
    let reference = &defaults.model;

    let c = file_config.coefficients.take().unwrap_or_default();
    let coefficients = SemfCoefficients {
        volume: c.volume.unwrap_or(reference.coefficients.volume),
        surface: c.surface.unwrap_or(reference.coefficients.surface),
        coulomb: c.coulomb.unwrap_or(reference.coefficients.coulomb),
        asymmetry: c.asymmetry.unwrap_or(reference.coefficients.asymmetry),
        pairing: c.pairing.unwrap_or(reference.coefficients.pairing),
    };

    let m = file_config.masses.take().unwrap_or_default();
    let masses = MassConstants {
        proton: m.proton.unwrap_or(reference.masses.proton),
        neutron: m.neutron.unwrap_or(reference.masses.neutron),
        electron: m.electron.unwrap_or(reference.masses.electron),
        mev_per_u: m.mev_per_u.unwrap_or(reference.masses.mev_per_u),
    };

    let s = file_config.stability.take().unwrap_or_default();
    let stability = StabilityWindow {
        lower_ratio: s.lower_ratio.unwrap_or(reference.stability.lower_ratio),
        upper_ratio: s.upper_ratio.unwrap_or(reference.stability.upper_ratio),
    };

    ReportConfigBuilder::new()
        .coefficients(coefficients)
        .masses(masses)
        .radius_constant(
            file_config
                .radius_constant
                .unwrap_or(reference.radius_constant),
        )
        .stability_window(stability)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();
        let float = |v: &str| parse_value::<f64>(key, v, "float");

        match key {
            "radius-constant" => config.radius_constant = Some(float(value_str)?),
            "coefficients.volume" => {
                config
                    .coefficients
                    .get_or_insert_with(Default::default)
                    .volume = Some(float(value_str)?);
            }
            "coefficients.surface" => {
                config
                    .coefficients
                    .get_or_insert_with(Default::default)
                    .surface = Some(float(value_str)?);
            }
            "coefficients.coulomb" => {
                config
                    .coefficients
                    .get_or_insert_with(Default::default)
                    .coulomb = Some(float(value_str)?);
            }
            "coefficients.asymmetry" => {
                config
                    .coefficients
                    .get_or_insert_with(Default::default)
                    .asymmetry = Some(float(value_str)?);
            }
            "coefficients.pairing" => {
                config
                    .coefficients
                    .get_or_insert_with(Default::default)
                    .pairing = Some(float(value_str)?);
            }
            "masses.proton" => {
                config.masses.get_or_insert_with(Default::default).proton =
                    Some(float(value_str)?);
            }
            "masses.neutron" => {
                config.masses.get_or_insert_with(Default::default).neutron =
                    Some(float(value_str)?);
            }
            "masses.electron" => {
                config.masses.get_or_insert_with(Default::default).electron =
                    Some(float(value_str)?);
            }
            "masses.mev-per-u" => {
                config.masses.get_or_insert_with(Default::default).mev_per_u =
                    Some(float(value_str)?);
            }
            "stability.lower-ratio" => {
                config
                    .stability
                    .get_or_insert_with(Default::default)
                    .lower_ratio = Some(float(value_str)?);
            }
            "stability.upper-ratio" => {
                config
                    .stability
                    .get_or_insert_with(Default::default)
                    .upper_ratio = Some(float(value_str)?);
            }
            "output.plot-dir" => {
                config.output.get_or_insert_with(Default::default).plot_dir =
                    Some(value_str.trim().into());
            }
            "output.plot-width" => {
                config.output.get_or_insert_with(Default::default).plot_width =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "output.plot-height" => {
                config.output.get_or_insert_with(Default::default).plot_height =
                    Some(parse_value(key, value_str, "integer")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_report_args() -> ReportArgs {
        ReportArgs {
            nuclides: vec![],
            input: None,
            model: None,
            config: None,
            plot_dir: None,
            no_plots: false,
            csv_output: None,
            set_values: vec![],
        }
    }

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("nucmass.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn build_config_without_file_uses_defaults() {
        let app = build_config(&base_report_args()).expect("build ok");

        assert_eq!(app.core_config.model, MassModel::REFERENCE);
        let plot = app.plot.expect("plots enabled by default");
        assert_eq!(plot.dir, PathBuf::from("."));
        assert_eq!(plot.width, DefaultsConfig::default().plot_width);
        assert_eq!(plot.height, DefaultsConfig::default().plot_height);
        assert!(app.csv_output.is_none());
    }

    #[test]
    fn build_config_reads_file_and_merges() {
        let dir = tempdir().unwrap();
        let mut args = base_report_args();
        args.config = Some(write_config(
            dir.path(),
            r#"
            radius-constant = 1.25

            [coefficients]
            volume = 15.8
            pairing = 11.18

            [masses]
            mev-per-u = 931.494

            [stability]
            upper-ratio = 1.55

            [output]
            plot-dir = "figures"
            plot-width = 640
            "#,
        ));

        let app = build_config(&args).expect("build ok");
        let model = app.core_config.model;

        assert_eq!(model.radius_constant, 1.25);
        assert_eq!(model.coefficients.volume, 15.8);
        assert_eq!(model.coefficients.pairing, 11.18);
        assert_eq!(model.coefficients.surface, SemfCoefficients::REFERENCE.surface);
        assert_eq!(model.masses.mev_per_u, 931.494);
        assert_eq!(model.masses.proton, MassConstants::REFERENCE.proton);
        assert_eq!(model.stability.upper_ratio, 1.55);
        assert_eq!(model.stability.lower_ratio, 1.0);

        let plot = app.plot.unwrap();
        assert_eq!(plot.dir, PathBuf::from("figures"));
        assert_eq!(plot.width, 640);
        assert_eq!(plot.height, 768);
    }

    #[test]
    fn set_values_override_file_and_cli_overrides_both() {
        let dir = tempdir().unwrap();
        let mut args = base_report_args();
        args.config = Some(write_config(
            dir.path(),
            "[coefficients]\npairing = 11.0\n\n[output]\nplot-dir = \"from-file\"\n",
        ));
        args.set_values = vec![
            "coefficients.pairing=11.18".to_string(),
            "output.plot-dir=from-set".to_string(),
            "stability.lower-ratio=0.95".to_string(),
        ];
        args.plot_dir = Some(PathBuf::from("from-cli"));

        let app = build_config(&args).expect("build ok");

        assert!((app.core_config.model.coefficients.pairing - 11.18).abs() < 1e-12);
        assert!((app.core_config.model.stability.lower_ratio - 0.95).abs() < 1e-12);
        assert_eq!(app.plot.unwrap().dir, PathBuf::from("from-cli"));
    }

    #[test]
    fn no_plots_disables_plot_config() {
        let mut args = base_report_args();
        args.no_plots = true;
        args.csv_output = Some(PathBuf::from("out.csv"));

        let app = build_config(&args).expect("build ok");
        assert!(app.plot.is_none());
        assert_eq!(app.csv_output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn invalid_stability_window_is_a_config_error() {
        let mut args = base_report_args();
        args.set_values = vec!["stability.upper-ratio=0.5".to_string()];

        let result = build_config(&args);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("stability window")));
    }

    #[test]
    fn set_values_reject_unknown_keys_and_bad_values() {
        let result = build_report_config(None, None, &["coefficients.symmetry=1.0".to_string()]);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("Unsupported")));

        let result = build_report_config(None, None, &["radius-constant=wide".to_string()]);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("Invalid float")));

        let result = build_report_config(None, None, &["radius-constant".to_string()]);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("KEY=VALUE")));
    }

    #[test]
    fn build_report_config_applies_set_values_without_file() {
        let config =
            build_report_config(None, None, &["masses.electron=0.0".to_string()]).expect("build ok");
        assert_eq!(config.model.masses.electron, 0.0);
        assert_eq!(config.model.coefficients, SemfCoefficients::REFERENCE);
    }

    #[test]
    fn zero_plot_size_is_a_config_error() {
        for key in ["output.plot-width=0", "output.plot-height=0"] {
            let mut args = base_report_args();
            args.set_values = vec![key.to_string()];
            let result = build_config(&args);
            assert!(
                matches!(&result, Err(CliError::Config(msg)) if msg.contains("Plot size")),
                "{key} was accepted"
            );
        }

        let dir = tempdir().unwrap();
        let mut args = base_report_args();
        args.config = Some(write_config(dir.path(), "[output]\nplot-height = 0\n"));
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn zero_plot_size_is_ignored_when_plots_are_disabled() {
        let mut args = base_report_args();
        args.no_plots = true;
        args.set_values = vec!["output.plot-width=0".to_string()];
        assert!(build_config(&args).is_ok());
    }

    #[test]
    fn model_file_replaces_reference_and_config_layers_on_top() {
        let dir = tempdir().unwrap();
        let model_path = dir.path().join("model.toml");
        fs::write(
            &model_path,
            "radius-constant = 1.3\n\n[coefficients]\nvolume = 15.8\npairing = 11.0\n",
        )
        .unwrap();

        let mut args = base_report_args();
        args.model = Some(model_path.clone());
        args.config = Some(write_config(
            dir.path(),
            "[coefficients]\npairing = 11.18\n",
        ));

        let model = build_config(&args).expect("build ok").core_config.model;
        assert_eq!(model.radius_constant, 1.3);
        assert_eq!(model.coefficients.volume, 15.8);
        assert_eq!(model.coefficients.pairing, 11.18);
        assert_eq!(model.coefficients.surface, SemfCoefficients::REFERENCE.surface);

        let config = build_report_config(
            Some(&model_path),
            None,
            &["radius-constant=1.25".to_string()],
        )
        .expect("build ok");
        assert_eq!(config.model.radius_constant, 1.25);
        assert_eq!(config.model.coefficients.pairing, 11.0);
    }

    #[test]
    fn unreadable_or_malformed_model_file_is_an_engine_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            build_report_config(Some(&missing), None, &[]),
            Err(CliError::Engine(EngineError::ModelLoad { .. }))
        ));

        let malformed = dir.path().join("bad.toml");
        fs::write(&malformed, "[coefficients]\nsymmetry = 1.0\n").unwrap();
        assert!(matches!(
            build_report_config(Some(&malformed), None, &[]),
            Err(CliError::Engine(EngineError::ModelLoad { .. }))
        ));
    }
}
