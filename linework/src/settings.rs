//! Runtime configuration of the `linework` binary.
//!
//! Settings are collected from several layers, each overriding the previous one:
//!
//! 1. built-in defaults (tolerance `6.0`, minimum vertices `2`);
//! 2. TOML file given with `--config`;
//! 3. environment variables with `LINEWORK_` prefix, e.g. `LINEWORK_TOLERANCE=2.5`;
//! 4. command line arguments.

use std::path::PathBuf;

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::LineworkError;
use crate::pipeline::{PipelineOptions, DEFAULT_MIN_VERTICES, DEFAULT_TOLERANCE};

/// Prefix of environment variables read by [`load_settings`].
pub const ENV_PREFIX: &str = "LINEWORK";

/// Runtime configuration for the application.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    /// File to read WKT from. Standard input is used if not set.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Douglas-Peucker tolerance.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Lines must have more vertices than this to be written.
    #[serde(default = "default_min_vertices")]
    pub min_vertices: usize,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_min_vertices() -> usize {
    DEFAULT_MIN_VERTICES
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: None,
            tolerance: DEFAULT_TOLERANCE,
            min_vertices: DEFAULT_MIN_VERTICES,
        }
    }
}

impl From<&Settings> for PipelineOptions {
    fn from(value: &Settings) -> Self {
        Self {
            tolerance: value.tolerance,
            min_vertices: value.min_vertices,
        }
    }
}

/// Command line arguments.
#[derive(Parser, Debug, Default)]
#[command(
    version,
    about = "Simplify WKT line geometries and print them as vec2 arrays in radians"
)]
pub struct CliArgs {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File with the input geometry in WKT format. If not given, standard input is read.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Simplification tolerance in units of the input coordinates.
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Lines with this many vertices or fewer are dropped after simplification.
    #[arg(short, long)]
    pub min_vertices: Option<usize>,
}

/// Loads settings from all configuration layers.
pub fn load_settings(args: &CliArgs) -> Result<Settings, LineworkError> {
    load_with_env_prefix(args, ENV_PREFIX)
}

fn load_with_env_prefix(args: &CliArgs, env_prefix: &str) -> Result<Settings, LineworkError> {
    let mut builder = Config::builder();
    if let Some(config_file) = &args.config {
        log::info!("Using configuration file {config_file:?}");
        builder = builder.add_source(File::from(config_file.as_path()).required(true));
    }

    let mut settings: Settings = builder
        .add_source(Environment::with_prefix(env_prefix))
        .build()?
        .try_deserialize()?;

    if let Some(input) = &args.input {
        settings.input = Some(input.clone());
    }
    if let Some(tolerance) = args.tolerance {
        settings.tolerance = tolerance;
    }
    if let Some(min_vertices) = args.min_vertices {
        settings.min_vertices = min_vertices;
    }

    validate_settings(&settings)?;
    log::debug!("{settings:?}");

    Ok(settings)
}

fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    if !settings.tolerance.is_finite() || settings.tolerance < 0.0 {
        return Err(ConfigError::Message(format!(
            "tolerance must be a finite non-negative number, got {}",
            settings.tolerance
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "linework-{}-{name}.toml",
            std::process::id()
        ));
        std::fs::write(&path, content).expect("write temp config");
        path
    }

    #[test]
    fn defaults() {
        let settings =
            load_with_env_prefix(&CliArgs::default(), "LINEWORK_TEST_DEFAULTS").expect("settings");
        assert_eq!(settings, Settings::default());
        assert_eq!(PipelineOptions::from(&settings), PipelineOptions::default());
    }

    #[test]
    fn command_line_overrides() {
        let args = CliArgs::parse_from([
            "linework",
            "--tolerance",
            "2.5",
            "--min-vertices",
            "4",
            "--input",
            "coastline.wkt",
        ]);
        let settings = load_with_env_prefix(&args, "LINEWORK_TEST_CLI").expect("settings");

        assert_eq!(settings.tolerance, 2.5);
        assert_eq!(settings.min_vertices, 4);
        assert_eq!(settings.input, Some(PathBuf::from("coastline.wkt")));
    }

    #[test]
    fn file_then_env_then_args() {
        let path = temp_config("layers", "tolerance = 1.5\nmin_vertices = 7\n");
        std::env::set_var("LINEWORK_TEST_LAYERS_MIN_VERTICES", "5");

        let args = CliArgs {
            config: Some(path.clone()),
            ..Default::default()
        };
        let settings = load_with_env_prefix(&args, "LINEWORK_TEST_LAYERS").expect("settings");
        assert_eq!(settings.tolerance, 1.5);
        assert_eq!(settings.min_vertices, 5);

        let args = CliArgs {
            config: Some(path.clone()),
            min_vertices: Some(3),
            ..Default::default()
        };
        let settings = load_with_env_prefix(&args, "LINEWORK_TEST_LAYERS").expect("settings");
        assert_eq!(settings.min_vertices, 3);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_config_file() {
        let args = CliArgs {
            config: Some(PathBuf::from("/definitely/not/here/linework.toml")),
            ..Default::default()
        };
        assert_matches!(
            load_with_env_prefix(&args, "LINEWORK_TEST_MISSING"),
            Err(LineworkError::Config(_))
        );
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        let args = CliArgs {
            tolerance: Some(-1.0),
            ..Default::default()
        };
        assert_matches!(
            load_with_env_prefix(&args, "LINEWORK_TEST_NEGATIVE"),
            Err(LineworkError::Config(ConfigError::Message(_)))
        );
    }
}
