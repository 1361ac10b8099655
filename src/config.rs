use crate::error::{KrError, KrResult};
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Scoring weights are fixed constants (see `scorer::consts`); configuration
/// only covers the outer surfaces.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportParams {
    #[arg(long, default_value = "test-results")]
    pub results_dir: PathBuf,
    #[arg(long, default_value = "test-results/summary.json")]
    pub output: PathBuf,
    #[arg(long, default_value_t = 70.0)]
    pub pass_threshold: f64,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputParams {
    #[arg(long, default_value_t = false)]
    pub json: bool,
    #[arg(long = "no-feedback", default_value_t = true, action = clap::ArgAction::SetFalse)]
    pub show_feedback: bool,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("test-results"),
            output: PathBuf::from("test-results/summary.json"),
            pass_threshold: 70.0,
        }
    }
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            json: false,
            show_feedback: true,
        }
    }
}

impl ReportParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KrResult<Self> {
        let path = path.as_ref();
        info!("⚙️  Loading report config from: {}", path.display());
        let content = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    /// Overlays only the arguments the user actually typed, so file values
    /// survive clap's defaults.
    pub fn merge_from_cli(&mut self, cli: &ReportParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(results_dir, "results_dir");
        update_if_present!(output, "output");
        update_if_present!(pass_threshold, "pass_threshold");
    }

    pub fn validate(&self) -> KrResult<()> {
        if !(0.0..=100.0).contains(&self.pass_threshold) {
            return Err(KrError::Config(format!(
                "pass_threshold must be within 0..=100, got {}",
                self.pass_threshold
            )));
        }
        Ok(())
    }
}
