// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{HarvestError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub directory: PathBuf,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(default)]
    pub layout: RowLayout,
}

/// How aggregated documents are flattened into export rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RowLayout {
    /// Parallel columns aligned on the flattened email list.
    Columns,
    /// One row per contributing document, emails joined in one cell.
    #[default]
    PerDocument,
    /// One row per email, repeating the document's phone and text.
    PerEmail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Auto,
    Xlsx,
    Csv,
}

impl ExportFormat {
    /// Resolve `Auto` against the destination's extension.
    pub fn resolve(self, destination: &Path) -> ExportFormat {
        match self {
            ExportFormat::Auto => {
                let is_csv = destination
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
                if is_csv {
                    ExportFormat::Csv
                } else {
                    ExportFormat::Xlsx
                }
            }
            other => other,
        }
    }
}

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

fn default_max_file_size_mb() -> usize {
    20
}

impl InputConfig {
    /// Size limit in bytes, `None` when disabled.
    pub fn max_file_size_bytes(&self) -> Option<u64> {
        if self.max_file_size_mb == 0 {
            None
        } else {
            Some(self.max_file_size_mb as u64 * 1024 * 1024)
        }
    }
}

impl Config {
    /// Built-in defaults, then the TOML file, then `CV_HARVEST__*` variables.
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        match path {
            Some(path) => Self::from_sources(path, true, None),
            None => Self::from_sources(Path::new(DEFAULT_CONFIG_PATH), false, None),
        }
    }

    fn from_sources(
        file: &Path,
        file_required: bool,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(file).required(file_required))
            .add_source(
                config::Environment::with_prefix("CV_HARVEST")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            input: InputConfig {
                directory: PathBuf::from("Sample2"),
                recursive: false,
                max_file_size_mb: default_max_file_size_mb(),
            },
            output: OutputConfig {
                path: PathBuf::from("cv_info.xlsx"),
                format: ExportFormat::Auto,
                layout: RowLayout::PerDocument,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.path.as_os_str().is_empty() {
            return Err(HarvestError::Config(
                "output.path must not be empty".to_string(),
            ));
        }

        if self.input.directory.as_os_str().is_empty() {
            return Err(HarvestError::Config(
                "input.directory must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
