// healthdq/src/commands/mod.rs

pub mod check;
pub mod export;

use std::path::Path;

use anyhow::Context;
use healthdq_core::infrastructure::adapters::{CsvTableLoader, DemoTable};
use healthdq_core::infrastructure::config::{ProjectConfig, load_config_file, load_project_config};
use healthdq_core::ports::TableSource;

use crate::cli::InputArgs;

pub const NO_INPUT_MESSAGE: &str =
    "ℹ️  Please provide a CSV file or use --demo to load the demo dataset.";

/// Explicit `--config` must exist; otherwise the current directory is searched.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ProjectConfig> {
    match explicit {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path)),
        None => load_project_config(Path::new("."))
            .context("Failed to load configuration from the current directory"),
    }
}

/// `None` when the user supplied neither a file nor `--demo`.
pub fn table_source(input: &InputArgs, config: &ProjectConfig) -> Option<Box<dyn TableSource>> {
    if input.demo {
        return Some(Box::new(DemoTable));
    }
    input.file.as_ref().map(|path| {
        Box::new(CsvTableLoader::new(path).with_options(config.csv_options()))
            as Box<dyn TableSource>
    })
}
