// healthdq-core/src/infrastructure/config/project.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::quality::rules::DEFAULT_IDENTIFIER_COLUMN;
use crate::domain::quality::{RuleSet, TypeExpectations};
use crate::infrastructure::adapters::csv_table::{CsvOptions, DEFAULT_MISSING_MARKERS};
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["healthdq.yaml", "healthdq.yml"];

pub const DEFAULT_FILL_PLACEHOLDER: &str = "MISSING";

#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
pub struct ProjectConfig {
    /// Column -> type tag checks run on every pass.
    #[serde(default)]
    pub type_checks: BTreeMap<String, String>,

    #[serde(default = "default_identifier_column")]
    #[validate(length(min = 1, message = "identifier_column cannot be empty"))]
    pub identifier_column: String,

    #[serde(default = "default_fill_placeholder")]
    #[validate(length(min = 1, message = "fill_placeholder cannot be empty"))]
    pub fill_placeholder: String,

    #[serde(default = "default_missing_markers")]
    pub missing_markers: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            type_checks: BTreeMap::new(),
            identifier_column: default_identifier_column(),
            fill_placeholder: default_fill_placeholder(),
            missing_markers: default_missing_markers(),
        }
    }
}

impl ProjectConfig {
    pub fn type_expectations(&self) -> TypeExpectations {
        self.type_checks
            .iter()
            .map(|(column, tag)| (column.as_str(), tag.as_str()))
            .collect()
    }

    pub fn rule_set(&self) -> RuleSet {
        RuleSet::new(self.identifier_column.clone())
    }

    pub fn csv_options(&self) -> CsvOptions {
        CsvOptions::default().with_missing_markers(self.missing_markers.clone())
    }
}

fn default_identifier_column() -> String {
    DEFAULT_IDENTIFIER_COLUMN.to_string()
}
fn default_fill_placeholder() -> String {
    DEFAULT_FILL_PLACEHOLDER.to_string()
}
fn default_missing_markers() -> Vec<String> {
    DEFAULT_MISSING_MARKERS.iter().map(|m| m.to_string()).collect()
}

// --- LOADERS ---

/// Looks for a config file in `dir`. Without one, the defaults apply.
#[instrument(skip(dir))]
pub fn load_project_config(dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    match find_config(dir) {
        Some(path) => load_config_file(&path),
        None => {
            info!(dir = ?dir, "No configuration file found, using defaults");
            let mut config = ProjectConfig::default();
            apply_env_overrides(&mut config, |key| std::env::var(key).ok());
            Ok(config)
        }
    }
}

/// Loads an explicitly named config file. A missing file is an error here.
#[instrument]
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    info!(path = ?path, "Loading configuration");

    let content = fs::read_to_string(path)?;
    let mut config = parse_config(&content)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate(&config)?;

    Ok(config)
}

pub fn parse_config(content: &str) -> Result<ProjectConfig, InfrastructureError> {
    // An empty file deserializes to `null`; treat it as "all defaults".
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    let config: ProjectConfig = serde_yaml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

fn validate(config: &ProjectConfig) -> Result<(), InfrastructureError> {
    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))
}

/// Environment layering for export settings. Blank values are ignored.
pub fn apply_env_overrides(config: &mut ProjectConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("HEALTHDQ_FILL_PLACEHOLDER").filter(|v| !v.is_empty()) {
        info!(old = ?config.fill_placeholder, new = ?val, "Overriding fill placeholder via ENV");
        config.fill_placeholder = val;
    }
    if let Some(val) = lookup("HEALTHDQ_IDENTIFIER_COLUMN").filter(|v| !v.trim().is_empty()) {
        info!(old = ?config.identifier_column, new = ?val, "Overriding identifier column via ENV");
        config.identifier_column = val;
    }
}
