// healthdq-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(healthdq::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CSV ---
    #[error("CSV Error: {0}")]
    #[diagnostic(
        code(healthdq::infra::csv),
        help("Check the header row, the delimiter and that every record has the same number of fields.")
    )]
    Csv(#[from] csv::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(healthdq::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(healthdq::infra::config))]
    ConfigError(String),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(healthdq::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Invalid pattern: {0}")]
    #[diagnostic(code(healthdq::infra::pattern))]
    Pattern(#[from] regex::Error),
}
