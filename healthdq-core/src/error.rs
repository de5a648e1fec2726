// healthdq-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthDqError {
    // --- DOMAIN (table invariants, export subsets) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE (IO, CSV, config) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for HealthDqError {
    fn from(err: std::io::Error) -> Self {
        HealthDqError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<csv::Error> for HealthDqError {
    fn from(err: csv::Error) -> Self {
        HealthDqError::Infrastructure(InfrastructureError::Csv(err))
    }
}
