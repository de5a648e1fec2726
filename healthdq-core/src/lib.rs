// healthdq-core/src/lib.rs

#![allow(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// Contracts the engine expects from the outside world (table loaders).
pub mod ports;

// Pure validation engine. Depends on nothing but itself.
pub mod domain;

// Adapters: CSV loading/writing, demo fixture, YAML config, filesystem.
pub mod infrastructure;

// Use cases: one validation pass, export transforms.
pub mod application;

pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use domain::table::{CellValue, Column, ColumnType, Table};
pub use error::HealthDqError;
