// healthdq-core/src/infrastructure/config/mod.rs

pub mod project;
pub mod type_spec;

pub use project::{ProjectConfig, load_config_file, load_project_config};
pub use type_spec::TypeSpecParser;
