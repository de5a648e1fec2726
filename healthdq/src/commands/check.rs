// healthdq/src/commands/check.rs
//
// USE CASE: run one validation pass and print the report.

use anyhow::Context;
use healthdq_core::application::{ValidationOptions, validate_source};
use healthdq_core::infrastructure::config::TypeSpecParser;
use tracing::debug;

use super::{NO_INPUT_MESSAGE, load_config, table_source};
use crate::cli::{CheckArgs, OutputFormat};
use crate::render;

pub fn execute(args: CheckArgs) -> anyhow::Result<()> {
    let config = load_config(args.input.config.as_deref())?;

    let Some(source) = table_source(&args.input, &config) else {
        println!("{}", NO_INPUT_MESSAGE);
        return Ok(());
    };

    let mut options = ValidationOptions::from_config(&config);
    if let Some(text) = &args.types {
        TypeSpecParser::new()?.extend(&mut options.type_checks, text);
    }
    debug!(
        type_checks = options.type_checks.len(),
        identifier = options.rules.identifier_column(),
        "Validation options resolved"
    );

    let report = validate_source(source.as_ref(), &options)
        .with_context(|| format!("Failed to validate {}", source.describe()))?;

    match args.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => print!("{}", render::render_report(&source.describe(), &report)),
    }

    if args.fail_on_violation && !report.all_rules_passed() {
        eprintln!(
            "\n❌ FAILURE. {} rule(s) violated.",
            report.violations.len()
        );
        std::process::exit(1);
    }

    Ok(())
}
