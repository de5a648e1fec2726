// healthdq/src/commands/export.rs
//
// USE CASE: write a cleaned copy of the input table.

use anyhow::Context;
use healthdq_core::application::{ExportMode, export_table};

use super::{NO_INPUT_MESSAGE, load_config, table_source};
use crate::cli::ExportArgs;

pub fn execute(args: ExportArgs) -> anyhow::Result<()> {
    let config = load_config(args.input.config.as_deref())?;

    let Some(source) = table_source(&args.input, &config) else {
        println!("{}", NO_INPUT_MESSAGE);
        return Ok(());
    };

    let mode = if args.dedupe {
        ExportMode::DropDuplicates { subset: args.by }
    } else {
        ExportMode::FillMissing {
            placeholder: args.placeholder.unwrap_or(config.fill_placeholder),
        }
    };

    let table = source
        .load()
        .with_context(|| format!("Failed to load {}", source.describe()))?;
    let outcome = export_table(&table, &mode, &args.output)
        .with_context(|| format!("Failed to export to {}", args.output.display()))?;

    match mode {
        ExportMode::DropDuplicates { .. } => println!(
            "✨ {} duplicate row(s) dropped. {} rows saved to {}",
            outcome.rows_removed,
            outcome.rows_written,
            outcome.path.display()
        ),
        ExportMode::FillMissing { .. } => println!(
            "✨ {} missing cell(s) filled. {} rows saved to {}",
            outcome.cells_filled,
            outcome.rows_written,
            outcome.path.display()
        ),
    }

    Ok(())
}
