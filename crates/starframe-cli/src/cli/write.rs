//! Table write command handlers (insert, update, delete).

use anyhow::Context;
use console::style;

use starframe_core::writer::{BoxColumnWriter, TableWriter};
use starframe_infra::table::load_table_file;
use starframe_types::table::WriteOperation;

use super::dry_run::DryRunWriter;
use super::{Output, WriteArgs};
use crate::state::AppState;

/// Load the table file and run one table write.
pub async fn run(
    state: &AppState,
    operation: WriteOperation,
    args: WriteArgs,
    output: Output,
) -> anyhow::Result<()> {
    let table = load_table_file(&args.file)
        .await
        .with_context(|| format!("Failed to load table from {}", args.file.display()))?;

    let writer = if args.dry_run {
        BoxColumnWriter::new(DryRunWriter)
    } else {
        BoxColumnWriter::new(state.http_writer().await?)
    };
    let writer = TableWriter::new(writer);

    let response = writer
        .write_by_table(
            operation,
            &table,
            args.collection_id.as_deref(),
            args.collection_name.as_deref(),
        )
        .await
        .with_context(|| format!("Table {operation} failed"))?;

    tracing::info!(operation = %operation, rows = table.num_rows(), "Table write complete");

    if output.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }
    if !output.styled() {
        return Ok(());
    }

    let target = args
        .collection_name
        .as_deref()
        .or(args.collection_id.as_deref())
        .unwrap_or("-");
    let verb = if args.dry_run { "previewed" } else { "sent" };

    println!();
    println!(
        "  {} {} {} ({} rows) for collection {}",
        style("✓").green(),
        style(operation).bold(),
        verb,
        table.num_rows(),
        style(target).cyan()
    );
    println!();
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
