//! Writer host health check.

use console::style;

use super::Output;
use crate::state::AppState;

pub async fn run(state: &AppState, output: Output) -> anyhow::Result<()> {
    let writer = state.http_writer().await?;
    let result = writer.check_health().await;

    if output.json {
        let report = serde_json::json!({
            "host": writer.host(),
            "healthy": result.is_ok(),
            "error": result.as_ref().err().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if output.styled() {
        let mark = if result.is_ok() {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!();
        println!("  {} {}", mark, style(writer.host()).cyan());
        println!();
    }

    result.map_err(Into::into)
}
