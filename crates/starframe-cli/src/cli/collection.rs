//! Collection management commands.

use clap::Subcommand;
use console::style;

use super::Output;
use crate::state::AppState;

#[derive(Subcommand)]
pub enum CollectionCommand {
    /// Create a collection.
    Create {
        /// Collection name.
        name: String,

        /// Number of dimensions of the collection's embeddings (> 0).
        #[arg(short, long)]
        dimensionality: u32,
    },

    /// Delete a collection by id.
    #[command(alias = "rm")]
    Delete {
        /// Collection id.
        collection_id: String,
    },
}

pub async fn run(
    state: &AppState,
    action: CollectionCommand,
    output: Output,
) -> anyhow::Result<()> {
    let writer = state.http_writer().await?;

    let (summary, response) = match action {
        CollectionCommand::Create {
            name,
            dimensionality,
        } => {
            let response = writer.create_collection(&name, dimensionality).await?;
            (format!("Created collection '{name}'"), response)
        }
        CollectionCommand::Delete { collection_id } => {
            let response = writer.delete_collection(&collection_id).await?;
            (format!("Deleted collection {collection_id}"), response)
        }
    };

    if output.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else if output.styled() {
        println!();
        println!("  {} {}", style("✓").green(), summary);
        println!();
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
