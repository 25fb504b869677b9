//! The `documents` subcommand: the document store endpoints.

use anyhow::Result;
use clap::{Args, Subcommand};
use docpipe_api::{endpoints::documents, Client};
use serde_json::Value;

use super::report;
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct DocumentsArgs {
    #[command(subcommand)]
    pub command: DocumentsCommand,
}

#[derive(Subcommand)]
pub enum DocumentsCommand {
    /// List stored documents
    List,
    /// Fetch one document by ID
    Get { id: String },
    /// Fetch the preview of one document
    Preview { id: String },
    /// Delete one document by ID
    Delete { id: String },
}

pub async fn run(args: &DocumentsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let value: Value = match &args.command {
        DocumentsCommand::List => client
            .get(documents::LIST, &[])
            .await
            .map_err(|e| report(e, "获取文档列表"))?,
        DocumentsCommand::Get { id } => client
            .get(&documents::get(id), &[])
            .await
            .map_err(|e| report(e, "获取文档"))?,
        DocumentsCommand::Preview { id } => client
            .get(&documents::preview(id), &[])
            .await
            .map_err(|e| report(e, "预览文档"))?,
        DocumentsCommand::Delete { id } => client
            .delete(&documents::delete(id))
            .await
            .map_err(|e| report(e, "删除文档"))?,
    };
    print_value(&value, format);
    Ok(())
}
