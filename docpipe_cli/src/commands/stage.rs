//! The `stage` subcommand: runs one step of the ingestion pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use docpipe_api::endpoints::Stage;
use docpipe_api::Client;
use serde_json::Value;

use super::report;
use super::request::{file_form, read_body};
use crate::output::{print_value, OutputFormat};

#[derive(Clone, Copy, ValueEnum)]
pub enum StageName {
    Load,
    Parse,
    Chunk,
    Embed,
    Index,
    Search,
}

impl From<StageName> for Stage {
    fn from(name: StageName) -> Self {
        match name {
            StageName::Load => Stage::Load,
            StageName::Parse => Stage::Parse,
            StageName::Chunk => Stage::Chunk,
            StageName::Embed => Stage::Embed,
            StageName::Index => Stage::Index,
            StageName::Search => Stage::Search,
        }
    }
}

#[derive(Args)]
pub struct StageArgs {
    /// Pipeline stage to run
    #[arg(value_enum)]
    pub stage: StageName,

    /// Inline JSON body
    #[arg(long, conflicts_with_all = ["file", "upload"])]
    pub data: Option<String>,

    /// Read the JSON body from a file
    #[arg(long, conflicts_with = "upload")]
    pub file: Option<PathBuf>,

    /// Send this file as multipart/form-data instead of a JSON body
    #[arg(long)]
    pub upload: Option<PathBuf>,
}

pub async fn run(args: &StageArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let stage = Stage::from(args.stage);

    let result = match &args.upload {
        Some(file) => {
            let form = file_form("file", file).await?;
            client.upload::<Value>(stage.path(), form).await
        }
        None => {
            let body = read_body(args.data.as_deref(), args.file.as_deref()).await?;
            client.post::<Value, _>(stage.path(), &body).await
        }
    };

    let value = result.map_err(|e| report(e, stage.label()))?;
    print_value(&value, format);
    Ok(())
}
