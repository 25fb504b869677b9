mod commands;
mod notifier;
mod output;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docpipe_api::config::timeout_from_secs;
use docpipe_api::{Client, ClientConfig, Notifier};

use crate::notifier::TerminalNotifier;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "docpipe")]
#[command(about = "Drive a document ingestion pipeline backend from the terminal")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Backend base URL (overrides DOCPIPE_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides DOCPIPE_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a GET request and print the response
    Get(commands::request::GetArgs),
    /// POST a JSON body and print the response
    Post(commands::request::BodyArgs),
    /// PUT a JSON body and print the response
    Put(commands::request::BodyArgs),
    /// Send a DELETE request and print the response
    Delete(commands::request::PathArgs),
    /// Upload a file as multipart/form-data
    Upload(commands::request::UploadArgs),
    /// Download a binary response to a file
    Download(commands::request::DownloadArgs),
    /// List, inspect or delete stored documents
    Documents(commands::documents::DocumentsArgs),
    /// Run one pipeline stage (load, parse, chunk, embed, index, search)
    Stage(commands::stage::StageArgs),
    /// List the navigation routes of the pipeline UI
    Routes,
    /// List the localized HTTP status descriptions
    StatusCodes,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docpipe=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = ClientConfig::new(base_url).with_timeout(config.timeout);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(timeout_from_secs(secs));
    }

    let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier);
    let client = Client::new(config, notifier)?;

    match &cli.command {
        Commands::Get(args) => commands::request::get(args, &client, &format).await?,
        Commands::Post(args) => commands::request::post(args, &client, &format).await?,
        Commands::Put(args) => commands::request::put(args, &client, &format).await?,
        Commands::Delete(args) => commands::request::delete(args, &client, &format).await?,
        Commands::Upload(args) => commands::request::upload(args, &client, &format).await?,
        Commands::Download(args) => commands::request::download(args, &client).await?,
        Commands::Documents(args) => commands::documents::run(args, &client, &format).await?,
        Commands::Stage(args) => commands::stage::run(args, &client, &format).await?,
        Commands::Routes => commands::listing::routes(&format),
        Commands::StatusCodes => commands::listing::status_codes(&format),
    }

    Ok(())
}
