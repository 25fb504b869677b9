//! Generic request subcommands: one per client wrapper method.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use docpipe_api::multipart::{Form, Part};
use docpipe_api::Client;
use serde_json::Value;

use super::{parse_key_val, report};
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct PathArgs {
    /// Path relative to the base URL, e.g. /documents
    pub path: String,
}

#[derive(Args)]
pub struct GetArgs {
    /// Path relative to the base URL, e.g. /documents
    pub path: String,

    /// Query parameter as key=value (repeatable)
    #[arg(long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
}

#[derive(Args)]
pub struct BodyArgs {
    /// Path relative to the base URL, e.g. /parse
    pub path: String,

    /// Inline JSON body
    #[arg(long, conflicts_with = "file")]
    pub data: Option<String>,

    /// Read the JSON body from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct UploadArgs {
    /// Path relative to the base URL, e.g. /load
    pub path: String,

    /// File to upload
    pub file: PathBuf,

    /// Multipart field name
    #[arg(long, default_value = "file")]
    pub field: String,
}

#[derive(Args)]
pub struct DownloadArgs {
    /// Path relative to the base URL
    pub path: String,

    /// Query parameter as key=value (repeatable)
    #[arg(long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Where to write the response bytes
    #[arg(long, short)]
    pub out: PathBuf,
}

/// Resolves the JSON body from `--data` or `--file`; `{}` when neither is given.
pub async fn read_body(data: Option<&str>, file: Option<&Path>) -> Result<Value> {
    let raw = match (data, file) {
        (Some(data), _) => data.to_string(),
        (None, Some(file)) => tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("Failed to read {}", file.display()))?,
        (None, None) => return Ok(Value::Object(Default::default())),
    };
    serde_json::from_str(&raw).context("Request body is not valid JSON")
}

/// Builds a single-file multipart form from a file on disk.
pub async fn file_form(field: &str, file: &Path) -> Result<Form> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(Form::new().part(field.to_string(), Part::bytes(bytes).file_name(file_name)))
}

fn borrow_params(params: &[(String, String)]) -> Vec<(&str, &str)> {
    params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

pub async fn get(args: &GetArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let value: Value = client
        .get(&args.path, &borrow_params(&args.params))
        .await
        .map_err(|e| report(e, "查询"))?;
    print_value(&value, format);
    Ok(())
}

pub async fn post(args: &BodyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let body = read_body(args.data.as_deref(), args.file.as_deref()).await?;
    let value: Value = client
        .post(&args.path, &body)
        .await
        .map_err(|e| report(e, "提交"))?;
    print_value(&value, format);
    Ok(())
}

pub async fn put(args: &BodyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let body = read_body(args.data.as_deref(), args.file.as_deref()).await?;
    let value: Value = client
        .put(&args.path, &body)
        .await
        .map_err(|e| report(e, "更新"))?;
    print_value(&value, format);
    Ok(())
}

pub async fn delete(args: &PathArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let value: Value = client
        .delete(&args.path)
        .await
        .map_err(|e| report(e, "删除"))?;
    print_value(&value, format);
    Ok(())
}

pub async fn upload(args: &UploadArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let form = file_form(&args.field, &args.file).await?;
    let value: Value = client
        .upload(&args.path, form)
        .await
        .map_err(|e| report(e, "上传"))?;
    print_value(&value, format);
    Ok(())
}

pub async fn download(args: &DownloadArgs, client: &Client) -> Result<()> {
    let bytes = client
        .download(&args.path, &borrow_params(&args.params))
        .await
        .map_err(|e| report(e, "下载"))?;
    tokio::fs::write(&args.out, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", args.out.display()))?;
    eprintln!("Saved {} bytes to {}", bytes.len(), args.out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn body_defaults_to_empty_object() {
        let body = read_body(None, None).await.unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[tokio::test]
    async fn inline_body_is_parsed() {
        let body = read_body(Some(r#"{"chunk_size": 500}"#), None).await.unwrap();
        assert_eq!(body["chunk_size"], 500);
        assert!(read_body(Some("{oops"), None).await.is_err());
    }

    #[tokio::test]
    async fn missing_upload_file_is_an_error() {
        let err = file_form("file", Path::new("/definitely/not/here.pdf"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
