//! CLI subcommand implementations.

pub mod documents;
pub mod listing;
pub mod request;
pub mod stage;

use docpipe_api::format_error_message;

/// Turns a client error into a CLI error headed by the formatted operation message.
///
/// The client has already logged the failure and shown its toast, so this only formats.
pub fn report(error: docpipe_api::Error, operation: &str) -> anyhow::Error {
    let message = format_error_message(&error.info(), operation);
    anyhow::Error::new(error).context(message)
}

/// Parses a `key=value` argument.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{}`", s))?;
    Ok((key.to_string(), value.to_string()))
}
