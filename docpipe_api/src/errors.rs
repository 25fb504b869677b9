//! Error types for the API client.

use crate::error_info::{ErrorInfo, ResponseData};

/// Errors that can occur when making API requests.
///
/// Every variant can be turned back into an [`ErrorInfo`] with
/// [`Error::info`] for formatting and reporting.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The path could not be joined onto the base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
    /// The request body could not be encoded as JSON.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    Build(#[source] reqwest::Error),
    /// The request never produced a response (connection, timeout, body read).
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, info: ErrorInfo },
    /// The transport succeeded but the status was not 200.
    #[error("{message}")]
    Rejected {
        status: u16,
        message: String,
        data: Option<ResponseData>,
    },
    /// A 200 response body did not decode into the expected type.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
}

impl Error {
    /// The failure as a loosely-shaped [`ErrorInfo`].
    pub fn info(&self) -> ErrorInfo {
        match self {
            Error::HttpStatus { info, .. } => info.clone(),
            Error::Rejected {
                status,
                message,
                data,
            } => ErrorInfo::from_response(*status, data.clone()).with_message(message.clone()),
            Error::Network { source } => ErrorInfo::from_message(source.to_string()),
            other => ErrorInfo::from_message(other.to_string()),
        }
    }

    /// HTTP status the backend answered with, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } | Error::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
