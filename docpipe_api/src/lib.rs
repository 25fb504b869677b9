mod client;
pub mod config;
pub mod endpoints;
mod error_info;
mod errors;
mod notify;
mod report;
pub mod routes;
mod status;
pub use self::client::{display_message, Client, RequestBody, RequestConfig, ResponseType};
pub use self::config::ClientConfig;
pub use self::error_info::{
    extract_error_message, get_error_status, is_http_error, ErrorInfo, ErrorPayload, ResponseData,
    ResponseInfo, DEFAULT_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE,
};
pub use self::errors::Error;
pub use self::notify::{Notifier, Panel, Toast, TracingNotifier, PANEL_DURATION, TOAST_DURATION};
pub use self::report::{
    format_error_message, handle_error, show_error_message, show_error_notification, ErrorOptions,
};
pub use self::status::{describe_status, get_status_message, HTTP_STATUS_MESSAGES};
pub use reqwest::multipart;
pub use reqwest::Method;
