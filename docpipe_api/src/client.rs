//! HTTP client for the document pipeline backend.

use std::sync::Arc;

use reqwest::header::ACCEPT;
use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    error_info::{
        extract_error_message, get_error_status, ErrorInfo, ResponseData, NETWORK_ERROR_MESSAGE,
    },
    notify::Notifier,
    report::show_error_message,
    status::get_status_message,
    Error,
};

/// Body of a single request.
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Form),
}

/// What the caller expects back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseType {
    /// A JSON document, decoded into the caller's type.
    #[default]
    Json,
    /// Raw bytes, returned untouched.
    Blob,
}

/// Everything needed to issue one call. Owned by that call.
pub struct RequestConfig {
    pub method: Method,
    /// Path relative to the base URL, e.g. `/documents`.
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: RequestBody,
    pub headers: Vec<(String, String)>,
    pub response_type: ResponseType,
}

impl RequestConfig {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            params: Vec::new(),
            body: RequestBody::Empty,
            headers: Vec::new(),
            response_type: ResponseType::Json,
        }
    }

    /// Appends query parameters.
    pub fn with_params(mut self, params: &[(&str, &str)]) -> Self {
        self.params
            .extend(params.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Sends `form` as `multipart/form-data`; the boundary is filled in by the transport.
    pub fn with_multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }
}

/// HTTP client for the document pipeline backend.
///
/// Every failed call produces exactly one toast on the configured
/// [`Notifier`] and then returns `Err`; successful calls are silent.
/// Calls are attempted once, with no retries.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    notifier: Arc<dyn Notifier>,
}

impl Client {
    /// Creates a client for `config`, reporting failures to `notifier`.
    pub fn new(config: ClientConfig, notifier: Arc<dyn Notifier>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Build(e)
            })?;
        Ok(Self {
            http,
            config,
            notifier,
        })
    }

    /// Creates a client with a custom base URL and the default timeout. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, notifier: Arc<dyn Notifier>) -> Result<Self, Error> {
        Self::new(ClientConfig::new(base_url), notifier)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        let joined = if path.starts_with('/') {
            format!("{}{}", self.config.base_url, path)
        } else {
            format!("{}/{}", self.config.base_url, path)
        };
        Url::parse(&joined).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(format!("{}: {}", joined, e))
        })
    }

    /// Hook run on every outgoing request before it is sent.
    fn intercept_request(&self, config: RequestConfig) -> RequestConfig {
        tracing::debug!(method = %config.method, path = %config.path, "Sending request");
        config
    }

    /// Reports `error` to the notifier and hands it back for propagation.
    fn fail(&self, error: Error) -> Error {
        let display = match &error {
            Error::Rejected { message, .. } => message.clone(),
            other => display_message(&other.info()),
        };
        show_error_message(self.notifier.as_ref(), &display);
        error
    }

    async fn execute(&self, config: RequestConfig) -> Result<Vec<u8>, Error> {
        let config = self.intercept_request(config);
        let url = self.get_url(&config.path).map_err(|e| self.fail(e))?;

        let accept = match config.response_type {
            ResponseType::Json => "application/json, text/plain, */*",
            ResponseType::Blob => "*/*",
        };
        let mut builder = self.http.request(config.method, url).header(ACCEPT, accept);
        if !config.params.is_empty() {
            builder = builder.query(&config.params);
        }
        for (name, value) in &config.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match config.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            self.fail(Error::Network { source: e })
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            self.fail(Error::Network { source: e })
        })?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&text)
            );
            let info = ErrorInfo::from_response(status.as_u16(), ResponseData::from_body(&text))
                .with_message(format!(
                    "Request failed with status code {}",
                    status.as_u16()
                ));
            return Err(self.fail(Error::HttpStatus {
                status: status.as_u16(),
                info,
            }));
        }

        if status != StatusCode::OK {
            let data = ResponseData::from_body(&String::from_utf8_lossy(&body));
            let info = ErrorInfo::from_response(status.as_u16(), data.clone());
            let message = extract_error_message(&info, NETWORK_ERROR_MESSAGE);
            tracing::error!("Unexpected status {}: {}", status, message);
            return Err(self.fail(Error::Rejected {
                status: status.as_u16(),
                message,
                data,
            }));
        }

        Ok(body.to_vec())
    }

    /// Issues `config` and decodes the JSON response into `T`.
    ///
    /// An empty 200 body decodes as JSON `null`. A body that is not JSON is
    /// offered to `T` as a plain string before the call is failed.
    pub async fn request<T: DeserializeOwned>(&self, config: RequestConfig) -> Result<T, Error> {
        let body = self.execute(config).await?;
        let bytes: &[u8] = if body.is_empty() { b"null" } else { &body };
        let e = match serde_json::from_slice::<T>(bytes) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => e,
        };

        let text = String::from_utf8_lossy(&body).into_owned();
        if e.is_syntax() || e.is_eof() {
            if let Ok(parsed) = serde_json::from_value::<T>(Value::String(text.clone())) {
                return Ok(parsed);
            }
        }

        tracing::error!(
            "Failed to parse resource: {} | body: {}",
            e,
            truncate_body(&text)
        );
        Err(self.fail(Error::ParseFailed(e.to_string())))
    }

    fn encode<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value, Error> {
        serde_json::to_value(body).map_err(|e| self.fail(Error::InvalidBody(e.to_string())))
    }

    /// GET `path` with query `params`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, Error> {
        self.request(RequestConfig::new(Method::GET, path).with_params(params))
            .await
    }

    /// POST `body` as JSON to `path`.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.encode(body)?;
        self.request(RequestConfig::new(Method::POST, path).with_json(body))
            .await
    }

    /// PUT `body` as JSON to `path`.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.encode(body)?;
        self.request(RequestConfig::new(Method::PUT, path).with_json(body))
            .await
    }

    /// DELETE `path`. No body is sent.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.request(RequestConfig::new(Method::DELETE, path)).await
    }

    /// POST `form` to `path` as `multipart/form-data`.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, Error> {
        self.request(RequestConfig::new(Method::POST, path).with_multipart(form))
            .await
    }

    /// GET `path` and return the raw response bytes.
    pub async fn download(&self, path: &str, params: &[(&str, &str)]) -> Result<Vec<u8>, Error> {
        self.execute(
            RequestConfig::new(Method::GET, path)
                .with_params(params)
                .with_response_type(ResponseType::Blob),
        )
        .await
    }
}

/// The message shown for a failed call.
///
/// With a status, a generic network message is replaced by the status
/// description; anything more specific is prefixed with it.
pub fn display_message(error: &ErrorInfo) -> String {
    let message = extract_error_message(error, NETWORK_ERROR_MESSAGE);
    match get_error_status(error) {
        Some(status) => {
            let status_message = get_status_message(status);
            if message == NETWORK_ERROR_MESSAGE || message.contains("Network Error") {
                status_message
            } else {
                format!("{}: {}", status_message, message)
            }
        }
        None => message,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_info::ErrorPayload;

    #[test]
    fn display_prefixes_status_description() {
        let info = ErrorInfo::from_response(
            404,
            Some(ResponseData::Structured(ErrorPayload {
                detail: Some("Document not found".into()),
                message: None,
            })),
        );
        assert_eq!(display_message(&info), "资源不存在: Document not found");
    }

    #[test]
    fn display_replaces_generic_message() {
        let info = ErrorInfo::from_response(503, None);
        assert_eq!(display_message(&info), "服务不可用");

        let info = ErrorInfo::from_response(504, None).with_message("Network Error");
        assert_eq!(display_message(&info), "网关超时");
    }

    #[test]
    fn display_without_status_is_plain_message() {
        let info = ErrorInfo::from_message("connection refused");
        assert_eq!(display_message(&info), "connection refused");
        assert_eq!(display_message(&ErrorInfo::default()), "网络错误");
    }

    #[test]
    fn display_unknown_status() {
        let info = ErrorInfo::from_response(599, Some(ResponseData::Text("odd".into())));
        assert_eq!(display_message(&info), "HTTP错误 599: odd");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let long = "错".repeat(1000);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() < long.len());
    }

    #[test]
    fn relative_paths_are_joined() {
        let client = Client::with_base_url(
            "http://localhost:8001",
            Arc::new(crate::notify::TracingNotifier),
        )
        .unwrap();
        assert_eq!(
            client.get_url("documents").unwrap().as_str(),
            "http://localhost:8001/documents"
        );
        assert_eq!(
            client.get_url("/parse").unwrap().as_str(),
            "http://localhost:8001/parse"
        );
    }
}
