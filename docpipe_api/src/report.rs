//! Formatting and reporting of failed operations.

use crate::error_info::{extract_error_message, get_error_status, ErrorInfo, DEFAULT_ERROR_MESSAGE};
use crate::notify::{Notifier, Panel, Toast};

type ErrorCallback = Box<dyn Fn(&ErrorInfo, &str) + Send + Sync>;

/// Controls how [`handle_error`] reports a failure.
pub struct ErrorOptions {
    /// Label of the failed operation, used as a message prefix.
    pub operation: String,
    /// Fallback shown in a panel when nothing can be extracted.
    pub default_message: String,
    /// Show a short toast.
    pub show_message: bool,
    /// Show a detailed panel instead of the toast.
    pub show_notification: bool,
    /// Called with the error and the formatted message after notifying.
    pub on_error: Option<ErrorCallback>,
}

impl Default for ErrorOptions {
    fn default() -> Self {
        Self {
            operation: "操作".to_string(),
            default_message: "请稍后重试".to_string(),
            show_message: true,
            show_notification: false,
            on_error: None,
        }
    }
}

impl ErrorOptions {
    /// Options for the named operation, everything else default.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Self::default()
        }
    }

    pub fn with_default_message(mut self, default_message: impl Into<String>) -> Self {
        self.default_message = default_message.into();
        self
    }

    pub fn with_show_message(mut self, show_message: bool) -> Self {
        self.show_message = show_message;
        self
    }

    pub fn with_show_notification(mut self, show_notification: bool) -> Self {
        self.show_notification = show_notification;
        self
    }

    pub fn with_on_error<F>(mut self, on_error: F) -> Self
    where
        F: Fn(&ErrorInfo, &str) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(on_error));
        self
    }
}

/// `"{operation}失败 ({status}): {message}"`, or without the status when there is none.
pub fn format_error_message(error: &ErrorInfo, operation: &str) -> String {
    let message = extract_error_message(error, DEFAULT_ERROR_MESSAGE);
    match get_error_status(error) {
        Some(status) => format!("{}失败 ({}): {}", operation, status, message),
        None => format!("{}失败: {}", operation, message),
    }
}

/// Shows `message` as a toast.
pub fn show_error_message(notifier: &dyn Notifier, message: &str) {
    notifier.toast(&Toast::new(message));
}

/// Shows `message` in a panel titled `title`.
pub fn show_error_notification(notifier: &dyn Notifier, title: &str, message: &str) {
    notifier.panel(&Panel::new(title, message));
}

/// Logs, notifies and returns the formatted message for a failed operation.
///
/// With `show_notification` set, a panel titled `"{operation}失败"` is shown
/// and the toast is skipped. The return value is the same either way.
pub fn handle_error(error: &ErrorInfo, options: &ErrorOptions, notifier: &dyn Notifier) -> String {
    tracing::error!("{}错误: {:?}", options.operation, error);

    let formatted = format_error_message(error, &options.operation);

    if options.show_notification {
        let title = format!("{}失败", options.operation);
        let message = extract_error_message(error, &options.default_message);
        show_error_notification(notifier, &title, &message);
    } else if options.show_message {
        let message = extract_error_message(error, &formatted);
        show_error_message(notifier, &message);
    }

    if let Some(on_error) = &options.on_error {
        on_error(error, &formatted);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error_info::{ErrorPayload, ResponseData};

    #[derive(Default)]
    struct Recorder {
        toasts: Mutex<Vec<Toast>>,
        panels: Mutex<Vec<Panel>>,
    }

    impl Notifier for Recorder {
        fn toast(&self, toast: &Toast) {
            self.toasts.lock().unwrap().push(toast.clone());
        }

        fn panel(&self, panel: &Panel) {
            self.panels.lock().unwrap().push(panel.clone());
        }
    }

    fn server_error(message: &str) -> ErrorInfo {
        ErrorInfo::from_response(
            500,
            Some(ResponseData::Structured(ErrorPayload {
                detail: None,
                message: Some(message.to_string()),
            })),
        )
    }

    #[test]
    fn format_with_status() {
        insta::assert_snapshot!(format_error_message(&server_error("boom"), "保存"), @"保存失败 (500): boom");
    }

    #[test]
    fn format_without_status() {
        let error = ErrorInfo::from_message("Network Error");
        insta::assert_snapshot!(format_error_message(&error, "上传"), @"上传失败: Network Error");
    }

    #[test]
    fn format_falls_back_to_generic_text() {
        assert_eq!(
            format_error_message(&ErrorInfo::default(), "删除"),
            "删除失败: 操作失败"
        );
    }

    #[test]
    fn default_path_shows_one_toast() {
        let recorder = Recorder::default();
        let result = handle_error(&server_error("boom"), &ErrorOptions::new("保存"), &recorder);

        assert_eq!(result, "保存失败 (500): boom");
        let toasts = recorder.toasts.lock().unwrap();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "boom");
        assert_eq!(toasts[0].duration, crate::notify::TOAST_DURATION);
        assert!(recorder.panels.lock().unwrap().is_empty());
    }

    #[test]
    fn toast_uses_formatted_message_when_nothing_extracted() {
        let recorder = Recorder::default();
        let result = handle_error(&ErrorInfo::default(), &ErrorOptions::new("解析"), &recorder);

        assert_eq!(result, "解析失败: 操作失败");
        assert_eq!(recorder.toasts.lock().unwrap()[0].message, "解析失败: 操作失败");
    }

    #[test]
    fn panel_replaces_toast_and_returns_same_string() {
        let toast_recorder = Recorder::default();
        let toast_result =
            handle_error(&server_error("boom"), &ErrorOptions::new("保存"), &toast_recorder);

        let recorder = Recorder::default();
        let options = ErrorOptions::new("保存").with_show_notification(true);
        let result = handle_error(&server_error("boom"), &options, &recorder);

        assert_eq!(result, toast_result);
        assert!(recorder.toasts.lock().unwrap().is_empty());
        let panels = recorder.panels.lock().unwrap();
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].title, "保存失败");
        assert_eq!(panels[0].message, "boom");
        assert_eq!(panels[0].duration, crate::notify::PANEL_DURATION);
    }

    #[test]
    fn panel_uses_default_message_fallback() {
        let recorder = Recorder::default();
        let options = ErrorOptions::new("索引")
            .with_show_notification(true)
            .with_default_message("稍后再试");
        handle_error(&ErrorInfo::default(), &options, &recorder);

        assert_eq!(recorder.panels.lock().unwrap()[0].message, "稍后再试");
    }

    #[test]
    fn silent_when_both_disabled() {
        let recorder = Recorder::default();
        let options = ErrorOptions::new("检索").with_show_message(false);
        let result = handle_error(&server_error("boom"), &options, &recorder);

        assert_eq!(result, "检索失败 (500): boom");
        assert!(recorder.toasts.lock().unwrap().is_empty());
        assert!(recorder.panels.lock().unwrap().is_empty());
    }

    #[test]
    fn callback_receives_error_and_formatted_message() {
        let seen: Arc<Mutex<Vec<(Option<u16>, String)>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let options = ErrorOptions::new("嵌入").with_on_error(move |error, message| {
            sink.lock()
                .unwrap()
                .push((get_error_status(error), message.to_string()));
        });

        handle_error(&server_error("boom"), &options, &Recorder::default());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[(Some(500), "嵌入失败 (500): boom".to_string())]);
    }
}
