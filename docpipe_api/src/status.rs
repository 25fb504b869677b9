//! Localized descriptions for common HTTP status codes.

/// Status codes the backend is known to produce, with their user-facing text.
pub const HTTP_STATUS_MESSAGES: [(u16, &str); 14] = [
    (400, "请求参数错误"),
    (401, "未授权访问"),
    (403, "禁止访问"),
    (404, "资源不存在"),
    (405, "请求方法不允许"),
    (408, "请求超时"),
    (409, "资源冲突"),
    (413, "请求体过大"),
    (422, "请求参数验证失败"),
    (429, "请求过于频繁"),
    (500, "服务器内部错误"),
    (502, "网关错误"),
    (503, "服务不可用"),
    (504, "网关超时"),
];

/// Table entry for `status`, if there is one.
pub fn describe_status(status: u16) -> Option<&'static str> {
    HTTP_STATUS_MESSAGES
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, text)| *text)
}

/// Friendly description of `status`, falling back to `HTTP错误 {status}`.
pub fn get_status_message(status: u16) -> String {
    match describe_status(status) {
        Some(text) => text.to_string(),
        None => format!("HTTP错误 {}", status),
    }
}
