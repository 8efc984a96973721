use serde::Serialize;

/// Uniform `{status, message, data}` envelope wrapping every response body.
///
/// Success envelopes always report `status: 200`, whatever HTTP status the
/// response goes out with; error envelopes carry the real status.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::success_with_message("success", data)
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            status: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        ApiResponse {
            status,
            message: message.into(),
            data: None,
        }
    }
}
