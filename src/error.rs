use thiserror::Error;

/// Generic message for a failed form submission whose response had no body.
pub const REQUEST_FAILED: &str = "Ошибка запроса";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{}", http_message(*status, body))]
    Http { status: u16, body: String },

    /// The body could not be read as the expected JSON shape.
    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),

    /// A 2xx body that carried an explicit `error` field.
    #[error("{0}")]
    Application(String),
}

fn http_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}

impl ApiError {
    /// Message for form submissions: an HTTP failure with an empty body
    /// reads as `fallback` instead of the bare status code.
    pub fn describe_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { body, .. } if body.trim().is_empty() => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_uses_body_verbatim() {
        let err = ApiError::Http {
            status: 400,
            body: "{\"detail\":\"Максимум 500 транзакций за раз\"}".to_string(),
        };
        assert_eq!(err.to_string(), "{\"detail\":\"Максимум 500 транзакций за раз\"}");
        assert_eq!(err.describe_or(REQUEST_FAILED), err.to_string());
    }

    #[test]
    fn test_http_error_empty_body_falls_back() {
        let err = ApiError::Http { status: 502, body: "  ".to_string() };
        assert_eq!(err.to_string(), "HTTP 502");
        assert_eq!(err.describe_or(REQUEST_FAILED), "Ошибка запроса");
    }

    #[test]
    fn test_network_error_ignores_fallback() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.describe_or(REQUEST_FAILED), "Failed to fetch");
        let as_string: String = err.into();
        assert_eq!(as_string, "Failed to fetch");
    }
}
