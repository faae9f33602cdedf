use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `plators-client`.
pub enum ClientError {
    /// Ошибка HTTP-транспорта или декодирования ответа (`reqwest`).
    #[cfg(feature = "http")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Запрошенный пост не найден в коллекции.
    #[error("not found")]
    NotFound,

    /// Коллекция отклонила запрос (HTTP 400).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Любой другой неуспешный HTTP-статус.
    #[error("http status {status}: {message}")]
    Status {
        /// Код ответа.
        status: u16,
        /// Сообщение из тела ответа или текст по умолчанию.
        message: String,
    },
}

/// Результат операций `plators-client`.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub(crate) fn from_http_status(status: u16, message: Option<String>) -> Self {
        match status {
            404 => Self::NotFound,
            400 => Self::InvalidRequest(message.unwrap_or_else(|| "bad request".to_string())),
            _ => Self::Status {
                status,
                message: message.unwrap_or_else(|| format!("http status {status}")),
            },
        }
    }

    #[cfg(feature = "http")]
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status.as_u16(), None);
        }
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::ClientError;

    #[test]
    fn not_found_status_maps_to_not_found() {
        let err = ClientError::from_http_status(404, Some("Post not found".to_string()));
        assert!(matches!(err, ClientError::NotFound));
    }

    #[test]
    fn bad_request_keeps_server_message() {
        let err = ClientError::from_http_status(400, Some("Post ID required".to_string()));
        match err {
            ClientError::InvalidRequest(message) => assert_eq!(message, "Post ID required"),
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn other_statuses_fall_back_to_generic_message() {
        let err = ClientError::from_http_status(503, None);
        assert_eq!(err.to_string(), "http status 503: http status 503");
    }
}
