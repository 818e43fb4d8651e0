//! Client error type.

use thiserror::Error;

/// Errors from client operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The backend answered with a non-2xx status.
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("could not encode request: {0}")]
    Encode(String),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// Text shown on the notification surface.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected { message, .. } => message.clone(),
            ClientError::Network(reason) => format!("Network error: {reason}"),
            ClientError::Encode(_) => "Could not encode request".to_string(),
            ClientError::Decode(_) => "Unexpected response from server".to_string(),
            ClientError::Storage(reason) => format!("Could not save session: {reason}"),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_shows_server_message() {
        let err = ClientError::Rejected {
            status: 422,
            message: "Deadline must be in the future".to_string(),
        };

        assert_eq!(err.user_message(), "Deadline must be in the future");
        assert!(err.to_string().contains("422"));
    }

    #[test]
    fn test_decode_hides_parser_detail() {
        let err: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();

        assert_eq!(err.user_message(), "Unexpected response from server");
    }
}
