//! Fetch failures. Every variant renders as the text a card shows in place of
//! its content.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No response: connection refused, DNS, timeout.
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-success status. `message` is the body's `error` field when present.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_backend_message() {
        let err = FetchError::Api {
            status: 500,
            message: "환율 정보를 가져올 수 없습니다.".to_string(),
        };
        assert_eq!(err.to_string(), "환율 정보를 가져올 수 없습니다.");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn json_error_converts_to_decode() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Decode(_)));
        assert_eq!(err.status(), None);
    }
}
