//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid alert at index {index}: {reason}")]
    InvalidAlert { index: usize, reason: String },

    #[error("Invalid worker id: {0:?}")]
    InvalidWorkerId(String),

    #[error("Report modal is not open")]
    ModalClosed,

    #[error("A report submission is already in flight")]
    SubmitInFlight,

    #[error("Unknown camera: {0}")]
    UnknownCamera(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_invalid_alert() {
        let error = Error::InvalidAlert {
            index: 3,
            reason: "timestamp is not a datetime".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid alert at index 3: timestamp is not a datetime"
        );
    }

    #[test]
    fn test_error_display_worker_id() {
        let error = Error::InvalidWorkerId("abc".to_string());
        assert_eq!(format!("{}", error), "Invalid worker id: \"abc\"");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownCamera("7".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownCamera"));
        assert!(debug.contains("7"));
    }
}
