//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use alert_timeline::error::TimelineError;

/// TimelineErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        TimelineError::Config("テスト設定エラー".to_string()),
        TimelineError::Status {
            url: "http://localhost:8000/api/getalerts".to_string(),
            status: 502,
        },
        TimelineError::Prompt("入力中断".to_string()),
        TimelineError::RecordNotFound("#3".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// ステータスエラーのメッセージ確認
#[test]
fn test_status_error_message() {
    let err = TimelineError::Status {
        url: "http://localhost:8000/api/report".to_string(),
        status: 500,
    };
    let display = format!("{}", err);
    assert!(display.contains("/api/report"));
    assert!(display.contains("500"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: TimelineError = io_err.into();

    assert!(matches!(err, TimelineError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: TimelineError = json_err.into();

    assert!(matches!(err, TimelineError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = alert_timeline_common::Error::InvalidWorkerId("abc".to_string());
    let err: TimelineError = common_err.into();

    assert!(matches!(err, TimelineError::Common(_)));
    assert_eq!(format!("{}", err), "Invalid worker id: \"abc\"");
}
