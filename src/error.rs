use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("サーバーエラー: {url} が {status} を返しました")]
    Status { url: String, status: u16 },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("レコードが見つかりません: {0}")]
    RecordNotFound(String),

    #[error(transparent)]
    Common(#[from] alert_timeline_common::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
