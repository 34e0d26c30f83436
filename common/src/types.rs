//! データ型定義
//!
//! CLIとデスクトップで共有される型:
//! - Alert: `getalerts` のレスポンス要素
//! - ReportForm: オペレーターが入力する報告内容
//! - ReportPayload / ReportResponse: `report` エンドポイントの送受信形式

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// 報告に固定で付与するステータス
pub const REPORT_STATUS: &str = "ALERT";

/// カメラ識別子
///
/// サーバーは数値・文字列のどちらでも返すため、文字列表現で保持する
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CameraId(String);

impl CameraId {
    pub fn new(id: impl Into<String>) -> Self {
        CameraId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 表示用ラベル（例: `CAM 1`）
    pub fn label(&self) -> String {
        format!("CAM {}", self.0)
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CameraId {
    fn from(s: &str) -> Self {
        CameraId(s.to_string())
    }
}

impl From<u32> for CameraId {
    fn from(n: u32) -> Self {
        CameraId(n.to_string())
    }
}

impl<'de> Deserialize<'de> for CameraId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => CameraId(n.to_string()),
            RawId::Text(s) => CameraId(s),
        })
    }
}

/// カメラが検知したアラート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub camera_id: CameraId,
    pub alert_type: String,
    /// ISO 8601 日時文字列
    pub timestamp: String,
    /// 画像がない場合は空文字
    #[serde(default)]
    pub img_url: String,
}

/// アラート一覧の並び順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// 新しい順（デフォルト）
    #[default]
    MostRecent,
    /// 古い順
    Oldest,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::MostRecent => "most_recent",
            SortOrder::Oldest => "oldest",
        }
    }

    /// 表示文字列のキー
    pub fn label_key(&self) -> &'static str {
        match self {
            SortOrder::MostRecent => "filterRecent",
            SortOrder::Oldest => "filterOldest",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "most_recent" | "most-recent" | "recent" | "newest" => Ok(SortOrder::MostRecent),
            "oldest" | "old" => Ok(SortOrder::Oldest),
            _ => Err(format!("Unknown filter: {}. Use most_recent or oldest", s)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// オペレーターが入力する報告フォーム
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportForm {
    pub worker: String,
    /// 入力そのまま（送信時に整数へ変換）
    pub worker_id: String,
    pub department: String,
    pub supervisor: String,
    pub timestamp: String,
}

impl ReportForm {
    /// 選択されたアラートの日時を初期値にしたフォーム
    pub fn for_record(record: &Alert) -> Self {
        Self {
            timestamp: record.timestamp.clone(),
            ..Default::default()
        }
    }

    /// 送信用ペイロードに変換
    ///
    /// # Returns
    /// * `Err(Error::InvalidWorkerId)` - 作業者IDが整数として解釈できない場合
    pub fn to_payload(&self) -> Result<ReportPayload> {
        Ok(ReportPayload {
            name: self.worker.clone(),
            worker_id: parse_worker_id(&self.worker_id)?,
            department: self.department.clone(),
            supervisor: self.supervisor.clone(),
            status: REPORT_STATUS.to_string(),
            timestamp: self.timestamp.clone(),
        })
    }
}

/// `report` エンドポイントへの送信内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPayload {
    pub name: String,
    pub worker_id: i64,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Supervisor")]
    pub supervisor: String,
    pub status: String,
    pub timestamp: String,
}

/// `report` エンドポイントのレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// 作業者IDを整数に変換
///
/// 先頭の空白と符号を許し、先頭の数字列だけを読む（`"12abc"` → 12）
pub fn parse_worker_id(text: &str) -> Result<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return Err(Error::InvalidWorkerId(text.to_string()));
    }

    let value: i64 = rest[..digits_len]
        .parse()
        .map_err(|_| Error::InvalidWorkerId(text.to_string()))?;
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_id_from_number_and_string() {
        let from_number: CameraId = serde_json::from_str("1").unwrap();
        let from_text: CameraId = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(from_number.label(), "CAM 1");
    }

    #[test]
    fn test_alert_deserialize() {
        let json = r#"{
            "camera_id": 2,
            "alert_type": "Helmet",
            "timestamp": "2024-01-01T09:00:00",
            "img_url": "http://localhost:8000/static/a.jpg"
        }"#;
        let alert: Alert = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(alert.camera_id, CameraId::from(2));
        assert_eq!(alert.alert_type, "Helmet");
    }

    #[test]
    fn test_alert_missing_field_is_error() {
        let json = r#"{"camera_id": 2, "alert_type": "Helmet", "timestamp": "2024-01-01T09:00:00"}"#;
        assert!(serde_json::from_str::<Alert>(json).is_err());
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("most_recent".parse::<SortOrder>().unwrap(), SortOrder::MostRecent);
        assert_eq!("most-recent".parse::<SortOrder>().unwrap(), SortOrder::MostRecent);
        assert_eq!("OLDEST".parse::<SortOrder>().unwrap(), SortOrder::Oldest);
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default(), SortOrder::MostRecent);
    }

    #[test]
    fn test_parse_worker_id() {
        assert_eq!(parse_worker_id("42").unwrap(), 42);
        assert_eq!(parse_worker_id("  17abc").unwrap(), 17);
        assert_eq!(parse_worker_id("-5").unwrap(), -5);
        assert_eq!(parse_worker_id("+8").unwrap(), 8);
        assert!(matches!(parse_worker_id("abc"), Err(Error::InvalidWorkerId(_))));
        assert!(matches!(parse_worker_id(""), Err(Error::InvalidWorkerId(_))));
        assert!(matches!(parse_worker_id("-"), Err(Error::InvalidWorkerId(_))));
    }

    #[test]
    fn test_payload_wire_format() {
        let form = ReportForm {
            worker: "Aziz".to_string(),
            worker_id: "1024".to_string(),
            department: "Safety".to_string(),
            supervisor: "Karimov".to_string(),
            timestamp: "2024-01-01T10:00".to_string(),
        };
        let payload = form.to_payload().expect("変換失敗");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["name"], "Aziz");
        assert_eq!(json["worker_id"], 1024);
        assert_eq!(json["Department"], "Safety");
        assert_eq!(json["Supervisor"], "Karimov");
        assert_eq!(json["status"], "ALERT");
        assert_eq!(json["timestamp"], "2024-01-01T10:00");
    }

    #[test]
    fn test_report_response_message_optional() {
        let ok: ReportResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message, None);

        let ng: ReportResponse =
            serde_json::from_str(r#"{"success": false, "message": "duplicate"}"#).unwrap();
        assert!(!ng.success);
        assert_eq!(ng.message.as_deref(), Some("duplicate"));
    }

    #[test]
    fn test_form_for_record_copies_timestamp() {
        let alert = Alert {
            camera_id: CameraId::from(1),
            alert_type: "zone".to_string(),
            timestamp: "2024-01-01T10:00".to_string(),
            img_url: String::new(),
        };
        let form = ReportForm::for_record(&alert);
        assert_eq!(form.timestamp, "2024-01-01T10:00");
        assert!(form.worker.is_empty());
    }
}
