//! APIレスポンスパーサー
//!
//! `getalerts` / `report` のレスポンス本文をパースする。
//! 配列でない応答や必須フィールドの欠落はエラー。解釈できない日時は
//! そのまま通し、並べ替えで最も古い扱いになる。

use serde_json::Value;

use crate::error::{Error, Result};
use crate::format::parse_timestamp;
use crate::types::{Alert, ReportResponse};

/// `getalerts` のレスポンスをパース
///
/// # Arguments
/// * `body` - レスポンス本文（Alertの配列）
///
/// # Returns
/// * `Ok(Vec<Alert>)` - パース成功（サーバーの順序のまま）
/// * `Err(Error::Parse)` - 配列でない
/// * `Err(Error::InvalidAlert)` - 要素に必須フィールドがない
///
/// # Examples
/// ```
/// use alert_timeline_common::parse_alerts_response;
///
/// let body = r#"[{"camera_id": 1, "alert_type": "zone",
///                 "timestamp": "2024-01-01T10:00", "img_url": ""}]"#;
/// let alerts = parse_alerts_response(body).unwrap();
/// assert_eq!(alerts[0].camera_id.as_str(), "1");
/// ```
pub fn parse_alerts_response(body: &str) -> Result<Vec<Alert>> {
    let value: Value = serde_json::from_str(body.trim())?;
    alerts_from_value(value)
}

/// JSON値からアラート一覧を取り出す
pub fn alerts_from_value(value: Value) -> Result<Vec<Alert>> {
    let Value::Array(items) = value else {
        return Err(Error::Parse("alerts response is not an array".into()));
    };

    let alerts = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Alert>(item).map_err(|e| Error::InvalidAlert {
                index,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(alerts)
}

/// 日時が解釈できないアラートの番号
pub fn unparseable_timestamps(alerts: &[Alert]) -> Vec<usize> {
    alerts
        .iter()
        .enumerate()
        .filter(|(_, alert)| parse_timestamp(&alert.timestamp).is_none())
        .map(|(index, _)| index)
        .collect()
}

/// `report` のレスポンスをパース
pub fn parse_report_response(body: &str) -> Result<ReportResponse> {
    serde_json::from_str(body.trim())
        .map_err(|e| Error::Parse(format!("report response: {}", e)))
}
