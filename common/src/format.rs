//! 日時の解釈と表示

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// タイムゾーンなし日時として受け付ける形式
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// コロンなしオフセット (`+0000`) 付きの形式
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// 表示形式
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// タイムスタンプ文字列を解釈
///
/// - オフセット付き (RFC 3339) はそのまま
/// - オフセットなし日時はローカル時刻として扱う
/// - 日付のみは UTC の 0 時として扱う
///
/// 解釈できない場合は `None`
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(local_to_utc(naive));
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc())
}

fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // DSTの空白時間帯
        None => naive.and_utc(),
    }
}

/// ローカル時刻で表示用に整形（解釈できなければそのまま返す）
pub fn format_time(text: &str) -> String {
    match parse_timestamp(text) {
        Some(dt) => dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_timestamp("2024-01-01T10:00:00Z").expect("パース失敗");
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());

        let offset = parse_timestamp("2024-01-01T15:00:00+05:00").expect("パース失敗");
        assert_eq!(offset, dt);
    }

    #[test]
    fn test_parse_offset_without_colon() {
        let dt = parse_timestamp("2024-01-01T10:00:00+0000").expect("パース失敗");
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
        assert!(parse_timestamp("2024-01-01 15:00:00.5+0500").is_some());
    }

    #[test]
    fn test_parse_naive_without_seconds() {
        let later = parse_timestamp("2024-01-01T10:00").expect("パース失敗");
        let earlier = parse_timestamp("2024-01-01T09:00").expect("パース失敗");
        assert!(later > earlier);
        assert_eq!((later - earlier).num_minutes(), 60);
    }

    #[test]
    fn test_parse_naive_with_fraction_and_space() {
        assert!(parse_timestamp("2024-01-01T10:00:00.123456").is_some());
        assert!(parse_timestamp("2024-01-01 10:00:00").is_some());
    }

    #[test]
    fn test_parse_date_only() {
        let dt = parse_timestamp("2024-03-05").expect("パース失敗");
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-01T00:00").is_none());
    }

    #[test]
    fn test_format_naive_keeps_wall_clock() {
        assert_eq!(format_time("2024-01-01T10:00"), "2024-01-01 10:00:00");
    }

    #[test]
    fn test_format_invalid_is_verbatim() {
        assert_eq!(format_time("not a date"), "not a date");
    }
}
