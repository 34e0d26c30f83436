//! 端末表示

use alert_timeline_common::{format_time, icon_for, Alert, CameraId, Translator};

/// サイドパネル相当の一覧
pub fn alerts_panel(t: &Translator, alerts: &[&Alert]) -> String {
    let mut out = format!("{}\n", t.t("alertsTitle"));
    for alert in alerts {
        let icon = icon_for(&alert.alert_type);
        out.push_str(&format!(
            "  {:<8} {:<20} {} {}\n",
            alert.camera_id.label(),
            format_time(&alert.timestamp),
            icon.glyph,
            alert.alert_type
        ));
    }
    out
}

/// カメラ選択ボタン相当（選択中は `*`）
pub fn camera_bar(cams: &[CameraId], selected: Option<&CameraId>) -> String {
    cams.iter()
        .map(|cam| {
            if Some(cam) == selected {
                format!("[*{}]", cam.label())
            } else {
                format!("[ {}]", cam.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// アーカイブ一覧（番号付き）
pub fn archive_list(t: &Translator, records: &[&Alert]) -> String {
    let mut out = String::new();
    for (i, rec) in records.iter().enumerate() {
        out.push_str(&format!(
            "  [{}] {}: {} | {}: {}\n      {}\n",
            i,
            t.t("time"),
            format_time(&rec.timestamp),
            t.t("situation"),
            t.t_with("detect", &[("type", rec.alert_type.as_str())]),
            rec.img_url
        ));
    }
    out
}
