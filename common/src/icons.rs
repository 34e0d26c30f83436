//! アラート種別アイコン

/// アイコン定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub key: &'static str,
    pub glyph: &'static str,
    /// RGB
    pub color: [u8; 3],
}

/// 該当なしの場合に使うアイコン
pub const DEFAULT_ICON_KEY: &str = "zone";

pub const ICONS: &[Icon] = &[
    Icon { key: "zone", glyph: "⛔", color: [230, 126, 34] },
    Icon { key: "helmet", glyph: "⛑", color: [241, 196, 15] },
    Icon { key: "vest", glyph: "🦺", color: [46, 204, 113] },
    Icon { key: "fire", glyph: "🔥", color: [231, 76, 60] },
    Icon { key: "smoke", glyph: "💨", color: [149, 165, 166] },
    Icon { key: "fall", glyph: "⚠", color: [192, 57, 43] },
];

/// 種別（大文字小文字を区別しない）からアイコンを引く
pub fn icon_for(alert_type: &str) -> &'static Icon {
    let key = alert_type.trim().to_lowercase();
    ICONS
        .iter()
        .find(|icon| icon.key == key)
        .or_else(|| ICONS.iter().find(|icon| icon.key == DEFAULT_ICON_KEY))
        .unwrap_or(&ICONS[0])
}
