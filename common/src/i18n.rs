//! 表示文字列
//!
//! キーで引く文字列テーブル。`{{name}}` 形式の差し込みに対応する。
//! 未登録のキーはキー自体を返す。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Uz,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "uz" | "uzbek" => Ok(Locale::Uz),
            _ => Err(format!("Unknown locale: {}. Use en or uz", s)),
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("alertsTitle", "Alerts"),
    ("archiveTitle", "Archive"),
    ("filterRecent", "Most recent"),
    ("filterOldest", "Oldest"),
    ("time", "Time"),
    ("situation", "Situation"),
    ("detect", "{{type}} detected"),
];

const UZ: &[(&str, &str)] = &[
    ("alertsTitle", "Ogohlantirishlar"),
    ("archiveTitle", "Arxiv"),
    ("filterRecent", "Eng so'nggi"),
    ("filterOldest", "Eng eski"),
    ("time", "Vaqt"),
    ("situation", "Holat"),
    ("detect", "{{type}} aniqlandi"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// キーに対応する文字列
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    /// 差し込み付きで文字列を引く
    ///
    /// ```
    /// use alert_timeline_common::i18n::{Locale, Translator};
    ///
    /// let t = Translator::new(Locale::En);
    /// assert_eq!(t.t_with("detect", &[("type", "Helmet")]), "Helmet detected");
    /// ```
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{{{}}}}}", name), value);
        }
        text
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        let table = match self.locale {
            Locale::En => EN,
            Locale::Uz => UZ,
        };
        table
            .iter()
            .chain(EN.iter())
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_en() {
        let t = Translator::default();
        assert_eq!(t.t("alertsTitle"), "Alerts");
        assert_eq!(t.t("archiveTitle"), "Archive");
    }

    #[test]
    fn test_lookup_uz() {
        let t = Translator::new(Locale::Uz);
        assert_eq!(t.t("archiveTitle"), "Arxiv");
        assert_eq!(t.t_with("detect", &[("type", "Fire")]), "Fire aniqlandi");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let t = Translator::default();
        assert_eq!(t.t("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_interpolation_missing_arg_keeps_placeholder() {
        let t = Translator::default();
        assert_eq!(t.t_with("detect", &[]), "{{type}} detected");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("UZ".parse::<Locale>().unwrap(), Locale::Uz);
        assert!("fr".parse::<Locale>().is_err());
    }
}
