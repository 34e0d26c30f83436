//! 報告フォームの対話入力
//!
//! コマンドラインで指定されなかった項目だけを尋ねる

use alert_timeline_common::types::parse_worker_id;
use alert_timeline_common::ReportForm;
use dialoguer::Input;

use crate::error::{Result, TimelineError};

/// コマンドライン引数から埋まった分
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    pub worker: Option<String>,
    pub worker_id: Option<String>,
    pub department: Option<String>,
    pub supervisor: Option<String>,
    pub timestamp: Option<String>,
}

impl ReportArgs {
    /// 未指定の項目を一覧
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.worker.is_none() {
            missing.push("worker");
        }
        if self.worker_id.is_none() {
            missing.push("worker_id");
        }
        if self.department.is_none() {
            missing.push("department");
        }
        if self.supervisor.is_none() {
            missing.push("supervisor");
        }
        missing
    }

    /// 引数をフォームに反映（未指定はプロンプトで尋ねる）
    pub fn into_form(self, base: ReportForm) -> Result<ReportForm> {
        Ok(ReportForm {
            worker: or_ask(self.worker, "Worker", None)?,
            worker_id: or_ask(self.worker_id, "Worker ID", Some(validate_worker_id))?,
            department: or_ask(self.department, "Department", None)?,
            supervisor: or_ask(self.supervisor, "Supervisor", None)?,
            timestamp: self.timestamp.unwrap_or(base.timestamp),
        })
    }
}

fn validate_worker_id(input: &String) -> std::result::Result<(), String> {
    parse_worker_id(input).map(|_| ()).map_err(|e| e.to_string())
}

fn or_ask(
    value: Option<String>,
    prompt: &str,
    validator: Option<fn(&String) -> std::result::Result<(), String>>,
) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(validator) = validator {
        input = input.validate_with(validator);
    }
    input
        .interact_text()
        .map_err(|e| TimelineError::Prompt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        let args = ReportArgs {
            worker: Some("Aziz".into()),
            supervisor: Some("Karimov".into()),
            ..Default::default()
        };
        assert_eq!(args.missing_fields(), vec!["worker_id", "department"]);
    }

    #[test]
    fn test_into_form_without_prompt() {
        let args = ReportArgs {
            worker: Some("Aziz".into()),
            worker_id: Some("7".into()),
            department: Some("Safety".into()),
            supervisor: Some("Karimov".into()),
            timestamp: None,
        };
        let base = ReportForm {
            timestamp: "2024-01-01T10:00".into(),
            ..Default::default()
        };
        let form = args.into_form(base).expect("フォーム作成失敗");
        assert_eq!(form.worker, "Aziz");
        assert_eq!(form.worker_id, "7");
        assert_eq!(form.timestamp, "2024-01-01T10:00");
    }

    #[test]
    fn test_validate_worker_id() {
        assert!(validate_worker_id(&"12".to_string()).is_ok());
        assert!(validate_worker_id(&"x".to_string()).is_err());
    }
}
