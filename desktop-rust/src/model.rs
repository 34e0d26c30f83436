use alert_timeline_common::{Alert, ReportForm};

/// モーダルで編集中の報告
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub form: ReportForm,
    pub error: Option<String>,
}

impl ReportDraft {
    pub fn for_record(record: &Alert) -> Self {
        Self {
            form: ReportForm::for_record(record),
            error: None,
        }
    }
}

pub struct ThumbData {
    pub url: String,
    pub size: [usize; 2],
    pub pixels: Vec<u8>,
}
