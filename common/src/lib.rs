//! Alert Timeline Common Library
//!
//! CLIとデスクトップで共有される型・派生ビュー・状態遷移

pub mod error;
pub mod format;
pub mod i18n;
pub mod icons;
pub mod parser;
pub mod report;
pub mod state;
pub mod toast;
pub mod types;
pub mod view;

pub use error::{Error, Result};
pub use format::{format_time, parse_timestamp};
pub use i18n::{Locale, Translator};
pub use icons::{icon_for, Icon};
pub use parser::{parse_alerts_response, parse_report_response, unparseable_timestamps};
pub use report::{ModalState, ReportFlow, SubmitOutcome};
pub use state::TimelineState;
pub use toast::{ToastSlot, ToastTicket, TOAST_DURATION};
pub use types::{Alert, CameraId, ReportForm, ReportPayload, ReportResponse, SortOrder};
pub use view::{archive_records, sorted_alerts, unique_cams, TimelineView};
