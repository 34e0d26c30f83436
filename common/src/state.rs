//! タイムライン画面の状態
//!
//! ビュー・報告フロー・トーストをまとめたもの。通信やタイマーは持たず、
//! 呼び出し側（セッション）が結果をここへ反映する。

use crate::report::{ReportFlow, SubmitOutcome};
use crate::toast::{ToastSlot, ToastTicket};
use crate::types::Alert;
use crate::view::TimelineView;

#[derive(Debug, Clone, Default)]
pub struct TimelineState {
    pub view: TimelineView,
    pub report: ReportFlow,
    pub toast: ToastSlot,
    refresh_key: Option<u64>,
}

impl TimelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// アラート取得完了
    pub fn alerts_loaded(&mut self, alerts: Vec<Alert>) {
        self.view.load_alerts(alerts);
    }

    /// 報告送信完了。トーストを出して予約券を返す
    pub fn report_finished(&mut self, outcome: &SubmitOutcome) -> ToastTicket {
        let message = self.report.finish(outcome);
        self.toast.show(message)
    }

    /// 再描画キーを更新。値が変わった場合 `true`
    pub fn set_refresh_key(&mut self, key: u64) -> bool {
        if self.refresh_key == Some(key) {
            return false;
        }
        self.refresh_key = Some(key);
        true
    }

    pub fn refresh_key(&self) -> Option<u64> {
        self.refresh_key
    }
}
