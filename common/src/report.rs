//! 報告送信フロー
//!
//! モーダル (`Closed` / `Open`) と送信中フラグの組み合わせで管理する。
//! 送信時はレスポンスを待たずにモーダルを閉じる。

use crate::error::{Error, Result};
use crate::types::{Alert, ReportForm, ReportPayload, ReportResponse};

pub const MSG_SUBMITTED: &str = "Report successfully submitted!";
pub const MSG_FAILED_PREFIX: &str = "Failed to submit: ";
pub const MSG_TRANSPORT_ERROR: &str = "Error submitting report.";
/// サーバーがメッセージを返さなかった場合
pub const MSG_UNKNOWN_REASON: &str = "unknown error";

/// モーダルの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { record: Alert },
}

/// 送信結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// サーバーが受理した
    Accepted,
    /// サーバーが拒否した（メッセージ付き）
    Rejected(Option<String>),
    /// 通信失敗・不正なレスポンス
    Failed(String),
}

impl SubmitOutcome {
    pub fn from_response(response: &ReportResponse) -> Self {
        if response.success {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected(response.message.clone())
        }
    }

    /// トーストに表示する文言
    pub fn toast_message(&self) -> String {
        match self {
            SubmitOutcome::Accepted => MSG_SUBMITTED.to_string(),
            SubmitOutcome::Rejected(message) => format!(
                "{}{}",
                MSG_FAILED_PREFIX,
                message.as_deref().unwrap_or(MSG_UNKNOWN_REASON)
            ),
            SubmitOutcome::Failed(_) => MSG_TRANSPORT_ERROR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportFlow {
    modal: ModalState,
    in_flight: bool,
}

impl ReportFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// アーカイブのレコードを選んでモーダルを開く
    pub fn open(&mut self, record: Alert) {
        self.modal = ModalState::Open { record };
    }

    pub fn close(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn is_open(&self) -> bool {
        matches!(self.modal, ModalState::Open { .. })
    }

    /// モーダルで選択中のレコード
    pub fn selected_record(&self) -> Option<&Alert> {
        match &self.modal {
            ModalState::Open { record } => Some(record),
            ModalState::Closed => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// 送信開始
    ///
    /// 入力を検証してペイロードを作り、モーダルを閉じて送信中にする。
    /// 検証エラーの場合はモーダルを開いたままにする。
    ///
    /// # Returns
    /// * `Err(Error::ModalClosed)` - モーダルが開いていない
    /// * `Err(Error::SubmitInFlight)` - 前回の送信が完了していない
    /// * `Err(Error::InvalidWorkerId)` - 作業者IDが不正
    pub fn begin_submit(&mut self, form: &ReportForm) -> Result<ReportPayload> {
        if !self.is_open() {
            return Err(Error::ModalClosed);
        }
        if self.in_flight {
            return Err(Error::SubmitInFlight);
        }
        let payload = form.to_payload()?;
        self.modal = ModalState::Closed;
        self.in_flight = true;
        Ok(payload)
    }

    /// 送信完了。トースト文言を返す
    pub fn finish(&mut self, outcome: &SubmitOutcome) -> String {
        self.in_flight = false;
        outcome.toast_message()
    }
}
