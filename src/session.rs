//! タイムラインセッション
//!
//! 画面状態 ([`TimelineState`]) と API を結びつける。
//! 取得・送信・トーストの自動非表示はタスクとして実行し、結果はイベントとして
//! チャンネル経由で受け取り [`TimelineSession::handle_event`] で反映する。

use std::sync::Arc;
use std::time::Duration;

use alert_timeline_common::{
    Alert, CameraId, ReportForm, SortOrder, SubmitOutcome, TimelineState, ToastTicket,
    TOAST_DURATION,
};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::TimelineApi;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    AlertsLoaded(Vec<Alert>),
    AlertsFailed(String),
    ReportFinished(SubmitOutcome),
    ToastExpired(ToastTicket),
}

pub struct TimelineSession<A: TimelineApi> {
    api: Arc<A>,
    state: TimelineState,
    tx: mpsc::UnboundedSender<SessionEvent>,
    rx: mpsc::UnboundedReceiver<SessionEvent>,
    runtime: Handle,
    fetch_task: Option<JoinHandle<()>>,
    fetch_error: Option<String>,
    loaded: bool,
    toast_duration: Duration,
}

impl<A: TimelineApi> TimelineSession<A> {
    /// 現在の tokio ランタイム上にセッションを作る
    ///
    /// ランタイム外から呼ぶとパニックする。その場合は [`Self::with_runtime`] を使う
    pub fn new(api: A) -> Self {
        Self::with_runtime(api, Handle::current())
    }

    pub fn with_runtime(api: A, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api: Arc::new(api),
            state: TimelineState::new(),
            tx,
            rx,
            runtime,
            fetch_task: None,
            fetch_error: None,
            loaded: false,
            toast_duration: TOAST_DURATION,
        }
    }

    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    /// アラート取得が完了したか（失敗も含む）
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// 直近のアラート取得失敗の理由
    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    /// アラートを一度だけ取得する（二回目以降は何もしない）
    pub fn start(&mut self) {
        if self.fetch_task.is_some() {
            return;
        }
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.fetch_task = Some(self.runtime.spawn(async move {
            let event = match api.fetch_alerts().await {
                Ok(alerts) => SessionEvent::AlertsLoaded(alerts),
                Err(err) => SessionEvent::AlertsFailed(err.to_string()),
            };
            let _ = tx.send(event);
        }));
    }

    pub fn set_filter(&mut self, filter: SortOrder) {
        if self.state.view.set_filter(filter) {
            tracing::debug!(%filter, "filter changed");
        }
    }

    pub fn select_cam(&mut self, cam: &CameraId) -> Result<()> {
        self.state.view.select_cam(cam)?;
        Ok(())
    }

    pub fn open_record(&mut self, record: Alert) {
        self.state.report.open(record);
    }

    pub fn close_modal(&mut self) {
        self.state.report.close();
    }

    /// 報告を送信する
    ///
    /// モーダルはレスポンスを待たずに閉じる。結果は
    /// [`SessionEvent::ReportFinished`] で届く
    pub fn submit_report(&mut self, form: &ReportForm) -> Result<()> {
        let payload = self.state.report.begin_submit(form)?;
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = match api.submit_report(&payload).await {
                Ok(response) => SubmitOutcome::from_response(&response),
                Err(err) => {
                    tracing::warn!("report submission failed: {}", err);
                    SubmitOutcome::Failed(err.to_string())
                }
            };
            let _ = tx.send(SessionEvent::ReportFinished(outcome));
        });
        Ok(())
    }

    pub fn dismiss_toast(&mut self) {
        self.state.toast.dismiss();
    }

    /// 外部から渡される再描画キー。変化をログに残すだけで再取得はしない
    pub fn set_refresh_key(&mut self, key: u64) {
        if self.state.set_refresh_key(key) {
            tracing::info!(refresh_key = key, "Timeline page refreshed");
        }
    }

    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::AlertsLoaded(alerts) => {
                tracing::info!(count = alerts.len(), "alerts loaded");
                self.fetch_error = None;
                self.loaded = true;
                self.state.alerts_loaded(alerts);
            }
            SessionEvent::AlertsFailed(reason) => {
                tracing::warn!("failed to load alerts: {}", reason);
                self.fetch_error = Some(reason);
                self.loaded = true;
            }
            SessionEvent::ReportFinished(outcome) => {
                let ticket = self.state.report_finished(&outcome);
                tracing::info!(toast = self.state.toast.message(), "report finished");
                self.schedule_toast_expiry(ticket);
            }
            SessionEvent::ToastExpired(ticket) => {
                if !self.state.toast.expire(ticket) {
                    tracing::trace!(
                        generation = ticket.generation(),
                        current = self.state.toast.generation(),
                        "stale toast timer"
                    );
                }
            }
        }
    }

    /// 次のイベントを待つ
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.rx.recv().await
    }

    pub fn try_next_event(&mut self) -> Option<SessionEvent> {
        self.rx.try_recv().ok()
    }

    /// 届いているイベントをすべて反映し、件数を返す
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.try_next_event() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// アラート取得の完了（成功・失敗）まで待つ
    pub async fn wait_loaded(&mut self) {
        while let Some(event) = self.next_event().await {
            let done = matches!(
                event,
                SessionEvent::AlertsLoaded(_) | SessionEvent::AlertsFailed(_)
            );
            self.handle_event(event);
            if done {
                return;
            }
        }
    }

    /// 報告送信の完了まで待ち、トースト文言を返す
    pub async fn wait_report(&mut self) -> Option<String> {
        while let Some(event) = self.next_event().await {
            let done = matches!(event, SessionEvent::ReportFinished(_));
            self.handle_event(event);
            if done {
                return Some(self.state.toast.message().to_string());
            }
        }
        None
    }

    fn schedule_toast_expiry(&self, ticket: ToastTicket) {
        let tx = self.tx.clone();
        // 表示した時点から数える
        let deadline = tokio::time::Instant::now() + self.toast_duration;
        self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(SessionEvent::ToastExpired(ticket));
        });
    }
}

impl<A: TimelineApi> Drop for TimelineSession<A> {
    fn drop(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
    }
}
