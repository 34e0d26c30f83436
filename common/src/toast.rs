//! トースト通知
//!
//! 1枠だけの通知。表示ごとに世代番号を進め、古い世代の自動非表示は無視する。

use std::time::Duration;

/// 自動で消えるまでの時間
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// 自動非表示の予約券
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastTicket(u64);

impl ToastTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    message: String,
    visible: bool,
    generation: u64,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// メッセージを表示し、自動非表示用の予約券を返す
    pub fn show(&mut self, message: impl Into<String>) -> ToastTicket {
        self.generation += 1;
        self.message = message.into();
        self.visible = true;
        ToastTicket(self.generation)
    }

    /// 予約券が最新の場合だけ非表示にする。非表示にしたら `true`
    pub fn expire(&mut self, ticket: ToastTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// 閉じるボタン
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// 最後に表示したメッセージ（非表示後も保持）
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut toast = ToastSlot::new();
        assert!(!toast.is_visible());

        let ticket = toast.show("Report successfully submitted!");
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "Report successfully submitted!");

        assert!(toast.expire(ticket));
        assert!(!toast.is_visible());
        // 二度目は何もしない
        assert!(!toast.expire(ticket));
    }

    #[test]
    fn test_stale_ticket_does_not_hide_newer_toast() {
        let mut toast = ToastSlot::new();
        let first = toast.show("first");
        let second = toast.show("second");

        assert!(!toast.expire(first));
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "second");

        assert!(toast.expire(second));
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_dismiss() {
        let mut toast = ToastSlot::new();
        let ticket = toast.show("hello");
        toast.dismiss();
        assert!(!toast.is_visible());
        assert!(!toast.expire(ticket));
    }

    #[test]
    fn test_generation_monotonic() {
        let mut toast = ToastSlot::new();
        let a = toast.show("a");
        let b = toast.show("b");
        assert!(b.generation() > a.generation());
        assert_eq!(toast.generation(), b.generation());
    }
}
