//! UI chrome state — sidebar collapse and transient notices.
//!
//! Keeps presentation concerns out of panel state. Notices are single-slot:
//! validation and transport problems each surface exactly one banner, and a
//! newer notice replaces the old one.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Category of a transient notice. Per-model failures never come through
/// here; they render inline in their panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Rejected before submission (missing key, empty prompt).
    Validation,
    /// The result stream died mid-read.
    Transport,
}

/// A single user-visible notice.
#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Sidebar and notice state.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub sidebar_collapsed: bool,
    pub notice: Option<Notice>,
}

impl UiState {
    pub fn raise_validation(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice { kind: NoticeKind::Validation, message: message.into() });
    }

    pub fn raise_transport(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice { kind: NoticeKind::Transport, message: message.into() });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
