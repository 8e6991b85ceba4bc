//! Transient success/failure notices.
//!
//! Each kind has a single slot. A new notice replaces the current one of the
//! same kind and restarts its lifetime; nothing is queued. Expiry is decided
//! against the clock passed in, so the board itself never spawns timers. The
//! UI uses [`NoticeBoard::next_expiry`] to schedule one cancellable redraw.

use std::time::{Duration, Instant};

pub const NOTICE_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Success,
    Failure,
}

impl NoticeKind {
    /// CSS class used by the banner widget.
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Failure => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct NoticeBoard {
    success: Option<Notice>,
    failure: Option<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: NoticeKind) -> &Option<Notice> {
        match kind {
            NoticeKind::Success => &self.success,
            NoticeKind::Failure => &self.failure,
        }
    }

    fn slot_mut(&mut self, kind: NoticeKind) -> &mut Option<Notice> {
        match kind {
            NoticeKind::Success => &mut self.success,
            NoticeKind::Failure => &mut self.failure,
        }
    }

    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) -> &Notice {
        self.slot_mut(kind).insert(Notice {
            message: message.into(),
            kind,
            expires_at: now + NOTICE_TTL,
        })
    }

    /// The visible notice of `kind`, if it has not expired at `now`.
    pub fn current(&self, kind: NoticeKind, now: Instant) -> Option<&Notice> {
        self.slot(kind).as_ref().filter(|n| now < n.expires_at)
    }

    pub fn next_expiry(&self, kind: NoticeKind) -> Option<Instant> {
        self.slot(kind).as_ref().map(|n| n.expires_at)
    }

    /// Drops expired notices. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let mut removed = false;
        for kind in [NoticeKind::Success, NoticeKind::Failure] {
            let slot = self.slot_mut(kind);
            if slot.as_ref().is_some_and(|n| now >= n.expires_at) {
                *slot = None;
                removed = true;
            }
        }
        removed
    }
}
