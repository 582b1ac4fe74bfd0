//! Inline form messages

use std::time::Duration;

use tokio::time::Instant;

/// How long a success notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_millis(2500);

/// Tone of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Neutral guidance, such as "nothing to update"
    Info,
    /// A completed action
    Success,
    /// A failed validation or request
    Error,
}

/// Message shown next to a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Tone used to style the message
    pub kind: NoticeKind,

    /// Text shown to the user
    pub message: String,

    expires_at: Option<Instant>,
}

impl Notice {
    /// Informational notice that stays until replaced.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message.into(), None)
    }

    /// Success notice that stays until replaced.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message.into(), None)
    }

    /// Success notice that disappears after [`NOTICE_TTL`].
    pub fn transient_success(message: impl Into<String>) -> Self {
        Self::new(
            NoticeKind::Success,
            message.into(),
            Some(Instant::now() + NOTICE_TTL),
        )
    }

    /// Error notice that stays until replaced.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message.into(), None)
    }

    /// Whether the notice should still be shown at `now`.
    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }

    fn new(kind: NoticeKind, message: String, expires_at: Option<Instant>) -> Self {
        Self {
            kind,
            message,
            expires_at,
        }
    }
}

/// The notice in `slot`, unless it has expired.
pub(super) fn visible(slot: Option<&Notice>) -> Option<&Notice> {
    slot.filter(|notice| notice.is_visible_at(Instant::now()))
}
