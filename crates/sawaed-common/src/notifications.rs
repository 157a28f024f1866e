use std::time::Duration;

/// Outcome shown by a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Failure,
}

impl NoticeLevel {
    /// Background color used when the notice is rendered.
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#2e7d32",
            Self::Failure => "#c62828",
        }
    }
}

/// A short-lived message attached next to the element that caused it.
///
/// Notices are fire-and-forget: the owner schedules a fade at `ttl` and a
/// removal once the fade transition has run.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub ttl: Duration,
}

impl Notice {
    pub fn success(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
            ttl,
        }
    }

    pub fn failure(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            level: NoticeLevel::Failure,
            text: text.into(),
            ttl,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}
