use std::time::Duration;

/// How long a feedback banner stays up unless superseded.
pub const FEEDBACK_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackKind {
    #[default]
    Success,
    Error,
}

/// Identifies one `show` call. Only the latest token can hide the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FeedbackToken(u64);

/// The single session-wide notification banner.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    text: String,
    kind: FeedbackKind,
    visible: bool,
    latest: u64,
}

impl Feedback {
    /// Overwrite the banner and make it visible, superseding any earlier event.
    pub fn show(&mut self, text: impl Into<String>, kind: FeedbackKind) -> FeedbackToken {
        self.latest += 1;
        self.text = text.into();
        self.kind = kind;
        self.visible = true;
        FeedbackToken(self.latest)
    }

    /// Hide the banner if `token` is still the latest event. Returns whether it was hidden now.
    pub fn hide(&mut self, token: FeedbackToken) -> bool {
        if token.0 != self.latest || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }
}
