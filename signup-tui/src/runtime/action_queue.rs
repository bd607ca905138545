use crate::api::FetchError;
use crate::app::{FeedbackKind, FeedbackToken};
use crate::types::ActivityCatalog;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Requests raised by key and mouse handlers.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    Enroll { email: String, activity: String },
    Unenroll { email: String, activity: String },
}

/// Results reported back to the event loop by network tasks and timers.
#[derive(Debug)]
pub(super) enum SyncEvent {
    Feedback { text: String, kind: FeedbackKind },
    ResetForm,
    Snapshot(Result<ActivityCatalog, FetchError>),
    HideFeedback(FeedbackToken),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;
pub(super) type EventTx = UnboundedSender<SyncEvent>;
pub(super) type EventRx = UnboundedReceiver<SyncEvent>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}

pub(super) fn event_channel() -> (EventTx, EventRx) {
    mpsc::unbounded_channel()
}
