use crate::api::ApiClient;
use crate::app::{App, FeedbackToken, FEEDBACK_TTL};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::action_queue::{Action, EventTx, SyncEvent};
use super::coordinator::{refresh, run_mutation, Mutation};

/// Owns the network client and the feedback timer.
///
/// Network work runs on spawned tasks that report back through `events`;
/// only the event loop touches `App`.
pub(super) struct Runtime {
    client: ApiClient,
    events: EventTx,
    feedback_timer: Option<JoinHandle<()>>,
}

impl Runtime {
    pub(super) fn new(client: ApiClient, events: EventTx) -> Self {
        Self {
            client,
            events,
            feedback_timer: None,
        }
    }

    pub(super) fn load_initial_snapshot(&self, app: &mut App) {
        app.is_loading = true;
        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            refresh(&client, &events).await;
        });
    }

    pub(super) fn run_action(&self, action: Action) {
        let (mutation, email, activity) = match action {
            Action::Enroll { email, activity } => (Mutation::Enroll, email, activity),
            Action::Unenroll { email, activity } => (Mutation::Unenroll, email, activity),
        };
        debug!(?mutation, %email, %activity, "dispatching mutation");
        tokio::spawn(run_mutation(
            mutation,
            self.client.clone(),
            self.events.clone(),
            email,
            activity,
        ));
    }

    pub(super) fn apply_event(&mut self, event: SyncEvent, app: &mut App) {
        match event {
            SyncEvent::Feedback { text, kind } => {
                let token = app.feedback.show(text, kind);
                self.schedule_hide(token);
            }
            SyncEvent::ResetForm => app.reset_form(),
            SyncEvent::Snapshot(Ok(catalog)) => app.apply_snapshot(catalog),
            SyncEvent::Snapshot(Err(e)) => {
                warn!(error = %e, "showing load failure");
                app.apply_fetch_failure();
            }
            SyncEvent::HideFeedback(token) => {
                app.feedback.hide(token);
            }
        }
    }

    /// Restart the hide timer for the banner that was just shown.
    fn schedule_hide(&mut self, token: FeedbackToken) {
        if let Some(previous) = self.feedback_timer.take() {
            previous.abort();
        }
        let events = self.events.clone();
        self.feedback_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(FEEDBACK_TTL).await;
            let _ = events.send(SyncEvent::HideFeedback(token));
        }));
    }
}
