use tracing::{info, warn};

use crate::api::{ApiClient, FetchError, MutationError, REJECTION_FALLBACK};
use crate::app::FeedbackKind;
use crate::types::ActivityCatalog;

use super::action_queue::{EventTx, SyncEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mutation {
    Enroll,
    Unenroll,
}

impl Mutation {
    fn transport_message(self) -> &'static str {
        match self {
            Mutation::Enroll => "Failed to sign up. Please try again.",
            Mutation::Unenroll => "Failed to unregister. Please try again.",
        }
    }
}

/// Retrieve the full activity state from the store.
pub(super) async fn fetch_snapshot(client: &ApiClient) -> Result<ActivityCatalog, FetchError> {
    match client.get_activities().await {
        Ok(catalog) => {
            if catalog.is_empty() {
                warn!("activity store returned no activities");
            } else {
                info!(activities = catalog.len(), "fetched activity snapshot");
            }
            Ok(catalog)
        }
        Err(e) => {
            warn!(error = %e, "failed to fetch activity snapshot");
            Err(e)
        }
    }
}

/// Fetch a snapshot and hand it to the event loop for rendering.
pub(super) async fn refresh(client: &ApiClient, events: &EventTx) {
    let snapshot = fetch_snapshot(client).await;
    let _ = events.send(SyncEvent::Snapshot(snapshot));
}

/// One enroll or unenroll, start to finish.
///
/// Phases report in order: feedback, form reset (enroll only), then the
/// refresh snapshot. Failures report feedback only and skip the refresh.
pub(super) async fn run_mutation(
    mutation: Mutation,
    client: ApiClient,
    events: EventTx,
    email: String,
    activity: String,
) {
    let outcome = match mutation {
        Mutation::Enroll => client.signup(&activity, &email).await,
        Mutation::Unenroll => client.unregister(&activity, &email).await,
    };

    match outcome {
        Ok(message) => {
            info!(?mutation, %email, %activity, "mutation accepted");
            send_feedback(&events, message, FeedbackKind::Success);
            if mutation == Mutation::Enroll {
                let _ = events.send(SyncEvent::ResetForm);
            }
            refresh(&client, &events).await;
        }
        Err(MutationError::Rejected { status, detail }) => {
            warn!(?mutation, %email, %activity, %status, ?detail, "mutation rejected");
            let text = detail.unwrap_or_else(|| REJECTION_FALLBACK.to_string());
            send_feedback(&events, text, FeedbackKind::Error);
        }
        Err(MutationError::Transport(reason)) => {
            warn!(?mutation, %email, %activity, %reason, "mutation failed");
            send_feedback(
                &events,
                mutation.transport_message().to_string(),
                FeedbackKind::Error,
            );
        }
    }
}

fn send_feedback(events: &EventTx, text: String, kind: FeedbackKind) {
    let _ = events.send(SyncEvent::Feedback { text, kind });
}
