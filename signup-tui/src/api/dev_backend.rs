use indexmap::IndexMap;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::api::error::{FetchError, MutationError};
use crate::types::{Activity, ActivityCatalog};

/// In-memory activity store answering with the same contract as the real one.
#[derive(Debug, Clone)]
pub struct DevBackend {
    store: Arc<Mutex<DevStore>>,
}

#[derive(Debug)]
struct DevStore {
    activities: IndexMap<String, Activity>,
    offline: bool,
    latency: Duration,
    requests: usize,
}

impl DevBackend {
    pub fn new() -> Self {
        Self::with_activities(seed_dev_activities())
    }

    pub fn with_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        Self {
            store: Arc::new(Mutex::new(DevStore {
                activities: activities
                    .into_iter()
                    .map(|activity| (activity.name.clone(), activity))
                    .collect(),
                offline: false,
                latency: Duration::ZERO,
                requests: 0,
            })),
        }
    }

    pub fn with_latency(self, latency: Duration) -> Self {
        self.store.lock().expect("dev store lock poisoned").latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.store.lock().expect("dev store lock poisoned").latency
    }

    /// While offline every call fails as if the network were down.
    #[cfg(test)]
    pub fn set_offline(&self, offline: bool) {
        self.store.lock().expect("dev store lock poisoned").offline = offline;
    }

    /// Number of calls received, including ones that failed.
    #[cfg(test)]
    pub fn request_count(&self) -> usize {
        self.store.lock().expect("dev store lock poisoned").requests
    }

    pub fn activities(&self) -> Result<ActivityCatalog, FetchError> {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        store.requests += 1;
        if store.offline {
            return Err(FetchError::Transport("dev store offline".to_string()));
        }
        Ok(store.activities.values().cloned().collect())
    }

    pub fn signup(&self, activity: &str, email: &str) -> Result<String, MutationError> {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        store.requests += 1;
        if store.offline {
            return Err(MutationError::Transport("dev store offline".to_string()));
        }

        let entry = store
            .activities
            .get_mut(activity)
            .ok_or_else(|| MutationError::rejected(StatusCode::NOT_FOUND, "Activity not found"))?;

        if entry.participants.iter().any(|p| p == email) {
            return Err(MutationError::rejected(
                StatusCode::BAD_REQUEST,
                "Student is already signed up",
            ));
        }
        if entry.spots_left() <= 0 {
            return Err(MutationError::rejected(
                StatusCode::BAD_REQUEST,
                "Activity is full",
            ));
        }

        entry.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity))
    }

    pub fn unregister(&self, activity: &str, email: &str) -> Result<String, MutationError> {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        store.requests += 1;
        if store.offline {
            return Err(MutationError::Transport("dev store offline".to_string()));
        }

        let entry = store
            .activities
            .get_mut(activity)
            .ok_or_else(|| MutationError::rejected(StatusCode::NOT_FOUND, "Activity not found"))?;

        let Some(position) = entry.participants.iter().position(|p| p == email) else {
            return Err(MutationError::rejected(
                StatusCode::BAD_REQUEST,
                "Student is not signed up for this activity",
            ));
        };

        entry.participants.remove(position);
        Ok(format!("Unregistered {} from {}", email, activity))
    }
}

fn dev_activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: Some(schedule.to_string()),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn seed_dev_activities() -> Vec<Activity> {
    vec![
        dev_activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        dev_activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        dev_activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        dev_activity(
            "Basketball Team",
            "Practice drills and compete in the regional league",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            15,
            &["alex@mergington.edu"],
        ),
        dev_activity(
            "Art Studio",
            "Explore painting, drawing and mixed media",
            "Wednesdays, 3:30 PM - 5:00 PM",
            2,
            &[],
        ),
    ]
}
