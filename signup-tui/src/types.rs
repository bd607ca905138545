use indexmap::IndexMap;

/// Shown in place of a missing or empty schedule.
pub const SCHEDULE_FALLBACK: &str = "TBA";

/// A named offering with a schedule, a capacity and an enrolled roster.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: Option<String>,
    pub max_participants: u32,
    /// Participant emails in the order the store returned them.
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the store has over-enrolled.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn schedule_label(&self) -> &str {
        match self.schedule.as_deref() {
            Some(schedule) if !schedule.is_empty() => schedule,
            _ => SCHEDULE_FALLBACK,
        }
    }
}

/// Full point-in-time copy of every activity, keyed by name in store order.
///
/// Always built whole from one snapshot; there is no way to patch entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityCatalog {
    activities: IndexMap<String, Activity>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.values()
    }
}

impl FromIterator<Activity> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        Self {
            activities: iter
                .into_iter()
                .map(|activity| (activity.name.clone(), activity))
                .collect(),
        }
    }
}
