use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::Activity;

/// One entry of `GET /activities`, keyed by activity name in the enclosing object.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ActivityDto {
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: Option<u32>,
    #[serde(deserialize_with = "lenient_roster")]
    pub participants: Vec<String>,
}

impl ActivityDto {
    pub fn into_activity(self, name: String) -> Activity {
        Activity {
            name,
            description: self.description.unwrap_or_default(),
            schedule: self.schedule,
            max_participants: self.max_participants.unwrap_or(0),
            participants: self.participants,
        }
    }
}

// Anything that is not an array becomes an empty roster.
fn lenient_roster<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            Value::String(email) => email,
            other => other.to_string(),
        })
        .collect())
}

/// Success body of signup/unregister.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body of signup/unregister. `detail` is only surfaced when it is a string.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    pub fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(Value::String(detail)) if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn missing_fields_take_defaults() {
        let dto: ActivityDto = serde_json::from_str("{}").unwrap();
        let activity = dto.into_activity("Chess Club".to_string());

        assert_eq!(activity.description, "");
        assert_eq!(activity.schedule, None);
        assert_eq!(activity.max_participants, 0);
        assert!(activity.participants.is_empty());
    }

    #[test]
    fn non_array_roster_is_coerced_to_empty() {
        for raw in [
            r#"{"participants": "a@x.com"}"#,
            r#"{"participants": null}"#,
            r#"{"participants": {"a": 1}}"#,
        ] {
            let dto: ActivityDto = serde_json::from_str(raw).unwrap();
            assert!(dto.participants.is_empty(), "{raw}");
        }
    }

    #[test]
    fn roster_order_and_non_string_entries_survive() {
        let dto: ActivityDto =
            serde_json::from_str(r#"{"participants": ["z@x.com", 7, "a@x.com"]}"#).unwrap();
        assert_eq!(dto.participants, vec!["z@x.com", "7", "a@x.com"]);
    }

    #[test]
    fn snapshot_object_keeps_server_order() {
        let raw = r#"{"Zumba": {}, "Art Studio": {}, "Chess Club": {}}"#;
        let parsed: IndexMap<String, ActivityDto> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["Zumba", "Art Studio", "Chess Club"]
        );
    }

    #[test]
    fn structured_detail_is_not_surfaced() {
        let validation: ErrorResponse =
            serde_json::from_str(r#"{"detail": [{"loc": ["query", "email"]}]}"#).unwrap();
        assert_eq!(validation.into_detail(), None);

        let plain: ErrorResponse = serde_json::from_str(r#"{"detail": "Activity is full"}"#).unwrap();
        assert_eq!(plain.into_detail().as_deref(), Some("Activity is full"));
    }
}
