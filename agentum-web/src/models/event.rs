use serde::{Deserialize, Serialize};

/// Public projection of a row in the `events` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "super::optional_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// `public` or `private`.
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default, deserialize_with = "super::optional_id")]
    pub owner_entity: Option<String>,
}

impl Event {
    pub const TABLE: &'static str = "events";

    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "start_time",
        "end_time",
        "location",
        "description",
        "avatar",
        "visibility",
        "owner_entity",
    ];

    pub fn is_private(&self) -> bool {
        self.visibility.as_deref() == Some("private")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_visibility() {
        let private = Event {
            visibility: Some("private".to_string()),
            ..Default::default()
        };
        let public = Event {
            visibility: Some("public".to_string()),
            ..Default::default()
        };
        assert!(private.is_private());
        assert!(!public.is_private());
        assert!(!Event::default().is_private());
    }

    #[test]
    fn test_event_deserializes_row() {
        let json = r#"{
            "id": "evt_1",
            "title": "Launch",
            "start_time": "2024-03-15T19:00:00+00:00",
            "end_time": null,
            "visibility": "public",
            "owner_entity": "7f1c"
        }"#;
        let event: Event = serde_json::from_str(json).expect("deserialize");
        assert_eq!(event.id.as_deref(), Some("evt_1"));
        assert_eq!(event.start_time.as_deref(), Some("2024-03-15T19:00:00+00:00"));
        assert!(event.end_time.is_none());
        assert_eq!(event.owner_entity.as_deref(), Some("7f1c"));
    }
}
