//! The calendar collaborator the HTTP API hands reservations to

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;

use crate::reservation::EventDraft;

/// An event as returned by the calendar after it was created
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedEvent {
    pub id: String,
    pub html_link: Option<String>,
    /// The full event resource returned by the calendar
    pub raw: Value,
}

impl CreatedEvent {
    /// Pull the id and link out of a Calendar API event resource
    pub fn from_resource(raw: Value) -> Result<Self> {
        let id = raw
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("Calendar response is missing the event id"))?
            .to_string();
        let html_link = raw
            .get("htmlLink")
            .and_then(Value::as_str)
            .map(String::from);

        Ok(Self { id, html_link, raw })
    }
}

#[async_trait]
pub trait CalendarService: Send + Sync {
    /// Create `draft` on the calendar identified by `calendar_id`
    async fn insert_event(&self, calendar_id: &str, draft: &EventDraft) -> Result<CreatedEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_reads_id_and_link_from_resource() {
        let raw = json!({
            "id": "evt123",
            "htmlLink": "https://www.google.com/calendar/event?eid=abc",
            "status": "confirmed"
        });
        let created = CreatedEvent::from_resource(raw.clone()).unwrap();
        assert_eq!(created.id, "evt123");
        assert_eq!(
            created.html_link.as_deref(),
            Some("https://www.google.com/calendar/event?eid=abc")
        );
        assert_eq!(created.raw, raw);
    }

    #[test]
    fn it_requires_an_event_id() {
        assert!(CreatedEvent::from_resource(json!({ "htmlLink": "x" })).is_err());
    }
}
