//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum::{Router, body::Body};
use serde_json::{Value, json};

use reservations::api::AppState;
use reservations::api::app;
use reservations::core::{AppConfig, CalendarService, CreatedEvent, Credentials};
use reservations::reservation::EventDraft;

pub const TEST_CALENDAR_ID: &str = "bookings@group.calendar.google.com";

/// Stands in for Google Calendar, recording every event it is asked to
/// create.
#[derive(Default)]
pub struct FakeCalendar {
    pub fail_with: Option<String>,
    pub inserted: Mutex<Vec<(String, EventDraft)>>,
}

impl FakeCalendar {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn inserted(&self) -> Vec<(String, EventDraft)> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarService for FakeCalendar {
    async fn insert_event(&self, calendar_id: &str, draft: &EventDraft) -> Result<CreatedEvent> {
        if let Some(message) = &self.fail_with {
            return Err(anyhow!("{}", message));
        }

        let mut inserted = self.inserted.lock().unwrap();
        inserted.push((calendar_id.to_string(), draft.clone()));
        let id = format!("evt{}", inserted.len());

        CreatedEvent::from_resource(json!({
            "id": id,
            "htmlLink": format!("https://www.google.com/calendar/event?eid={}", id),
            "status": "confirmed",
            "summary": draft.summary,
        }))
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        calendar_id: String::from(TEST_CALENDAR_ID),
        credentials: Credentials::Inline(String::from("{}")),
        timezone: chrono_tz::America::New_York,
        calendar_api_url: String::from("http://localhost:0"),
    }
}

/// Creates a test application router backed by `calendar`
pub fn test_app_with(calendar: Arc<FakeCalendar>) -> Router {
    let app_state = AppState::new(test_config(), calendar);
    app(Arc::new(app_state))
}

/// Creates a test application router with a calendar that always succeeds
pub fn test_app() -> Router {
    test_app_with(Arc::new(FakeCalendar::default()))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}
