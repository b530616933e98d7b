//! Google Calendar API client for creating reservation events

use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::oauth::{ServiceAccountKey, TokenProvider};
use crate::core::{AppConfig, CalendarService, CreatedEvent};
use crate::reservation::EventDraft;

// Bounds only connecting to Google. Requests themselves are not timed out.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Calendar API client authenticated as a service account
pub struct GoogleCalendar {
    api_url: String,
    client: Client,
    tokens: TokenProvider,
}

impl GoogleCalendar {
    pub fn new(key: ServiceAccountKey, api_url: &str) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        let tokens = TokenProvider::new(key, client.clone())?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            client,
            tokens,
        })
    }

    /// Resolve whichever credential source is configured into a client
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let json = config.credentials.load()?;
        let key = ServiceAccountKey::from_json(&json)?;
        Self::new(key, &config.calendar_api_url)
    }

    pub fn tokens(&self) -> &TokenProvider {
        &self.tokens
    }
}

#[async_trait]
impl CalendarService for GoogleCalendar {
    async fn insert_event(&self, calendar_id: &str, draft: &EventDraft) -> Result<CreatedEvent> {
        let access_token = self.tokens.access_token().await?;
        let url = format!(
            "{}/calendars/{}/events",
            self.api_url,
            urlencoding::encode(calendar_id)
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(access_token)
            .json(draft)
            .send()
            .await
            .context("Failed to reach Google Calendar")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            bail!("Failed to create event: HTTP {} - {}", status, body);
        }

        let resource: Value = response
            .json()
            .await
            .context("Failed to parse created event")?;

        CreatedEvent::from_resource(resource)
    }
}
