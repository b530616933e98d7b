use anyhow::Result;

use crate::core::AppConfig;
use crate::google::GoogleCalendar;

pub async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let calendar = GoogleCalendar::from_config(&config)?;
    let token = calendar.tokens().fetch_token().await?;

    println!(
        "Authenticated as {}. Access token expires at {}",
        calendar.tokens().client_email(),
        token.expires_at.to_rfc3339()
    );
    Ok(())
}
