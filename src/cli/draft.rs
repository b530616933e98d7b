use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::config::timezone_from_env;
use crate::reservation::{EventDraft, ReservationRequest};

/// Validate a reservation file and print the event that would be sent,
/// without credentials or network access.
pub fn run(file: &Path) -> Result<()> {
    let timezone = timezone_from_env()?;
    let contents = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let request: ReservationRequest =
        serde_json::from_str(&contents).context("Failed to parse reservation request")?;

    let reservation = request.validate(timezone)?;
    let draft = EventDraft::from(&reservation);

    println!("{}", serde_json::to_string_pretty(&draft)?);
    Ok(())
}
