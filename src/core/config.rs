use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;

pub const CALENDAR_ID_VAR: &str = "GOOGLE_CALENDAR_ID";
pub const INLINE_CREDENTIALS_VAR: &str = "GOOGLE_SERVICE_ACCOUNT_KEY";
pub const CREDENTIALS_FILE_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const TIMEZONE_VAR: &str = "RESERVATIONS_TIMEZONE";
pub const CALENDAR_API_URL_VAR: &str = "GOOGLE_CALENDAR_API_URL";

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;
pub const DEFAULT_CALENDAR_API_URL: &str = "https://www.googleapis.com/calendar/v3";

/// Where the service account key comes from
#[derive(Clone, Debug, PartialEq)]
pub enum Credentials {
    /// Service account JSON passed directly in the environment
    Inline(String),
    /// Path to a service account JSON file
    File(PathBuf),
}

impl Credentials {
    /// Read the raw service account JSON
    pub fn load(&self) -> Result<String> {
        match self {
            Credentials::Inline(json) => Ok(json.clone()),
            Credentials::File(path) => fs::read_to_string(path).with_context(|| {
                format!("Failed to read credentials file {}", path.display())
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub calendar_id: String,
    pub credentials: Credentials,
    pub timezone: Tz,
    pub calendar_api_url: String,
}

impl AppConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the configuration from any key/value source. Blank values
    /// are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let calendar_id =
            var(CALENDAR_ID_VAR).ok_or_else(|| anyhow!("Missing env var {}", CALENDAR_ID_VAR))?;

        let credentials = match (var(INLINE_CREDENTIALS_VAR), var(CREDENTIALS_FILE_VAR)) {
            (Some(json), file) => {
                if file.is_some() {
                    tracing::warn!(
                        "Both {} and {} are set, using {}",
                        INLINE_CREDENTIALS_VAR,
                        CREDENTIALS_FILE_VAR,
                        INLINE_CREDENTIALS_VAR
                    );
                }
                Credentials::Inline(json)
            }
            (None, Some(path)) => Credentials::File(PathBuf::from(path)),
            (None, None) => {
                return Err(anyhow!(
                    "Missing Google credentials, set {} or {}",
                    INLINE_CREDENTIALS_VAR,
                    CREDENTIALS_FILE_VAR
                ));
            }
        };

        let timezone = parse_timezone(var(TIMEZONE_VAR))?;
        let calendar_api_url = var(CALENDAR_API_URL_VAR)
            .unwrap_or_else(|| DEFAULT_CALENDAR_API_URL.to_string());

        Ok(Self {
            calendar_id,
            credentials,
            timezone,
            calendar_api_url,
        })
    }
}

/// The restaurant's time zone, for commands that don't need the rest of
/// the configuration.
pub fn timezone_from_env() -> Result<Tz> {
    let name = env::var(TIMEZONE_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    parse_timezone(name)
}

fn parse_timezone(name: Option<String>) -> Result<Tz> {
    match name {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|e| anyhow!("Invalid {} {:?}: {}", TIMEZONE_VAR, name, e)),
        None => Ok(DEFAULT_TIMEZONE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn it_loads_inline_credentials() {
        let config = AppConfig::from_lookup(lookup(&[
            (CALENDAR_ID_VAR, "bookings@group.calendar.google.com"),
            (INLINE_CREDENTIALS_VAR, "{\"client_email\": \"a@b.c\"}"),
        ]))
        .unwrap();

        assert_eq!(config.calendar_id, "bookings@group.calendar.google.com");
        assert_eq!(
            config.credentials,
            Credentials::Inline("{\"client_email\": \"a@b.c\"}".to_string())
        );
        assert_eq!(config.timezone, DEFAULT_TIMEZONE);
        assert_eq!(config.calendar_api_url, DEFAULT_CALENDAR_API_URL);
    }

    #[test]
    fn it_loads_a_credentials_file_path() {
        let config = AppConfig::from_lookup(lookup(&[
            (CALENDAR_ID_VAR, "primary"),
            (CREDENTIALS_FILE_VAR, "/etc/reservations/key.json"),
            (TIMEZONE_VAR, "Europe/Paris"),
        ]))
        .unwrap();

        assert_eq!(
            config.credentials,
            Credentials::File(PathBuf::from("/etc/reservations/key.json"))
        );
        assert_eq!(config.timezone, chrono_tz::Europe::Paris);
    }

    #[test]
    fn it_prefers_inline_credentials_when_both_are_set() {
        let config = AppConfig::from_lookup(lookup(&[
            (CALENDAR_ID_VAR, "primary"),
            (INLINE_CREDENTIALS_VAR, "{}"),
            (CREDENTIALS_FILE_VAR, "/etc/reservations/key.json"),
        ]))
        .unwrap();
        assert_eq!(config.credentials, Credentials::Inline("{}".to_string()));
    }

    #[test]
    fn it_fails_without_calendar_id() {
        let err = AppConfig::from_lookup(lookup(&[(INLINE_CREDENTIALS_VAR, "{}")])).unwrap_err();
        assert!(err.to_string().contains(CALENDAR_ID_VAR));

        let err = AppConfig::from_lookup(lookup(&[
            (CALENDAR_ID_VAR, "   "),
            (INLINE_CREDENTIALS_VAR, "{}"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(CALENDAR_ID_VAR));
    }

    #[test]
    fn it_fails_without_credentials() {
        let err = AppConfig::from_lookup(lookup(&[
            (CALENDAR_ID_VAR, "primary"),
            (INLINE_CREDENTIALS_VAR, ""),
        ]))
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains(INLINE_CREDENTIALS_VAR));
        assert!(message.contains(CREDENTIALS_FILE_VAR));
    }

    #[test]
    fn it_fails_on_unknown_timezone() {
        let err = AppConfig::from_lookup(lookup(&[
            (CALENDAR_ID_VAR, "primary"),
            (INLINE_CREDENTIALS_VAR, "{}"),
            (TIMEZONE_VAR, "Mars/Olympus_Mons"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(TIMEZONE_VAR));
    }

    #[test]
    fn it_reads_credentials_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"client_email\": \"a@b.c\"}}").unwrap();

        let credentials = Credentials::File(file.path().to_path_buf());
        assert_eq!(credentials.load().unwrap(), "{\"client_email\": \"a@b.c\"}");

        let missing = Credentials::File(PathBuf::from("/nonexistent/key.json"));
        assert!(missing.load().is_err());
    }
}
