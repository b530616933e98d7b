use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

// Local wall-clock formats accepted when the caller omits an offset
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Reservation payload as posted by the booking form.
///
/// Fields are kept as raw JSON so a value of an unexpected type reaches
/// the validator instead of failing deserialization. Only `name`,
/// `startDateTime` and `endDateTime` are ever checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
    pub start_date_time: Option<Value>,
    pub end_date_time: Option<Value>,
    pub party_size: Option<Value>,
    pub notes: Option<Value>,
}

/// Reasons a reservation request is rejected. The messages are part of
/// the public API and callers match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name and startDateTime are required")]
    MissingRequired,
    #[error("startDateTime must be a valid ISO datetime")]
    InvalidStart,
    #[error("endDateTime must be a valid ISO datetime")]
    InvalidEnd,
    #[error("endDateTime must be after startDateTime")]
    EndNotAfterStart,
}

/// A reservation request that passed validation with its times resolved
/// in the restaurant's time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub party_size: Option<String>,
    pub notes: Option<String>,
    pub start: DateTime<Tz>,
    pub end: Option<DateTime<Tz>>,
}

impl ReservationRequest {
    /// Check the request, reporting the first rule that fails.
    ///
    /// `null`, `false`, `0` and `""` count as missing for every field. A
    /// start or end that is present but not a string is not a timestamp.
    pub fn validate(&self, tz: Tz) -> Result<Reservation, ValidationError> {
        let (Some(name), Some(start)) = (
            present(&self.name),
            present(&self.start_date_time),
        ) else {
            return Err(ValidationError::MissingRequired);
        };

        let start = start
            .as_str()
            .and_then(|raw| parse_datetime(raw, tz))
            .ok_or(ValidationError::InvalidStart)?;

        let end = match present(&self.end_date_time) {
            Some(raw) => {
                let end = raw
                    .as_str()
                    .and_then(|raw| parse_datetime(raw, tz))
                    .ok_or(ValidationError::InvalidEnd)?;
                if end <= start {
                    return Err(ValidationError::EndNotAfterStart);
                }
                Some(end)
            }
            None => None,
        };

        Ok(Reservation {
            name: render(name),
            email: present(&self.email).map(render),
            phone: present(&self.phone).map(render),
            party_size: present(&self.party_size).map(render),
            notes: present(&self.notes).map(render),
            start,
            end,
        })
    }
}

/// The value, unless it is one of the falsy JSON values
fn present(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|value| match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Text for a field as it appears in the event. Strings are used as-is,
/// whole numbers print without a fraction and anything else is JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) => f.to_string(),
            None => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Parse an ISO 8601 timestamp into the restaurant's zone.
///
/// Timestamps with an offset (`2025-10-12T19:00:00-04:00`, `...Z`) name
/// an exact instant. Timestamps without one, including bare dates, are
/// read as wall-clock time in `tz`, and a bare `YYYY-MM` or `YYYY` is
/// midnight on the first day of that month or year. Local times skipped
/// by a DST jump do not exist and fail to parse; repeated local times
/// resolve to the earlier instant.
pub fn parse_datetime(value: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let value = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&tz));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .or_else(|| parse_reduced_date(value))
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    tz.from_local_datetime(&naive).earliest()
}

/// `YYYY-MM` or `YYYY`, meaning the first day of that month or year
fn parse_reduced_date(value: &str) -> Option<NaiveDate> {
    let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());

    match value.split_once('-') {
        Some((year, month)) if digits(year, 4) && digits(month, 2) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        None if digits(value, 4) => NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1),
        _ => None,
    }
}
