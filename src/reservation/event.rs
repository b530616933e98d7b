use chrono::{DateTime, Duration, FixedOffset, SecondsFormat};
use serde::{Serialize, Serializer};

use super::request::Reservation;

/// Length of a reservation when the caller doesn't give an end time
pub const DEFAULT_DURATION_HOURS: i64 = 2;

const PROVENANCE_LINE: &str = "Created via the restaurant reservations API";

/// The event resource sent to Google Calendar for a reservation.
///
/// Serializes to the shape of the Calendar API `events.insert` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub summary: String,
    pub description: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
    pub attendees: Vec<Attendee>,
    pub reminders: Reminders,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    #[serde(serialize_with = "serialize_rfc3339")]
    pub date_time: DateTime<FixedOffset>,
    pub time_zone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attendee {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminders {
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderOverride {
    pub method: ReminderMethod,
    pub minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMethod {
    Popup,
    Email,
}

impl Reminders {
    /// Popup an hour before and an email the day before
    pub fn reservation_defaults() -> Self {
        Self {
            use_default: false,
            overrides: vec![
                ReminderOverride {
                    method: ReminderMethod::Popup,
                    minutes: 60,
                },
                ReminderOverride {
                    method: ReminderMethod::Email,
                    minutes: 24 * 60,
                },
            ],
        }
    }
}

impl From<&Reservation> for EventDraft {
    fn from(reservation: &Reservation) -> Self {
        let end = reservation
            .end
            .unwrap_or_else(|| reservation.start + Duration::hours(DEFAULT_DURATION_HOURS));
        let time_zone = reservation.start.timezone().name().to_string();

        let mut summary = format!("Reservation: {}", reservation.name);
        if let Some(party_size) = &reservation.party_size {
            summary.push_str(&format!(" — party of {}", party_size));
        }

        let mut lines = vec![format!("Name: {}", reservation.name)];
        if let Some(email) = &reservation.email {
            lines.push(format!("Email: {}", email));
        }
        if let Some(phone) = &reservation.phone {
            lines.push(format!("Phone: {}", phone));
        }
        if let Some(party_size) = &reservation.party_size {
            lines.push(format!("Party size: {}", party_size));
        }
        if let Some(notes) = &reservation.notes {
            lines.push(format!("Notes: {}", notes));
        }
        lines.push(String::new());
        lines.push(PROVENANCE_LINE.to_string());

        let attendees = reservation
            .email
            .iter()
            .map(|email| Attendee {
                email: email.clone(),
            })
            .collect();

        Self {
            summary,
            description: lines.join("\n"),
            start: EventDateTime {
                date_time: reservation.start.fixed_offset(),
                time_zone: time_zone.clone(),
            },
            end: EventDateTime {
                date_time: end.fixed_offset(),
                time_zone,
            },
            attendees,
            reminders: Reminders::reservation_defaults(),
        }
    }
}

fn serialize_rfc3339<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, false))
}
