//! Reservation payloads and the calendar events built from them

mod event;
mod request;

pub use event::{
    Attendee, DEFAULT_DURATION_HOURS, EventDateTime, EventDraft, ReminderMethod,
    ReminderOverride, Reminders,
};
pub use request::{Reservation, ReservationRequest, ValidationError, parse_datetime};
