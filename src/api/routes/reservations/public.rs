//! Public types for the reservations API
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use crate::reservation::ReservationRequest;

pub const CREATED_MESSAGE: &str = "Reservation created";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationResponse {
    pub message: String,
    pub event_id: String,
    pub html_link: Option<String>,
    /// The event resource as returned by the calendar
    pub created_event: Value,
}
