//! Router for the reservations API

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::reservation::EventDraft;

type SharedState = Arc<AppState>;

/// Validate a reservation and record it as a calendar event
async fn create_reservation(
    State(state): State<SharedState>,
    payload: Result<Json<public::ReservationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<public::CreateReservationResponse>), ApiError> {
    // Report malformed bodies with the same JSON shape as validation errors
    let Json(request) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let reservation = request
        .validate(state.config.timezone)
        .map_err(ApiError::bad_request)?;
    let draft = EventDraft::from(&reservation);

    let created = state
        .calendar
        .insert_event(&state.config.calendar_id, &draft)
        .await?;

    tracing::info!(
        "Created event {} for reservation \"{}\" at {}",
        created.id,
        draft.summary,
        draft.start.date_time
    );

    Ok((
        StatusCode::CREATED,
        Json(public::CreateReservationResponse {
            message: String::from(public::CREATED_MESSAGE),
            event_id: created.id,
            html_link: created.html_link,
            created_event: created.raw,
        }),
    ))
}

/// Create the reservations router. A trailing slash is accepted too.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/reservations", post(create_reservation))
        .route("/reservations/", post(create_reservation))
}
