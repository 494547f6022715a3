//! Schedule generation and retrieval.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{ScheduleQuery, ScheduleResponse};
use crate::app_state::AppState;
use crate::domain::EventId;
use crate::error::{ConsoleError, ErrorResponse};

/// `POST /events/{id}/schedule` — Generate the meeting schedule.
///
/// # Errors
///
/// Returns [`ConsoleError::NotFound`] if the event does not exist.
#[utoipa::path(
    post,
    path = "/api/v1/events/{id}/schedule",
    tag = "Schedules",
    summary = "Generate the meeting schedule",
    description = "Pairs every two confirmed companies of the event into one-on-one meetings across its tables and time slots, skipping the break. Replaces any schedule generated before. Fewer than two confirmed companies yield an empty schedule.",
    params(
        ("id" = u32, Path, description = "Event id"),
        ScheduleQuery,
    ),
    responses(
        (status = 201, description = "Schedule generated", body = ScheduleResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn generate_schedule(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    Query(query): Query<ScheduleQuery>,
) -> Result<impl IntoResponse, ConsoleError> {
    let generated = state.meetings.generate_schedule(id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ScheduleResponse::render(generated, query.view)),
    ))
}

/// `GET /events/{id}/schedule` — Latest generated schedule.
///
/// # Errors
///
/// Returns [`ConsoleError::ScheduleNotGenerated`] if none exists yet.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}/schedule",
    tag = "Schedules",
    summary = "Get the latest schedule",
    params(
        ("id" = u32, Path, description = "Event id"),
        ScheduleQuery,
    ),
    responses(
        (status = 200, description = "Latest schedule", body = ScheduleResponse),
        (status = 404, description = "No schedule generated", body = ErrorResponse),
    )
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, ConsoleError> {
    let generated = state.meetings.latest_schedule(id).await?;
    Ok(Json(ScheduleResponse::render(generated, query.view)))
}

/// Schedule routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/events/{id}/schedule",
        post(generate_schedule).get(get_schedule),
    )
}
