//! Attendance registration handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use super::today;
use crate::api::dto::{AttendanceQuery, AttendanceStatusRequest, RegisterAttendanceRequest};
use crate::app_state::AppState;
use crate::domain::{Attendance, AttendanceId, Company, EventId};
use crate::error::{ConsoleError, ErrorResponse};

/// `POST /events/{id}/attendance` — Register a company.
///
/// # Errors
///
/// Returns [`ConsoleError`] for unknown records, closed registrations or
/// duplicates.
#[utoipa::path(
    post,
    path = "/api/v1/events/{id}/attendance",
    tag = "Attendance",
    summary = "Register a company to an event",
    description = "Creates a pending registration. Allowed up to and including the event day; a company holds at most one non-cancelled registration per event.",
    params(("id" = u32, Path, description = "Event id")),
    request_body = RegisterAttendanceRequest,
    responses(
        (status = 201, description = "Registration created", body = Attendance),
        (status = 404, description = "Event or company not found", body = ErrorResponse),
        (status = 409, description = "Already registered", body = ErrorResponse),
        (status = 422, description = "Event already took place", body = ErrorResponse),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Path(event_id): Path<EventId>,
    Json(req): Json<RegisterAttendanceRequest>,
) -> Result<impl IntoResponse, ConsoleError> {
    let attendance = state
        .events
        .register_attendance(event_id, req.company_id, today())
        .await?;
    Ok((StatusCode::CREATED, Json(attendance)))
}

/// `GET /events/{id}/attendance` — Registrations of an event.
///
/// # Errors
///
/// Returns [`ConsoleError::NotFound`] if the event does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}/attendance",
    tag = "Attendance",
    summary = "List registrations of an event",
    params(
        ("id" = u32, Path, description = "Event id"),
        AttendanceQuery,
    ),
    responses(
        (status = 200, description = "Registrations", body = Vec<Attendance>),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn list_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<EventId>,
    Query(query): Query<AttendanceQuery>,
) -> Result<Json<Vec<Attendance>>, ConsoleError> {
    Ok(Json(
        state.events.attendance_for(event_id, query.status).await?,
    ))
}

/// `PUT /attendance/{id}/status` — Confirm, reset or cancel a registration.
///
/// # Errors
///
/// Returns [`ConsoleError::RuleViolation`] past the relevant deadline.
#[utoipa::path(
    put,
    path = "/api/v1/attendance/{id}/status",
    tag = "Attendance",
    summary = "Change registration status",
    description = "Cancellation is allowed until the day before the event.",
    params(("id" = u32, Path, description = "Attendance id")),
    request_body = AttendanceStatusRequest,
    responses(
        (status = 200, description = "Registration updated", body = Attendance),
        (status = 404, description = "Registration not found", body = ErrorResponse),
        (status = 422, description = "Deadline passed", body = ErrorResponse),
    )
)]
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<AttendanceId>,
    Json(req): Json<AttendanceStatusRequest>,
) -> Result<Json<Attendance>, ConsoleError> {
    Ok(Json(
        state
            .events
            .set_attendance_status(id, req.status, today())
            .await?,
    ))
}

/// `GET /attendance/{id}/available-companies` — Who this registration may meet.
///
/// # Errors
///
/// Returns [`ConsoleError::NotFound`] if the registration does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/attendance/{id}/available-companies",
    tag = "Attendance",
    summary = "Companies available for a meeting",
    description = "Companies confirmed for the same event, excluding the requester's own registration.",
    params(("id" = u32, Path, description = "Attendance id")),
    responses(
        (status = 200, description = "Available companies", body = Vec<Company>),
        (status = 404, description = "Registration not found", body = ErrorResponse),
    )
)]
pub async fn available_companies(
    State(state): State<AppState>,
    Path(id): Path<AttendanceId>,
) -> Result<Json<Vec<Company>>, ConsoleError> {
    Ok(Json(state.events.available_companies(id).await?))
}

/// Attendance routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events/{id}/attendance",
            post(register).get(list_for_event),
        )
        .route("/attendance/{id}/status", put(set_status))
        .route(
            "/attendance/{id}/available-companies",
            get(available_companies),
        )
}
