//! Event CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{EventRequest, ListResponse, PaginationParams, paginate};
use crate::app_state::AppState;
use crate::domain::{Event, EventId};
use crate::error::{ConsoleError, ErrorResponse};

/// `POST /events` — Create an event.
///
/// # Errors
///
/// Returns [`ConsoleError`] on invalid timing or an unknown contact.
#[utoipa::path(
    post,
    path = "/api/v1/events",
    tag = "Events",
    summary = "Create an event",
    description = "Creates a business-round event. The break must sit inside the opening hours; send the same time for `break_start` and `break_end` for no break.",
    request_body = EventRequest,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Invalid timing or currency", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<EventRequest>,
) -> Result<impl IntoResponse, ConsoleError> {
    let event = state.events.create_event(req.into()).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// `GET /events` — List events.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Events",
    summary = "List events",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated event list", body = ListResponse<Event>),
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Json<ListResponse<Event>> {
    Json(paginate(state.events.list_events().await, &params))
}

/// `GET /events/{id}` — Get one event.
///
/// # Errors
///
/// Returns [`ConsoleError::NotFound`] if the event does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    tag = "Events",
    summary = "Get an event",
    params(("id" = u32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event details", body = Event),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<Json<Event>, ConsoleError> {
    Ok(Json(state.events.get_event(id).await?))
}

/// `PUT /events/{id}` — Replace an event.
///
/// # Errors
///
/// Returns [`ConsoleError`] on invalid timing or unknown event or contact.
#[utoipa::path(
    put,
    path = "/api/v1/events/{id}",
    tag = "Events",
    summary = "Update an event",
    description = "Replaces every editable field. A previously generated schedule is kept until the next generation.",
    params(("id" = u32, Path, description = "Event id")),
    request_body = EventRequest,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 400, description = "Invalid timing or currency", body = ErrorResponse),
        (status = 404, description = "Event or contact not found", body = ErrorResponse),
    )
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    Json(req): Json<EventRequest>,
) -> Result<Json<Event>, ConsoleError> {
    Ok(Json(state.events.update_event(id, req.into()).await?))
}

/// `DELETE /events/{id}` — Remove an event without registrations.
///
/// # Errors
///
/// Returns [`ConsoleError::Conflict`] while companies are registered.
#[utoipa::path(
    delete,
    path = "/api/v1/events/{id}",
    tag = "Events",
    summary = "Delete an event",
    params(("id" = u32, Path, description = "Event id")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 409, description = "Event has registrations", body = ErrorResponse),
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<StatusCode, ConsoleError> {
    state.events.delete_event(id).await?;
    state.meetings.discard_schedule(id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event).get(list_events))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}
