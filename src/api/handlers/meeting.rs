//! Meeting request and deal handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use super::today;
use crate::api::dto::{
    CreateMeetingRequest, DealRequest, ListResponse, MeetingQuery, MeetingStatusRequest,
    PaginationParams, paginate,
};
use crate::app_state::AppState;
use crate::domain::{Deal, MeetingId, MeetingRequest};
use crate::error::{ConsoleError, ErrorResponse};

/// `POST /meetings` — Request a meeting with a confirmed company.
///
/// # Errors
///
/// Returns [`ConsoleError::RuleViolation`] if the requested company is not
/// confirmed for the same event.
#[utoipa::path(
    post,
    path = "/api/v1/meetings",
    tag = "Meetings",
    summary = "Request a meeting",
    request_body = CreateMeetingRequest,
    responses(
        (status = 201, description = "Meeting requested", body = MeetingRequest),
        (status = 404, description = "Registration not found", body = ErrorResponse),
        (status = 422, description = "Requested company not available", body = ErrorResponse),
    )
)]
pub async fn create_meeting(
    State(state): State<AppState>,
    Json(req): Json<CreateMeetingRequest>,
) -> Result<impl IntoResponse, ConsoleError> {
    let meeting = state
        .meetings
        .request_meeting(req.attendance_id, req.requested_company_id, today())
        .await?;
    Ok((StatusCode::CREATED, Json(meeting)))
}

/// `GET /meetings` — List meeting requests.
#[utoipa::path(
    get,
    path = "/api/v1/meetings",
    tag = "Meetings",
    summary = "List meeting requests",
    params(MeetingQuery, PaginationParams),
    responses(
        (status = 200, description = "Paginated meeting requests", body = ListResponse<MeetingRequest>),
    )
)]
pub async fn list_meetings(
    State(state): State<AppState>,
    Query(query): Query<MeetingQuery>,
    Query(params): Query<PaginationParams>,
) -> Json<ListResponse<MeetingRequest>> {
    Json(paginate(
        state.meetings.list_meetings(query.attendance_id).await,
        &params,
    ))
}

/// `GET /meetings/negotiable` — Concluded meetings open for deals.
#[utoipa::path(
    get,
    path = "/api/v1/meetings/negotiable",
    tag = "Meetings",
    summary = "Meetings available for negotiation",
    responses(
        (status = 200, description = "Concluded meetings", body = Vec<MeetingRequest>),
    )
)]
pub async fn negotiable_meetings(State(state): State<AppState>) -> Json<Vec<MeetingRequest>> {
    Json(state.meetings.negotiable_meetings().await)
}

/// `GET /meetings/{id}` — Get one meeting request.
///
/// # Errors
///
/// Returns [`ConsoleError::NotFound`] if it does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/meetings/{id}",
    tag = "Meetings",
    summary = "Get a meeting request",
    params(("id" = u32, Path, description = "Meeting id")),
    responses(
        (status = 200, description = "Meeting request", body = MeetingRequest),
        (status = 404, description = "Meeting not found", body = ErrorResponse),
    )
)]
pub async fn get_meeting(
    State(state): State<AppState>,
    Path(id): Path<MeetingId>,
) -> Result<Json<MeetingRequest>, ConsoleError> {
    Ok(Json(state.meetings.get_meeting(id).await?))
}

/// `PUT /meetings/{id}/status` — Conclude or cancel a meeting.
///
/// # Errors
///
/// Returns [`ConsoleError::Conflict`] when reopening a meeting with deals.
#[utoipa::path(
    put,
    path = "/api/v1/meetings/{id}/status",
    tag = "Meetings",
    summary = "Change meeting status",
    params(("id" = u32, Path, description = "Meeting id")),
    request_body = MeetingStatusRequest,
    responses(
        (status = 200, description = "Meeting updated", body = MeetingRequest),
        (status = 404, description = "Meeting not found", body = ErrorResponse),
        (status = 409, description = "Meeting has deals", body = ErrorResponse),
    )
)]
pub async fn set_meeting_status(
    State(state): State<AppState>,
    Path(id): Path<MeetingId>,
    Json(req): Json<MeetingStatusRequest>,
) -> Result<Json<MeetingRequest>, ConsoleError> {
    Ok(Json(state.meetings.set_meeting_status(id, req.status).await?))
}

/// `GET /meetings/{id}/deals` — Deals of one meeting.
///
/// # Errors
///
/// Returns [`ConsoleError::NotFound`] if the meeting does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/meetings/{id}/deals",
    tag = "Deals",
    summary = "List deals of a meeting",
    params(("id" = u32, Path, description = "Meeting id")),
    responses(
        (status = 200, description = "Deals", body = Vec<Deal>),
        (status = 404, description = "Meeting not found", body = ErrorResponse),
    )
)]
pub async fn meeting_deals(
    State(state): State<AppState>,
    Path(id): Path<MeetingId>,
) -> Result<Json<Vec<Deal>>, ConsoleError> {
    Ok(Json(state.meetings.deals_for_meeting(id).await?))
}

/// `POST /deals` — Record a deal on a concluded meeting.
///
/// # Errors
///
/// Returns [`ConsoleError::RuleViolation`] if the meeting is not concluded.
#[utoipa::path(
    post,
    path = "/api/v1/deals",
    tag = "Deals",
    summary = "Record a deal",
    request_body = DealRequest,
    responses(
        (status = 201, description = "Deal recorded", body = Deal),
        (status = 400, description = "Invalid deal", body = ErrorResponse),
        (status = 404, description = "Meeting not found", body = ErrorResponse),
        (status = 422, description = "Meeting not concluded", body = ErrorResponse),
    )
)]
pub async fn create_deal(
    State(state): State<AppState>,
    Json(req): Json<DealRequest>,
) -> Result<impl IntoResponse, ConsoleError> {
    let deal = state.meetings.record_deal(req.into(), today()).await?;
    Ok((StatusCode::CREATED, Json(deal)))
}

/// `GET /deals` — List every deal.
#[utoipa::path(
    get,
    path = "/api/v1/deals",
    tag = "Deals",
    summary = "List deals",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated deal list", body = ListResponse<Deal>),
    )
)]
pub async fn list_deals(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Json<ListResponse<Deal>> {
    Json(paginate(state.meetings.list_deals().await, &params))
}

/// Meeting and deal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/meetings", post(create_meeting).get(list_meetings))
        .route("/meetings/negotiable", get(negotiable_meetings))
        .route("/meetings/{id}", get(get_meeting))
        .route("/meetings/{id}/status", put(set_meeting_status))
        .route("/meetings/{id}/deals", get(meeting_deals))
        .route("/deals", post(create_deal).get(list_deals))
}
