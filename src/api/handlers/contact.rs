//! Contact CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{ContactRequest, ListResponse, PaginationParams, paginate};
use crate::app_state::AppState;
use crate::domain::{Contact, ContactId};
use crate::error::{ConsoleError, ErrorResponse};

/// `POST /contacts` — Create a contact.
///
/// # Errors
///
/// Returns [`ConsoleError::InvalidRequest`] for a blank name or bad e-mail.
#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    tag = "Contacts",
    summary = "Create a contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Contact created", body = Contact),
        (status = 400, description = "Invalid contact", body = ErrorResponse),
    )
)]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<impl IntoResponse, ConsoleError> {
    let contact = state.catalog.create_contact(req.into()).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// `GET /contacts` — List contacts.
#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    tag = "Contacts",
    summary = "List contacts",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated contact list", body = ListResponse<Contact>),
    )
)]
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Json<ListResponse<Contact>> {
    Json(paginate(state.catalog.list_contacts().await, &params))
}

/// `GET /contacts/{id}` — Get one contact.
///
/// # Errors
///
/// Returns [`ConsoleError::NotFound`] if the contact does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/contacts/{id}",
    tag = "Contacts",
    summary = "Get a contact",
    params(("id" = u32, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact", body = Contact),
        (status = 404, description = "Contact not found", body = ErrorResponse),
    )
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<ContactId>,
) -> Result<Json<Contact>, ConsoleError> {
    Ok(Json(state.catalog.get_contact(id).await?))
}

/// `PUT /contacts/{id}` — Replace a contact.
///
/// # Errors
///
/// Returns [`ConsoleError::InvalidRequest`] or [`ConsoleError::NotFound`].
#[utoipa::path(
    put,
    path = "/api/v1/contacts/{id}",
    tag = "Contacts",
    summary = "Update a contact",
    params(("id" = u32, Path, description = "Contact id")),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = Contact),
        (status = 400, description = "Invalid contact", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
    )
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<ContactId>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<Contact>, ConsoleError> {
    Ok(Json(state.catalog.update_contact(id, req.into()).await?))
}

/// `DELETE /contacts/{id}` — Remove a contact no event uses.
///
/// # Errors
///
/// Returns [`ConsoleError::Conflict`] while an event refers to the contact.
#[utoipa::path(
    delete,
    path = "/api/v1/contacts/{id}",
    tag = "Contacts",
    summary = "Delete a contact",
    params(("id" = u32, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 409, description = "Contact assigned to an event", body = ErrorResponse),
    )
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<ContactId>,
) -> Result<StatusCode, ConsoleError> {
    state.catalog.delete_contact(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Contact routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", post(create_contact).get(list_contacts))
        .route(
            "/contacts/{id}",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}
