//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`; system endpoints and
//! the OpenAPI document live at the root.

pub mod dto;
pub mod handlers;

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::error::{ErrorBody, ErrorResponse};

/// OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "rueda-console", description = "Business-round event console API"),
    paths(
        handlers::system::health_handler,
        handlers::system::catalogs_handler,
        handlers::event::create_event,
        handlers::event::list_events,
        handlers::event::get_event,
        handlers::event::update_event,
        handlers::event::delete_event,
        handlers::schedule::generate_schedule,
        handlers::schedule::get_schedule,
        handlers::attendance::register,
        handlers::attendance::list_for_event,
        handlers::attendance::set_status,
        handlers::attendance::available_companies,
        handlers::contact::create_contact,
        handlers::contact::list_contacts,
        handlers::contact::get_contact,
        handlers::contact::update_contact,
        handlers::contact::delete_contact,
        handlers::company::create_company,
        handlers::company::list_companies,
        handlers::company::get_company,
        handlers::company::update_company,
        handlers::company::delete_company,
        handlers::company::company_products,
        handlers::product::create_product,
        handlers::product::list_products,
        handlers::product::get_product,
        handlers::product::update_product,
        handlers::product::delete_product,
        handlers::meeting::create_meeting,
        handlers::meeting::list_meetings,
        handlers::meeting::negotiable_meetings,
        handlers::meeting::get_meeting,
        handlers::meeting::set_meeting_status,
        handlers::meeting::meeting_deals,
        handlers::meeting::create_deal,
        handlers::meeting::list_deals,
    ),
    components(schemas(ErrorResponse, ErrorBody)),
    tags(
        (name = "Events", description = "Business-round events"),
        (name = "Schedules", description = "One-on-one meeting schedules"),
        (name = "Attendance", description = "Company registrations to events"),
        (name = "Contacts", description = "Event contact persons"),
        (name = "Companies", description = "Participating companies"),
        (name = "Products", description = "Company product catalogs"),
        (name = "Meetings", description = "Meeting requests between companies"),
        (name = "Deals", description = "Deals negotiated in concluded meetings"),
        (name = "System", description = "Health and configuration"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_schedule_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/events/{id}/schedule"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
