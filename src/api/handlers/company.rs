//! Company CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CompanyRequest, ListResponse, PaginationParams, paginate};
use crate::app_state::AppState;
use crate::domain::{Company, CompanyId, Product};
use crate::error::{ConsoleError, ErrorResponse};

/// `POST /companies` — Register a company.
///
/// # Errors
///
/// Returns [`ConsoleError::InvalidRequest`] for a blank name.
#[utoipa::path(
    post,
    path = "/api/v1/companies",
    tag = "Companies",
    summary = "Register a company",
    description = "Creates a company and assigns its `EMP###` code.",
    request_body = CompanyRequest,
    responses(
        (status = 201, description = "Company created", body = Company),
        (status = 400, description = "Invalid company", body = ErrorResponse),
    )
)]
pub async fn create_company(
    State(state): State<AppState>,
    Json(req): Json<CompanyRequest>,
) -> Result<impl IntoResponse, ConsoleError> {
    let company = state.catalog.create_company(req.into()).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// `GET /companies` — List companies.
#[utoipa::path(
    get,
    path = "/api/v1/companies",
    tag = "Companies",
    summary = "List companies",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated company list", body = ListResponse<Company>),
    )
)]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Json<ListResponse<Company>> {
    Json(paginate(state.catalog.list_companies().await, &params))
}

/// `GET /companies/{id}` — Get one company.
///
/// # Errors
///
/// Returns [`ConsoleError::NotFound`] if the company does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/companies/{id}",
    tag = "Companies",
    summary = "Get a company",
    params(("id" = u32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company", body = Company),
        (status = 404, description = "Company not found", body = ErrorResponse),
    )
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<CompanyId>,
) -> Result<Json<Company>, ConsoleError> {
    Ok(Json(state.catalog.get_company(id).await?))
}

/// `PUT /companies/{id}` — Replace a company's fields.
///
/// # Errors
///
/// Returns [`ConsoleError::InvalidRequest`] or [`ConsoleError::NotFound`].
#[utoipa::path(
    put,
    path = "/api/v1/companies/{id}",
    tag = "Companies",
    summary = "Update a company",
    description = "Replaces every editable field; the `EMP###` code never changes.",
    params(("id" = u32, Path, description = "Company id")),
    request_body = CompanyRequest,
    responses(
        (status = 200, description = "Company updated", body = Company),
        (status = 400, description = "Invalid company", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse),
    )
)]
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<CompanyId>,
    Json(req): Json<CompanyRequest>,
) -> Result<Json<Company>, ConsoleError> {
    Ok(Json(state.catalog.update_company(id, req.into()).await?))
}

/// `DELETE /companies/{id}` — Remove a company.
///
/// # Errors
///
/// Returns [`ConsoleError::Conflict`] while it has products or registrations.
#[utoipa::path(
    delete,
    path = "/api/v1/companies/{id}",
    tag = "Companies",
    summary = "Delete a company",
    params(("id" = u32, Path, description = "Company id")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "Company not found", body = ErrorResponse),
        (status = 409, description = "Company has products or registrations", body = ErrorResponse),
    )
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<CompanyId>,
) -> Result<StatusCode, ConsoleError> {
    state.catalog.delete_company(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /companies/{id}/products` — A company's catalog.
///
/// # Errors
///
/// Returns [`ConsoleError::NotFound`] if the company does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/companies/{id}/products",
    tag = "Companies",
    summary = "List a company's products",
    params(("id" = u32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Products of the company", body = Vec<Product>),
        (status = 404, description = "Company not found", body = ErrorResponse),
    )
)]
pub async fn company_products(
    State(state): State<AppState>,
    Path(id): Path<CompanyId>,
) -> Result<Json<Vec<Product>>, ConsoleError> {
    Ok(Json(state.catalog.products_of(id).await?))
}

/// Company routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/companies", post(create_company).get(list_companies))
        .route(
            "/companies/{id}",
            get(get_company).put(update_company).delete(delete_company),
        )
        .route("/companies/{id}/products", get(company_products))
}
