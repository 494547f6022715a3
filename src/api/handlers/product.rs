//! Product CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{ListResponse, PaginationParams, ProductRequest, paginate};
use crate::app_state::AppState;
use crate::domain::{Product, ProductId};
use crate::error::{ConsoleError, ErrorResponse};

/// `POST /products` — Add a product to a company's catalog.
///
/// # Errors
///
/// Returns [`ConsoleError`] for an invalid draft or unknown company.
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    summary = "Create a product",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid product", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse),
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<impl IntoResponse, ConsoleError> {
    let product = state.catalog.create_product(req.into()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `GET /products` — List every product.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    summary = "List products",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated product list", body = ListResponse<Product>),
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Json<ListResponse<Product>> {
    Json(paginate(state.catalog.list_products().await, &params))
}

/// `GET /products/{id}` — Get one product.
///
/// # Errors
///
/// Returns [`ConsoleError::NotFound`] if the product does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    summary = "Get a product",
    params(("id" = u32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, ConsoleError> {
    Ok(Json(state.catalog.get_product(id).await?))
}

/// `PUT /products/{id}` — Replace a product.
///
/// # Errors
///
/// Returns [`ConsoleError`] for an invalid draft or unknown product or company.
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Products",
    summary = "Update a product",
    params(("id" = u32, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid product", body = ErrorResponse),
        (status = 404, description = "Product or company not found", body = ErrorResponse),
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<Product>, ConsoleError> {
    Ok(Json(state.catalog.update_product(id, req.into()).await?))
}

/// `DELETE /products/{id}` — Remove a product.
///
/// # Errors
///
/// Returns [`ConsoleError::NotFound`] if the product does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    summary = "Delete a product",
    params(("id" = u32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode, ConsoleError> {
    state.catalog.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product).get(list_products))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
