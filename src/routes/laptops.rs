use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::laptops::{BrandList, LaptopList, SpecSummary},
    error::AppResult,
    models::Laptop,
    response::ApiResponse,
    routes::params::{LaptopQuery, LimitQuery},
    services::laptop_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_laptops))
        .route("/featured", get(featured_laptops))
        .route("/new-arrivals", get(new_arrivals))
        .route("/{id}", get(get_laptop))
        .route("/{id}/summary", get(spec_summary))
}

pub fn brands_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_brands))
        .route("/popular", get(popular_brands))
}

#[utoipa::path(
    get,
    path = "/api/laptops",
    params(LaptopQuery),
    responses(
        (status = 200, description = "Filtered catalog, newest first", body = ApiResponse<LaptopList>),
        (status = 400, description = "Malformed query"),
    ),
    tag = "Laptops"
)]
pub async fn list_laptops(
    State(state): State<AppState>,
    Query(query): Query<LaptopQuery>,
) -> AppResult<Json<ApiResponse<LaptopList>>> {
    let resp = laptop_service::list_laptops(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/laptops/featured",
    params(LimitQuery),
    responses(
        (status = 200, description = "Featured laptops", body = ApiResponse<LaptopList>)
    ),
    tag = "Laptops"
)]
pub async fn featured_laptops(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<ApiResponse<LaptopList>>> {
    let resp = laptop_service::featured(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/laptops/new-arrivals",
    params(LimitQuery),
    responses(
        (status = 200, description = "Newest laptops flagged as new arrivals", body = ApiResponse<LaptopList>)
    ),
    tag = "Laptops"
)]
pub async fn new_arrivals(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<ApiResponse<LaptopList>>> {
    let resp = laptop_service::new_arrivals(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/laptops/{id}",
    params(
        ("id" = Uuid, Path, description = "Laptop ID")
    ),
    responses(
        (status = 200, description = "Get laptop", body = ApiResponse<Laptop>),
        (status = 404, description = "Laptop not found"),
    ),
    tag = "Laptops"
)]
pub async fn get_laptop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Laptop>>> {
    let resp = laptop_service::get_laptop(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/laptops/{id}/summary",
    params(
        ("id" = Uuid, Path, description = "Laptop ID")
    ),
    responses(
        (status = 200, description = "AI summary of the laptop's specs", body = ApiResponse<SpecSummary>),
        (status = 404, description = "Laptop not found"),
        (status = 502, description = "Summary service failed or is not configured"),
    ),
    tag = "Laptops"
)]
pub async fn spec_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<SpecSummary>>> {
    let resp = laptop_service::summarize(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "Brands present in the catalog", body = ApiResponse<BrandList>)
    ),
    tag = "Laptops"
)]
pub async fn list_brands(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BrandList>>> {
    let resp = laptop_service::brands(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/brands/popular",
    responses(
        (status = 200, description = "Brands promoted on the storefront", body = ApiResponse<BrandList>)
    ),
    tag = "Laptops"
)]
pub async fn popular_brands() -> Json<ApiResponse<BrandList>> {
    Json(laptop_service::popular_brands())
}
