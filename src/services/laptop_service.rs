use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::laptops::{BrandList, CreateLaptopRequest, LaptopList, SpecSummary, UpdateLaptopRequest},
    error::{AppError, AppResult},
    models::{Brand, Laptop, POPULAR_BRANDS},
    response::{ApiResponse, Meta, paginate},
    routes::params::{LaptopQuery, LimitQuery},
    state::AppState,
};

pub async fn list_laptops(
    state: &AppState,
    query: LaptopQuery,
) -> AppResult<ApiResponse<LaptopList>> {
    let filter = query.to_filter();
    let matching = state.catalog.list(&filter).await?;
    let (items, meta) = paginate(matching, &query.pagination());
    Ok(ApiResponse::success(
        "Laptops",
        LaptopList { items },
        Some(meta),
    ))
}

pub async fn get_laptop(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Laptop>> {
    let laptop = state.catalog.get(id).await?.ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Laptop", laptop, None))
}

pub async fn featured(state: &AppState, query: LimitQuery) -> AppResult<ApiResponse<LaptopList>> {
    let items = state.catalog.featured(query.normalize()).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Featured laptops",
        LaptopList { items },
        Some(meta),
    ))
}

pub async fn new_arrivals(
    state: &AppState,
    query: LimitQuery,
) -> AppResult<ApiResponse<LaptopList>> {
    let items = state.catalog.new_arrivals(query.normalize()).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "New arrivals",
        LaptopList { items },
        Some(meta),
    ))
}

pub async fn brands(state: &AppState) -> AppResult<ApiResponse<BrandList>> {
    let items = Brand::list(state.catalog.brands().await?);
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Brands", BrandList { items }, Some(meta)))
}

pub fn popular_brands() -> ApiResponse<BrandList> {
    let items = Brand::list(POPULAR_BRANDS);
    let meta = Meta::total(items.len());
    ApiResponse::success("Popular brands", BrandList { items }, Some(meta))
}

pub async fn summarize(state: &AppState, id: Uuid) -> AppResult<ApiResponse<SpecSummary>> {
    let laptop = state.catalog.get(id).await?.ok_or(AppError::NotFound)?;
    let summary = state
        .summarizer
        .summarize(&laptop.specs)
        .await
        .inspect_err(|err| tracing::warn!(laptop_id = %id, error = %err, "spec summary failed"))?;
    Ok(ApiResponse::success(
        "Summary",
        SpecSummary {
            laptop_id: id,
            summary,
        },
        None,
    ))
}

pub async fn admin_list(state: &AppState) -> AppResult<ApiResponse<LaptopList>> {
    let items = state.catalog.list(&Default::default()).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Laptops",
        LaptopList { items },
        Some(meta),
    ))
}

pub async fn create_laptop(
    state: &AppState,
    payload: CreateLaptopRequest,
) -> AppResult<ApiResponse<Laptop>> {
    payload.validate()?;
    let laptop = state.catalog.insert(payload.into()).await?;
    tracing::info!(laptop_id = %laptop.id, name = %laptop.name, "laptop created");
    Ok(ApiResponse::success(
        "Laptop created",
        laptop,
        Some(Meta::empty()),
    ))
}

pub async fn update_laptop(
    state: &AppState,
    id: Uuid,
    payload: UpdateLaptopRequest,
) -> AppResult<ApiResponse<Laptop>> {
    payload.validate()?;
    let laptop = state
        .catalog
        .update(id, payload.into())
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(laptop_id = %id, "laptop updated");
    Ok(ApiResponse::success(
        "Updated",
        laptop,
        Some(Meta::empty()),
    ))
}

pub async fn delete_laptop(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if !state.catalog.delete(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(laptop_id = %id, "laptop deleted");
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
