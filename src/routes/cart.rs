use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::cart::{CartQuoteRequest, CartSummary, CheckoutLink, CheckoutRequest},
    error::AppResult,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote_cart))
        .route("/checkout", post(checkout))
}

#[utoipa::path(
    post,
    path = "/api/cart/quote",
    request_body = CartQuoteRequest,
    responses(
        (status = 200, description = "Cart re-priced and stock-capped against the catalog", body = ApiResponse<CartSummary>),
    ),
    tag = "Cart"
)]
pub async fn quote_cart(
    State(state): State<AppState>,
    Json(payload): Json<CartQuoteRequest>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    let resp = cart_service::quote(&state, payload.items).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "WhatsApp link carrying the order message", body = ApiResponse<CheckoutLink>),
        (status = 400, description = "Cart is empty"),
        (status = 422, description = "Invalid customer details"),
    ),
    tag = "Cart"
)]
pub async fn checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<CheckoutLink>>> {
    let resp = cart_service::checkout(&state, payload).await?;
    Ok(Json(resp))
}
