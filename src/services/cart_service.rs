use uuid::Uuid;
use validator::Validate;

use crate::{
    cart::{CapturedLink, CartStore, MemoryStorage},
    dto::cart::{CartItemRequest, CartLineView, CartSummary, CheckoutLink, CheckoutRequest},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Most distinct laptops a single cart request may carry.
pub const MAX_CART_LINES: usize = 50;

/// Folds repeated ids into one entry, keeping first-seen order.
fn merge_items(items: &[CartItemRequest]) -> Vec<(Uuid, u32)> {
    let mut merged: Vec<(Uuid, u32)> = Vec::new();
    for item in items {
        match merged.iter_mut().find(|(id, _)| *id == item.laptop_id) {
            Some((_, quantity)) => *quantity = quantity.saturating_add(item.quantity),
            None => merged.push((item.laptop_id, item.quantity)),
        }
    }
    merged
}

/// Replays the client's cart against the live catalog so stock caps and
/// prices are current. Ids that no longer resolve to a sellable laptop are
/// reported back instead of failing the request.
async fn rebuild_cart(
    state: &AppState,
    items: &[CartItemRequest],
) -> AppResult<(CartStore<MemoryStorage>, Vec<Uuid>)> {
    let merged = merge_items(items);
    if merged.len() > MAX_CART_LINES {
        return Err(AppError::BadRequest(format!(
            "a cart holds at most {MAX_CART_LINES} different laptops"
        )));
    }

    let mut store = CartStore::open(MemoryStorage::new(), state.checkout.clone());
    let mut unavailable = Vec::new();
    for (laptop_id, quantity) in merged {
        let added = match state.catalog.get(laptop_id).await? {
            Some(laptop) => store.add_to_cart(&laptop, quantity),
            None => 0,
        };
        if added == 0 && quantity > 0 {
            unavailable.push(laptop_id);
        }
    }
    Ok((store, unavailable))
}

fn summarize(store: &CartStore<MemoryStorage>, unavailable: Vec<Uuid>) -> CartSummary {
    CartSummary {
        items: store.lines().iter().map(CartLineView::from).collect(),
        total: store.cart_total(),
        item_count: store.item_count(),
        unavailable,
    }
}

pub async fn quote(
    state: &AppState,
    items: Vec<CartItemRequest>,
) -> AppResult<ApiResponse<CartSummary>> {
    let (store, unavailable) = rebuild_cart(state, &items).await?;
    Ok(ApiResponse::success(
        "Cart",
        summarize(&store, unavailable),
        Some(Meta::empty()),
    ))
}

pub async fn checkout(
    state: &AppState,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<CheckoutLink>> {
    payload.customer.validate()?;
    let (store, unavailable) = rebuild_cart(state, &payload.items).await?;
    if !unavailable.is_empty() {
        tracing::info!(?unavailable, "checkout skipped unavailable laptops");
    }

    let mut link = CapturedLink::default();
    store.checkout(&payload.customer, &mut link)?;
    let url = link
        .into_url()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("checkout produced no link")))?;

    tracing::info!(
        items = store.item_count(),
        total = store.cart_total(),
        "checkout hand-off prepared"
    );
    Ok(ApiResponse::success(
        "Checkout",
        CheckoutLink {
            url,
            message: store.checkout_message(&payload.customer),
            total: store.cart_total(),
        },
        Some(Meta::empty()),
    ))
}
