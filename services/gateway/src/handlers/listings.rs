use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use tracing::error;
use types::prelude::*;

use crate::error::AppError;
use crate::models::{CreateListingRequest, ListingResponse, ListingsQuery, ListingsResponse};
use crate::state::AppState;

pub async fn get_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingsQuery>,
) -> Result<(StatusCode, Json<ListingsResponse>), AppError> {
    let mut page = PageRequest::from_raw(query.page_num.as_deref(), query.page_size.as_deref());

    // Optional owner filter; blank means unfiltered
    if let Some(raw) = query.user_id.as_deref().filter(|raw| !raw.trim().is_empty()) {
        let user_id = raw
            .parse::<UserId>()
            .ok()
            .filter(|id| id.is_valid())
            .ok_or_else(|| AppError::BadRequest("user_id filter must be a positive integer".into()))?;
        page = page.with_user(user_id);
    }

    match state.aggregator.enriched_page(page).await {
        Ok(listings) => Ok((StatusCode::OK, Json(ListingsResponse::success(listings)))),
        Err(e) => {
            error!(error = %e, "Error getting listings from Listing Service");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ListingsResponse::failure("Failed to retrieve listings")),
            ))
        }
    }
}

pub async fn create_listing(
    State(state): State<AppState>,
    payload: Result<Json<CreateListingRequest>, JsonRejection>,
) -> Result<Json<ListingResponse>, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::BadRequest("Invalid request body".into()))?;

    let new_listing = NewListing::new(payload.user_id, &payload.listing_type, payload.price)?;

    let listing = state
        .listings
        .create_listing(&new_listing)
        .await
        .inspect_err(|e| error!(error = %e, "Error creating listing via Listing Service"))
        .map_err(|e| AppError::upstream("Failed to create listing", e))?;

    Ok(Json(ListingResponse { listing }))
}
