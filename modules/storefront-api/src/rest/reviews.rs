use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use storefront_common::{validate_rating, NewReview};
use storefront_engine::{seeded::generate_now, Profile};

use crate::auth::Principal;
use crate::error::ApiError;
use crate::store::PUBLIC_REVIEW_LIMIT;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsQuery {
    product_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    product_id: Option<String>,
    content: Option<String>,
    rating: Option<serde_json::Value>,
}

/// Approved reviews for a product. When the store has none, or cannot be
/// reached, the product's seeded demo reviews are returned instead so the
/// page never renders an error.
pub async fn api_reviews(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewsQuery>,
) -> Result<Response, ApiError> {
    let product_id = params
        .product_id
        .filter(|p| !p.trim().is_empty())
        .ok_or(ApiError::Validation("product_id_required"))?;

    match state.store.list_approved(&product_id, PUBLIC_REVIEW_LIMIT).await {
        Ok(reviews) if !reviews.is_empty() => {
            Ok(Json(json!({ "reviews": reviews })).into_response())
        }
        Ok(_) => {
            debug!(product_id = %product_id, "No approved reviews, serving seeded fallback");
            let reviews = generate_now(Profile::Review, &product_id, 0);
            Ok(Json(json!({ "reviews": reviews, "fallback": true })).into_response())
        }
        Err(e) => {
            warn!(
                error = %e,
                product_id = %product_id,
                "Review store unavailable, serving seeded fallback"
            );
            let reviews = generate_now(Profile::Review, &product_id, 0);
            Ok(Json(json!({
                "reviews": reviews,
                "fallback": true,
                "error": "db_unavailable",
            }))
            .into_response())
        }
    }
}

/// Submit a review. Reviews are stored unapproved and only become public
/// after moderation.
pub async fn api_create_review(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    body: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::Validation("invalid_payload"))?;

    let product_id = body.product_id.filter(|p| !p.trim().is_empty());
    let content = body
        .content
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    let rating = body.rating.as_ref().and_then(serde_json::Value::as_i64);

    let (Some(product_id), Some(content), Some(rating)) = (product_id, content, rating) else {
        return Err(ApiError::Validation("invalid_payload"));
    };
    let rating = validate_rating(rating).map_err(|_| ApiError::Validation("rating_out_of_range"))?;

    let review = state
        .store
        .create(NewReview {
            product_id,
            author: principal.display_name(),
            content,
            rating,
        })
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to store review");
            ApiError::from(e)
        })?;

    // Log without content (may contain PII)
    info!(review_id = %review.id, user = %principal.id, rating, "Review submitted for moderation");

    Ok((StatusCode::CREATED, Json(json!({ "review": review }))).into_response())
}
