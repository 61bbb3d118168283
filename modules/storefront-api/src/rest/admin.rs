use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use storefront_common::ReviewPatch;
use storefront_engine::{seeded::generate_now, Profile};

use crate::auth::AdminPrincipal;
use crate::error::ApiError;
use crate::store::{StoreError, ADMIN_REVIEW_LIMIT};
use crate::AppState;

pub const ADMIN_DEMO_SEED: &str = "admin-demo";
pub const ADMIN_DEMO_COUNT: usize = 6;

#[derive(Deserialize)]
pub struct DeleteQuery {
    id: Option<String>,
}

/// Moderation listing. Falls back to the fixed demo set when the store is
/// empty or unreachable so the panel still has rows to show.
pub async fn api_admin_reviews(
    State(state): State<Arc<AppState>>,
    AdminPrincipal(_admin): AdminPrincipal,
) -> Response {
    match state.store.list_all(ADMIN_REVIEW_LIMIT).await {
        Ok(reviews) if !reviews.is_empty() => Json(json!({ "reviews": reviews })).into_response(),
        Ok(_) => demo_reviews().into_response(),
        Err(e) => {
            warn!(error = %e, "Review store unavailable, serving admin demo set");
            demo_reviews().into_response()
        }
    }
}

fn demo_reviews() -> Json<serde_json::Value> {
    let reviews = generate_now(Profile::AdminDemo, ADMIN_DEMO_SEED, ADMIN_DEMO_COUNT);
    Json(json!({ "reviews": reviews, "fallback": true }))
}

pub async fn api_admin_delete_review(
    State(state): State<Arc<AppState>>,
    AdminPrincipal(admin): AdminPrincipal,
    Query(params): Query<DeleteQuery>,
) -> Result<Response, ApiError> {
    let id = params
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or(ApiError::Validation("id_required"))?;

    match state.store.delete(&id).await {
        Ok(()) => {
            info!(review_id = %id, admin = %admin.id, "Review deleted");
            Ok(Json(json!({ "ok": true })).into_response())
        }
        Err(StoreError::NotFound) => {
            Ok((StatusCode::NOT_FOUND, Json(json!({ "ok": false }))).into_response())
        }
        Err(e) => {
            warn!(error = %e, review_id = %id, "Failed to delete review");
            Err(e.into())
        }
    }
}

pub async fn api_admin_update_review(
    State(state): State<Arc<AppState>>,
    AdminPrincipal(admin): AdminPrincipal,
    Path(id): Path<String>,
    body: Result<Json<ReviewPatch>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(patch) = body.map_err(|_| ApiError::Validation("invalid_payload"))?;
    patch
        .validate()
        .map_err(|_| ApiError::Validation("rating_out_of_range"))?;

    let review = state.store.update(&id, &patch).await.map_err(|e| {
        if !matches!(e, StoreError::NotFound) {
            warn!(error = %e, review_id = %id, "Failed to update review");
        }
        ApiError::from(e)
    })?;

    info!(
        review_id = %id,
        admin = %admin.id,
        approved = review.approved,
        "Review updated"
    );
    Ok(Json(json!({ "review": review })).into_response())
}
