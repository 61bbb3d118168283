pub mod admin;
pub mod reviews;

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use storefront_common::{ProductHit, SyntheticRecord};
use storefront_engine::{
    aggregate_rating, mask_surname, search, seeded::generate_now, Profile, SearchLimits,
};

use crate::error::ApiError;
use crate::AppState;

/// Count hint passed to the testimonial profile.
pub const TESTIMONIAL_COUNT_HINT: usize = 12;

// --- Query structs ---

#[derive(Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
    limit: Option<String>,
}

#[derive(Deserialize)]
pub struct TestimonialsQuery {
    seed: Option<String>,
}

// --- Helpers ---

/// Parse a raw `limit` parameter. Blank means "use the default"; anything
/// that is not a finite number is a validation error.
fn parse_limit(raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n.trunc() as i64)),
        _ => Err(ApiError::Validation("invalid_limit")),
    }
}

// --- Handlers ---

pub async fn api_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError> {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return Ok(Json(json!({ "products": [] })));
    }

    let limit = SearchLimits::default().resolve(parse_limit(params.limit.as_deref())?);
    let products: Vec<ProductHit> = search(&query, &state.catalog, limit as i64)
        .into_iter()
        .map(|item| {
            let agg = aggregate_rating(&item.id);
            ProductHit::from_item(item).with_rating(agg.rating, agg.count)
        })
        .collect();

    Ok(Json(json!({ "products": products })))
}

pub async fn api_testimonials(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TestimonialsQuery>,
) -> Json<Value> {
    let seed = params
        .seed
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| state.config.testimonial_seed.clone());

    let testimonials: Vec<SyntheticRecord> =
        generate_now(Profile::Testimonial, &seed, TESTIMONIAL_COUNT_HINT)
            .into_iter()
            .map(|mut t| {
                t.author = mask_surname(&t.author);
                t
            })
            .collect();

    Json(json!({ "testimonials": testimonials }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_parsing() {
        assert_eq!(parse_limit(None).unwrap(), None);
        assert_eq!(parse_limit(Some("  ")).unwrap(), None);
        assert_eq!(parse_limit(Some("6")).unwrap(), Some(6));
        assert_eq!(parse_limit(Some("2.9")).unwrap(), Some(2));
        assert_eq!(parse_limit(Some("-3")).unwrap(), Some(-3));
        assert!(parse_limit(Some("abc")).is_err());
        assert!(parse_limit(Some("NaN")).is_err());
    }
}
