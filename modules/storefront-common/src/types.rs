use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

// --- Catalog ---

/// A sellable product as it appears in an imported catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Minor currency units (kuruş).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Slug of the category group the loader found this item in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            brand: None,
            price: None,
            image: None,
            category: None,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }
}

/// Search result projection returned by `GET /api/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductHit {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub slug: String,
    /// Star average shown beside the hit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(
        default,
        rename = "ratingCount",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating_count: Option<u32>,
}

impl ProductHit {
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            brand: item.brand.clone(),
            price: item.price,
            image: item.image.clone(),
            slug: crate::slug::build_slug(item),
            rating: None,
            rating_count: None,
        }
    }

    pub fn with_rating(mut self, rating: f64, count: u32) -> Self {
        self.rating = Some(rating);
        self.rating_count = Some(count);
        self
    }
}

// --- Reviews ---

/// A persisted customer review. Only `approved` reviews are publicly visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub approved: bool,
}

/// Input for creating a review. Created reviews always start unapproved.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub product_id: String,
    pub author: String,
    pub content: String,
    pub rating: i64,
}

/// Partial update applied by moderators.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewPatch {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub approved: Option<bool>,
}

impl ReviewPatch {
    pub fn validate(&self) -> Result<(), StorefrontError> {
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }

    pub fn apply(&self, review: &mut Review) {
        if let Some(content) = &self.content {
            review.content = content.clone();
        }
        if let Some(rating) = self.rating {
            review.rating = rating;
        }
        if let Some(approved) = self.approved {
            review.approved = approved;
        }
    }
}

pub fn validate_rating(rating: i64) -> Result<i64, StorefrontError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(StorefrontError::Validation(format!(
            "rating {rating} outside {MIN_RATING}..={MAX_RATING}"
        )))
    }
}

// --- Synthetic content ---

/// A generated placeholder review or testimonial. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticRecord {
    pub id: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub content: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn catalog_item_defaults_missing_optionals() {
        let item: CatalogItem = serde_json::from_value(json!({ "id": "p-1" })).unwrap();
        assert_eq!(item.title, "");
        assert!(item.brand.is_none());
        assert!(item.price.is_none());
    }

    #[test]
    fn catalog_item_requires_id() {
        let parsed = serde_json::from_value::<CatalogItem>(json!({ "title": "Kablo" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn review_serializes_camel_case() {
        let review = Review {
            id: "r1".into(),
            author: "Ayşe".into(),
            content: "Güzel".into(),
            rating: 5,
            created_at: Utc::now(),
            product_id: Some("p-1".into()),
            approved: true,
        };
        let value = serde_json::to_value(&review).unwrap();
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["productId"], "p-1");
    }

    #[test]
    fn product_hit_rating_fields_are_optional() {
        let item = CatalogItem::new("ip13-bat", "iPhone 13 Batarya");
        let bare = serde_json::to_value(ProductHit::from_item(&item)).unwrap();
        assert!(bare.get("rating").is_none());
        assert!(bare.get("ratingCount").is_none());

        let rated = ProductHit::from_item(&item).with_rating(4.6, 237);
        let rated = serde_json::to_value(rated).unwrap();
        assert_eq!(rated["rating"], 4.6);
        assert_eq!(rated["ratingCount"], 237);
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut review = Review {
            id: "r1".into(),
            author: "Can".into(),
            content: "eski".into(),
            rating: 3,
            created_at: Utc::now(),
            product_id: None,
            approved: false,
        };
        let patch = ReviewPatch {
            approved: Some(true),
            ..Default::default()
        };
        patch.apply(&mut review);
        assert!(review.approved);
        assert_eq!(review.content, "eski");
        assert_eq!(review.rating, 3);
    }

    #[test]
    fn patch_rejects_out_of_range_rating() {
        let patch = ReviewPatch {
            rating: Some(9),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
