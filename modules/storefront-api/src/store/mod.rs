// ReviewStore is the only seam between the HTTP handlers and persistence.
// MemoryReviewStore backs local runs and tests; PgReviewStore is used when
// DATABASE_URL is set.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use storefront_common::{NewReview, Review, ReviewPatch};

pub use memory::MemoryReviewStore;
pub use postgres::PgReviewStore;

/// Max approved reviews shown on a product page.
pub const PUBLIC_REVIEW_LIMIT: usize = 50;
/// Max reviews listed in the moderation panel.
pub const ADMIN_REVIEW_LIMIT: usize = 500;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("review not found")]
    NotFound,

    #[error("review store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Approved reviews for one product, newest first.
    async fn list_approved(
        &self,
        product_id: &str,
        limit: usize,
    ) -> Result<Vec<Review>, StoreError>;

    /// Every review regardless of approval, newest first.
    async fn list_all(&self, limit: usize) -> Result<Vec<Review>, StoreError>;

    /// Persist a new, unapproved review.
    async fn create(&self, review: NewReview) -> Result<Review, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    async fn update(&self, id: &str, patch: &ReviewPatch) -> Result<Review, StoreError>;
}
