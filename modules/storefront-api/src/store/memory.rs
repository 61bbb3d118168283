use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use storefront_common::{NewReview, Review, ReviewPatch};

use super::{ReviewStore, StoreError};

/// In-process review store. Rows are lost on restart.
#[derive(Default)]
pub struct MemoryReviewStore {
    reviews: RwLock<Vec<Review>>,
}

impl MemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: RwLock::new(reviews),
        }
    }
}

fn newest_first<'a>(reviews: impl Iterator<Item = &'a Review>, limit: usize) -> Vec<Review> {
    let mut out: Vec<Review> = reviews.cloned().collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out.truncate(limit);
    out
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn list_approved(
        &self,
        product_id: &str,
        limit: usize,
    ) -> Result<Vec<Review>, StoreError> {
        let reviews = self.reviews.read().await;
        Ok(newest_first(
            reviews
                .iter()
                .filter(|r| r.approved && r.product_id.as_deref() == Some(product_id)),
            limit,
        ))
    }

    async fn list_all(&self, limit: usize) -> Result<Vec<Review>, StoreError> {
        let reviews = self.reviews.read().await;
        Ok(newest_first(reviews.iter(), limit))
    }

    async fn create(&self, review: NewReview) -> Result<Review, StoreError> {
        let review = Review {
            id: Uuid::new_v4().to_string(),
            author: review.author,
            content: review.content,
            rating: review.rating,
            created_at: Utc::now(),
            product_id: Some(review.product_id),
            approved: false,
        };
        self.reviews.write().await.push(review.clone());
        Ok(review)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut reviews = self.reviews.write().await;
        let before = reviews.len();
        reviews.retain(|r| r.id != id);
        if reviews.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn update(&self, id: &str, patch: &ReviewPatch) -> Result<Review, StoreError> {
        let mut reviews = self.reviews.write().await;
        let review = reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;
        patch.apply(review);
        Ok(review.clone())
    }
}
