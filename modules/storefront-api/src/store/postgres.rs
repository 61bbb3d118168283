use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use storefront_common::{NewReview, Review, ReviewPatch};

use super::{ReviewStore, StoreError};

type ReviewRow = (String, String, String, i32, DateTime<Utc>, Option<String>, bool);

const REVIEW_COLUMNS: &str = "id, author, content, rating, created_at, product_id, approved";

/// Postgres-backed review store.
#[derive(Clone)]
pub struct PgReviewStore {
    pool: PgPool,
}

impl PgReviewStore {
    /// Build a store without touching the database. Connection failures show
    /// up per query, so handlers can fall back instead of the server refusing
    /// to start.
    pub fn connect_lazy(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reviews (
                id          TEXT PRIMARY KEY,
                author      TEXT NOT NULL,
                content     TEXT NOT NULL,
                rating      INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
                created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                product_id  TEXT,
                approved    BOOLEAN NOT NULL DEFAULT FALSE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS reviews_product_created_idx
                ON reviews (product_id, created_at DESC)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn row_to_review(row: ReviewRow) -> Review {
    let (id, author, content, rating, created_at, product_id, approved) = row;
    Review {
        id,
        author,
        content,
        rating: i64::from(rating),
        created_at,
        product_id,
        approved,
    }
}

fn limit_param(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn list_approved(
        &self,
        product_id: &str,
        limit: usize,
    ) -> Result<Vec<Review>, StoreError> {
        let rows = sqlx::query_as::<_, ReviewRow>(&format!(
            r#"
            SELECT {REVIEW_COLUMNS}
            FROM reviews
            WHERE product_id = $1 AND approved = TRUE
            ORDER BY created_at DESC
            LIMIT $2
            "#
        ))
        .bind(product_id)
        .bind(limit_param(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_review).collect())
    }

    async fn list_all(&self, limit: usize) -> Result<Vec<Review>, StoreError> {
        let rows = sqlx::query_as::<_, ReviewRow>(&format!(
            r#"
            SELECT {REVIEW_COLUMNS}
            FROM reviews
            ORDER BY created_at DESC
            LIMIT $1
            "#
        ))
        .bind(limit_param(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_review).collect())
    }

    async fn create(&self, review: NewReview) -> Result<Review, StoreError> {
        let rating = i32::try_from(review.rating)
            .map_err(|_| {
                StoreError::Unavailable(format!("rating {} does not fit", review.rating))
            })?;

        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            r#"
            INSERT INTO reviews (id, author, content, rating, product_id, approved)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING {REVIEW_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4().to_string())
        .bind(&review.author)
        .bind(&review.content)
        .bind(rating)
        .bind(&review.product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_review(row))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn update(&self, id: &str, patch: &ReviewPatch) -> Result<Review, StoreError> {
        let rating = patch.rating.map(i32::try_from).transpose().map_err(|_| {
            StoreError::Unavailable(format!("rating {:?} does not fit", patch.rating))
        })?;

        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            r#"
            UPDATE reviews
            SET content  = COALESCE($2, content),
                rating   = COALESCE($3, rating),
                approved = COALESCE($4, approved)
            WHERE id = $1
            RETURNING {REVIEW_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.content.as_deref())
        .bind(rating)
        .bind(patch.approved)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_review).ok_or(StoreError::NotFound)
    }
}
