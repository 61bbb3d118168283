//! Pure ranking and content-generation logic behind the storefront API.
//!
//! - **`search`**: scores catalog items against a free-text query and returns
//!   the top matches in a deterministic order.
//! - **`seeded`**: reproducible synthetic reviews, testimonials and product
//!   ratings derived from a string seed, used when the review store has
//!   nothing to show.
//!
//! Nothing here performs I/O or holds shared state; every function is safe to
//! call from concurrent requests.

pub mod search;
pub mod seeded;

pub use search::{rank, score_item, search, ScoredItem, SearchLimits};
pub use seeded::{
    aggregate_rating, generate, generate_now, mask_surname, AggregateRating, Profile,
};
