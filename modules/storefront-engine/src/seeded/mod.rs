//! Seeded synthetic content.
//!
//! A seed string is hashed to a 32-bit state, which drives a [`Mulberry32`]
//! generator. Each [`Profile`] draws its fields from fixed pools in a fixed
//! order, so the same seed always yields the same names, phrases, ratings and
//! day offsets. Only the absolute timestamps move, because they are offsets
//! from the `now` passed in.
//!
//! The three profiles come from three different screens of the storefront and
//! intentionally keep their own pools, count rules and rating skews.

pub mod hash;
pub mod mask;
pub mod pools;
pub mod rating;
pub mod rng;

use chrono::{DateTime, Duration, Utc};
use storefront_common::SyntheticRecord;

pub use hash::{hash_seed, hash_seed_31};
pub use mask::mask_surname;
pub use rating::{aggregate_rating, AggregateRating};
pub use rng::Mulberry32;

use pools::*;

const REVIEW_COUNT_FLOOR: usize = 3;
const REVIEW_COUNT_SPAN: usize = 5;
const REVIEW_MAX_DAYS_BACK: usize = 180;

const TESTIMONIAL_SEED_SUFFIX: &str = "-testimonials";
const TESTIMONIAL_MIN_COUNT: usize = 5;
const TESTIMONIAL_MAX_COUNT: usize = 12;

const ADMIN_MIN_COUNT: usize = 1;
const ADMIN_MAX_COUNT: usize = 6;
const ADMIN_MAX_DAYS_BACK: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Product page reviews: 3..=7 records, ratings 3..=5, up to 180 days old,
    /// newest first. The count hint is ignored.
    Review,
    /// Homepage testimonials: `hint + floor(r * hint)` clamped to 5..=12,
    /// ratings 4..=5, with a city and no timestamp. Hints above 12 count as 12.
    Testimonial,
    /// Admin moderation demo: `hint` clamped to 1..=6 records, ratings 4..=5,
    /// up to 119 days old, insertion order.
    AdminDemo,
}

/// Generate synthetic records for `seed` relative to `now`.
pub fn generate(
    profile: Profile,
    seed: &str,
    count_hint: usize,
    now: DateTime<Utc>,
) -> Vec<SyntheticRecord> {
    match profile {
        Profile::Review => review_records(seed, now),
        Profile::Testimonial => testimonial_records(seed, count_hint),
        Profile::AdminDemo => admin_demo_records(seed, count_hint, now),
    }
}

/// [`generate`] against the wall clock.
pub fn generate_now(profile: Profile, seed: &str, count_hint: usize) -> Vec<SyntheticRecord> {
    generate(profile, seed, count_hint, Utc::now())
}

fn pick_author(rng: &mut Mulberry32, first_names: &[&str], surnames: &[&str]) -> String {
    let first = rng.pick(first_names);
    let last = rng.pick(surnames);
    format!("{first} {last}")
}

fn days_ago(now: DateTime<Utc>, days: usize) -> DateTime<Utc> {
    now - Duration::days(days as i64)
}

fn review_rating(r: f64) -> u8 {
    if r > 0.8 {
        3
    } else if r > 0.3 {
        4
    } else {
        5
    }
}

fn testimonial_rating(r: f64) -> u8 {
    if r > 0.75 {
        4
    } else {
        5
    }
}

fn admin_demo_rating(r: f64) -> u8 {
    if r > 0.7 {
        4
    } else {
        5
    }
}

fn review_records(seed: &str, now: DateTime<Utc>) -> Vec<SyntheticRecord> {
    let mut rng = Mulberry32::new(hash_seed(seed));
    let count = REVIEW_COUNT_FLOOR + rng.index(REVIEW_COUNT_SPAN);

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let author = pick_author(&mut rng, REVIEW_FIRST_NAMES, REVIEW_SURNAMES);
        let rating = review_rating(rng.next_f64());
        let content = rng.pick(REVIEW_PHRASES).to_string();
        let days_back = rng.index(REVIEW_MAX_DAYS_BACK) + 1;
        records.push(SyntheticRecord {
            id: format!("{seed}-demo-{i}"),
            author,
            city: None,
            content,
            rating,
            created_at: Some(days_ago(now, days_back)),
        });
    }

    // Newest first; equal timestamps keep generation order.
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records
}

fn testimonial_records(seed: &str, count_hint: usize) -> Vec<SyntheticRecord> {
    let seed = format!("{seed}{TESTIMONIAL_SEED_SUFFIX}");
    let mut rng = Mulberry32::new(hash_seed(&seed));
    let hint = count_hint.min(TESTIMONIAL_MAX_COUNT);
    let count = (rng.index(hint) + hint).clamp(TESTIMONIAL_MIN_COUNT, TESTIMONIAL_MAX_COUNT);

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let author = pick_author(&mut rng, TESTIMONIAL_FIRST_NAMES, TESTIMONIAL_SURNAMES);
        let city = rng.pick(TESTIMONIAL_CITIES).to_string();
        let content = rng.pick(TESTIMONIAL_PHRASES).to_string();
        let rating = testimonial_rating(rng.next_f64());
        records.push(SyntheticRecord {
            id: format!("{seed}-{i}"),
            author,
            city: Some(city),
            content,
            rating,
            created_at: None,
        });
    }
    records
}

fn admin_demo_records(seed: &str, count_hint: usize, now: DateTime<Utc>) -> Vec<SyntheticRecord> {
    let mut rng = Mulberry32::new(hash_seed_31(seed));
    let count = count_hint.clamp(ADMIN_MIN_COUNT, ADMIN_MAX_COUNT);

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let author = pick_author(&mut rng, ADMIN_FIRST_NAMES, ADMIN_SURNAMES);
        let content = rng.pick(ADMIN_PHRASES).to_string();
        let rating = admin_demo_rating(rng.next_f64());
        let days_back = rng.index(ADMIN_MAX_DAYS_BACK);
        records.push(SyntheticRecord {
            id: format!("demo-{i}"),
            author,
            city: None,
            content,
            rating,
            created_at: Some(days_ago(now, days_back)),
        });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn review_count_within_bounds() {
        for seed in ["", "a", "iphone-13", "kilif-99", "ekran-koruyucu"] {
            let n = generate(Profile::Review, seed, 0, fixed_now()).len();
            assert!((3..=7).contains(&n), "seed {seed:?} produced {n}");
        }
    }

    #[test]
    fn review_ratings_skew_high() {
        for seed in ["x", "y", "z", "urun-1", "urun-2"] {
            for r in generate(Profile::Review, seed, 0, fixed_now()) {
                assert!((3..=5).contains(&r.rating));
            }
        }
    }

    #[test]
    fn reviews_are_newest_first_within_window() {
        let now = fixed_now();
        let records = generate(Profile::Review, "kulaklik-7", 0, now);
        let stamps: Vec<_> = records.iter().map(|r| r.created_at.unwrap()).collect();
        assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
        for ts in stamps {
            let age = now - ts;
            assert!(age >= Duration::days(1) && age <= Duration::days(180));
        }
    }

    #[test]
    fn testimonial_count_clamped() {
        assert_eq!(generate(Profile::Testimonial, "global", 12, fixed_now()).len(), 12);
        assert_eq!(generate(Profile::Testimonial, "global", 3, fixed_now()).len(), 5);
        assert_eq!(generate(Profile::Testimonial, "global", 0, fixed_now()).len(), 5);
    }

    #[test]
    fn testimonials_have_city_and_no_timestamp() {
        for t in generate(Profile::Testimonial, "global", 12, fixed_now()) {
            assert!(t.city.is_some());
            assert!(t.created_at.is_none());
            assert!((4..=5).contains(&t.rating));
            assert!(t.id.starts_with("global-testimonials-"));
        }
    }

    #[test]
    fn admin_demo_uses_exact_count() {
        let records = generate(Profile::AdminDemo, "admin-demo", 6, fixed_now());
        assert_eq!(records.len(), 6);
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["demo-0", "demo-1", "demo-2", "demo-3", "demo-4", "demo-5"]);
    }

    #[test]
    fn extreme_hints_stay_in_range() {
        let now = fixed_now();
        for hint in [0, usize::MAX] {
            let reviews = generate(Profile::Review, "iphone-13", hint, now).len();
            assert!((3..=7).contains(&reviews), "review hint {hint}: {reviews}");

            let testimonials = generate(Profile::Testimonial, "global", hint, now).len();
            assert!((5..=12).contains(&testimonials), "testimonial hint {hint}: {testimonials}");

            let demo = generate(Profile::AdminDemo, "admin-demo", hint, now).len();
            assert!((1..=6).contains(&demo), "admin hint {hint}: {demo}");
        }
        assert_eq!(generate(Profile::Testimonial, "global", usize::MAX, now).len(), 12);
        assert_eq!(generate(Profile::AdminDemo, "admin-demo", 0, now).len(), 1);
        assert_eq!(generate(Profile::AdminDemo, "admin-demo", usize::MAX, now).len(), 6);
    }

    #[test]
    fn oversized_testimonial_hint_matches_max_hint() {
        let now = fixed_now();
        assert_eq!(
            generate(Profile::Testimonial, "global", 12, now),
            generate(Profile::Testimonial, "global", 500, now)
        );
    }

    #[test]
    fn empty_seed_is_tolerated() {
        for profile in [Profile::Review, Profile::Testimonial, Profile::AdminDemo] {
            assert!(!generate(profile, "", 6, fixed_now()).is_empty());
        }
    }
}
