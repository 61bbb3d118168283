use super::hash::hash_seed;

const RATING_FLOOR: f64 = 3.2;
const RATING_CEIL: f64 = 4.9;
const RATING_BUCKETS: u32 = 1700;
const COUNT_FLOOR: u32 = 12;
const COUNT_BUCKETS: u32 = 409;

/// Star average and review count shown beside a product listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateRating {
    /// 3.2..=4.9, one decimal.
    pub rating: f64,
    /// 12..=420.
    pub count: u32,
}

/// Seeded aggregate for `seed`; both values derive from [`hash_seed`].
pub fn aggregate_rating(seed: &str) -> AggregateRating {
    let base = hash_seed(seed);
    let spread = f64::from(base % RATING_BUCKETS) / f64::from(RATING_BUCKETS);
    let rating = RATING_FLOOR + spread * (RATING_CEIL - RATING_FLOOR);

    AggregateRating {
        rating: (rating * 10.0).round() / 10.0,
        count: COUNT_FLOOR + base % COUNT_BUCKETS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(seed: &str) -> (f64, u32) {
        let agg = aggregate_rating(seed);
        (agg.rating, agg.count)
    }

    #[test]
    fn fixed_seeds() {
        assert_eq!(pair(""), (3.2, 12));
        assert_eq!(pair("a"), (3.3, 109));
        assert_eq!(pair("iphone-13"), (3.3, 32));
        assert_eq!(pair("ip13-bat"), (4.6, 237));
        assert_eq!(pair("global"), (4.6, 336));
        assert_eq!(pair("sm-kablo"), (4.4, 87));
    }

    #[test]
    fn stays_in_display_range() {
        for i in 0..2_000 {
            let agg = aggregate_rating(&format!("urun-{i}"));
            assert!((3.2..=4.9).contains(&agg.rating), "{agg:?}");
            assert!((12..=420).contains(&agg.count), "{agg:?}");
            assert_eq!((agg.rating * 10.0).round() / 10.0, agg.rating);
        }
    }
}
