use std::collections::HashSet;

use storefront_common::CatalogItem;
use tracing::debug;

/// Whole query found in the title.
pub const TITLE_PHRASE_WEIGHT: u32 = 6;
/// Whole query found in the brand.
pub const BRAND_PHRASE_WEIGHT: u32 = 4;
/// Single query token found in the title.
pub const TITLE_TOKEN_WEIGHT: u32 = 2;
/// Single query token found in the brand.
pub const BRAND_TOKEN_WEIGHT: u32 = 1;
/// Tokens shorter than this (in characters) are ignored.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Bounds applied to the caller-supplied result limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            min: 1,
            max: 10,
            default: 8,
        }
    }
}

impl SearchLimits {
    pub fn clamp(&self, requested: i64) -> usize {
        requested.clamp(self.min as i64, self.max as i64) as usize
    }

    /// Clamp an optional limit, substituting the default when absent.
    pub fn resolve(&self, requested: Option<i64>) -> usize {
        self.clamp(requested.unwrap_or(self.default as i64))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredItem<'a> {
    pub item: &'a CatalogItem,
    pub score: u32,
}

/// Relevance of `item` for `query`. Zero means no match.
pub fn score_item(item: &CatalogItem, query: &str) -> u32 {
    score_normalized(item, &normalize_query(query))
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn score_normalized(item: &CatalogItem, query: &str) -> u32 {
    if query.is_empty() {
        return 0;
    }

    let title = item.title.to_lowercase();
    let brand = item.brand.as_deref().unwrap_or_default().to_lowercase();

    let mut score = 0;
    if title.contains(query) {
        score += TITLE_PHRASE_WEIGHT;
    }
    if brand.contains(query) {
        score += BRAND_PHRASE_WEIGHT;
    }

    for token in query.split_whitespace() {
        if token.chars().count() < MIN_TOKEN_CHARS {
            continue;
        }
        if title.contains(token) {
            score += TITLE_TOKEN_WEIGHT;
        }
        if brand.contains(token) {
            score += BRAND_TOKEN_WEIGHT;
        }
    }

    score
}

/// Drop repeated ids, keeping the first occurrence.
pub fn dedup_by_id<'a, I>(items: I) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let mut seen: HashSet<&'a str> = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id.as_str()))
        .collect()
}

/// Every matching item with its score, highest first. Equal scores keep
/// catalog order (`sort_by` is stable).
pub fn rank<'a>(query: &str, catalog: &'a [CatalogItem]) -> Vec<ScoredItem<'a>> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredItem<'a>> = dedup_by_id(catalog)
        .into_iter()
        .map(|item| ScoredItem {
            item,
            score: score_normalized(item, &query),
        })
        .filter(|s| s.score > 0)
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Top `limit` items for `query`; `limit` is clamped with [`SearchLimits::default`].
pub fn search<'a>(query: &str, catalog: &'a [CatalogItem], limit: i64) -> Vec<&'a CatalogItem> {
    let limit = SearchLimits::default().clamp(limit);
    let ranked = rank(query, catalog);
    debug!(
        candidates = catalog.len(),
        matched = ranked.len(),
        limit,
        "Ranked catalog"
    );
    ranked.into_iter().take(limit).map(|s| s.item).collect()
}
