//! # Catalog Module
//!
//! Listing search, filtering, and sorting.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Browse Screen Flow                                   │
//! │                                                                         │
//! │  User types "lamp", picks Furniture, sets max $30, min Good            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI state becomes a ListingFilter (the UI owns the mutable state,      │
//! │  the core only ever sees it as an explicit parameter)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter.apply(&listings)  ─── AND of the four predicates ───► matches  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sort_listings(&matches, SortKey::PriceLow) ───► rendered result list  │
//! │                                                                         │
//! │  The input slices are never mutated; both steps return fresh Vecs.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Category, Condition, Listing};

// =============================================================================
// Predicates
// =============================================================================

/// Free-text search over title, description, and tags.
///
/// The query is trimmed and lower-cased; an empty or whitespace-only query
/// matches everything. A listing with no description or tags simply cannot
/// match on those fields.
pub fn matches_search(listing: &Listing, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    if listing.title.to_lowercase().contains(&query) {
        return true;
    }

    if let Some(description) = &listing.description {
        if description.to_lowercase().contains(&query) {
            return true;
        }
    }

    listing
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(&query))
}

/// Exact category match; `None` means "no filter".
pub fn matches_category(listing: &Listing, category: Option<Category>) -> bool {
    match category {
        None => true,
        Some(category) => listing.category == category,
    }
}

/// Inclusive price bounds, each independently optional.
pub fn matches_price_range(
    listing: &Listing,
    min_price_cents: Option<i64>,
    max_price_cents: Option<i64>,
) -> bool {
    if let Some(min) = min_price_cents {
        if listing.price_cents < min {
            return false;
        }
    }
    if let Some(max) = max_price_cents {
        if listing.price_cents > max {
            return false;
        }
    }
    true
}

/// "At least as good as" condition filter; `None` matches all.
///
/// A `Good` minimum admits `Good`, `LikeNew`, and `New` — not an exact
/// match on `Good`.
pub fn matches_condition(listing: &Listing, min_condition: Option<Condition>) -> bool {
    match min_condition {
        None => true,
        Some(min) => listing.condition.is_at_least(min),
    }
}

// =============================================================================
// Listing Filter
// =============================================================================

/// The browse screen's filter state as one explicit value.
///
/// Combined filtering is simply the logical AND of the four predicates;
/// the default filter matches every listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListingFilter {
    /// Free-text query; empty means no text filter.
    pub query: String,
    pub category: Option<Category>,
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
    pub min_condition: Option<Condition>,
}

impl ListingFilter {
    /// True iff the listing passes all four predicates.
    pub fn matches(&self, listing: &Listing) -> bool {
        matches_search(listing, &self.query)
            && matches_category(listing, self.category)
            && matches_price_range(listing, self.min_price_cents, self.max_price_cents)
            && matches_condition(listing, self.min_condition)
    }

    /// Filters a listing slice into a fresh Vec, preserving input order.
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        listings
            .iter()
            .filter(|l| self.matches(l))
            .cloned()
            .collect()
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Sort orders the browse screen offers.
///
/// `Relevance` keeps the backend's result order untouched; it is also the
/// `#[serde(other)]` catch-all, so a sort key this build doesn't know
/// deserializes to "leave the order alone" instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recently created first.
    Newest,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Best condition first.
    Condition,
    /// Input order unchanged.
    #[serde(other)]
    Relevance,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Relevance
    }
}

/// Returns a sorted copy of the listings; the input is never mutated.
///
/// All sorts are stable: listings with equal keys keep their relative
/// input order, so re-sorting a rendered list never shuffles ties.
pub fn sort_listings(listings: &[Listing], sort_key: SortKey) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    match sort_key {
        SortKey::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceLow => sorted.sort_by(|a, b| a.price_cents.cmp(&b.price_cents)),
        SortKey::PriceHigh => sorted.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortKey::Condition => sorted.sort_by(|a, b| b.condition.rank().cmp(&a.condition.rank())),
        SortKey::Relevance => {}
    }
    sorted
}

// =============================================================================
// Unit Tests
// =============================================================================
