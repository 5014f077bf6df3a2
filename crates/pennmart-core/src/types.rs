//! # Domain Types
//!
//! Shared domain types for the PennMart core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Listing      │   │    Category     │   │   Condition     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  Textbooks      │   │  New      (5)   │       │
//! │  │  seller_id      │   │  Electronics    │   │  LikeNew  (4)   │       │
//! │  │  title          │   │  Furniture      │   │  Good     (3)   │       │
//! │  │  price_cents    │   │  ...            │   │  Fair     (2)   │       │
//! │  │  condition      │   └─────────────────┘   │  Poor     (1)   │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │   Fulfillment   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  Pickup         │                             │
//! │  │  800 = 8%       │   │  Delivery       │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Listings arrive from the hosted backend as plain records; the core only
//! reads them. Cart and dasher types live in their own modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (Philadelphia sales tax)
///
/// Keeping the rate integral means tax math never touches floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Category
// =============================================================================

/// The closed set of listing categories.
///
/// The source app stored these as free strings; a typo'd category silently
/// fell out of every filter. A closed enum makes an invalid category a
/// compile-time concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Textbooks,
    Electronics,
    Furniture,
    Clothing,
    Appliances,
    Tickets,
    Sports,
    Other,
}

// =============================================================================
// Condition
// =============================================================================

/// Item condition, totally ordered from worst to best.
///
/// Declaration order is ascending so the derived `Ord` agrees with
/// [`Condition::rank`]: `Poor < Fair < Good < LikeNew < New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Poor,
    Fair,
    Good,
    LikeNew,
    New,
}

impl Condition {
    /// Integer rank for comparisons and sorting, highest = best.
    ///
    /// ```rust
    /// use pennmart_core::types::Condition;
    ///
    /// assert_eq!(Condition::New.rank(), 5);
    /// assert_eq!(Condition::Poor.rank(), 1);
    /// assert!(Condition::LikeNew > Condition::Good);
    /// ```
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Condition::Poor => 1,
            Condition::Fair => 2,
            Condition::Good => 3,
            Condition::LikeNew => 4,
            Condition::New => 5,
        }
    }

    /// "At least as good as" comparison used by the condition filter.
    #[inline]
    pub fn is_at_least(self, min: Condition) -> bool {
        self >= min
    }
}

// =============================================================================
// Fulfillment
// =============================================================================

/// How the buyer receives the order.
///
/// Delivery adds the flat dasher fee to the order total; pickup does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Fulfillment {
    /// Buyer meets the seller / picks up from a drop point.
    Pickup,
    /// A dasher carries the order to the buyer.
    Delivery,
}

// =============================================================================
// Listing
// =============================================================================

/// A secondhand item listed for sale.
///
/// Immutable from the core's perspective: the backend supplies these and
/// the core only filters, sorts, and snapshots them into carts.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Listing {
    /// Backend row id.
    pub id: i64,

    /// Seller's account id (UUID).
    pub seller_id: String,

    /// Display title shown in search results and the cart.
    pub title: String,

    /// Optional longer description.
    pub description: Option<String>,

    /// Asking price in cents.
    pub price_cents: i64,

    /// Listing category.
    pub category: Category,

    /// Item condition.
    pub condition: Condition,

    /// Free-form search tags.
    pub tags: Vec<String>,

    /// When the listing was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Returns the asking price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert!((rate.percentage() - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(8.0);
        assert_eq!(rate.bps(), 800);
    }

    #[test]
    fn test_condition_ranks() {
        assert_eq!(Condition::Poor.rank(), 1);
        assert_eq!(Condition::Fair.rank(), 2);
        assert_eq!(Condition::Good.rank(), 3);
        assert_eq!(Condition::LikeNew.rank(), 4);
        assert_eq!(Condition::New.rank(), 5);
    }

    #[test]
    fn test_condition_ordering_matches_rank() {
        let mut all = [
            Condition::New,
            Condition::Poor,
            Condition::LikeNew,
            Condition::Fair,
            Condition::Good,
        ];
        all.sort();
        assert_eq!(
            all,
            [
                Condition::Poor,
                Condition::Fair,
                Condition::Good,
                Condition::LikeNew,
                Condition::New,
            ]
        );
        assert!(Condition::New.is_at_least(Condition::Good));
        assert!(Condition::Good.is_at_least(Condition::Good));
        assert!(!Condition::Fair.is_at_least(Condition::Good));
    }

    #[test]
    fn test_enum_wire_format() {
        // The backend stores enum values as snake_case strings
        assert_eq!(
            serde_json::to_string(&Condition::LikeNew).unwrap(),
            "\"like_new\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Textbooks).unwrap(),
            "\"textbooks\""
        );
        assert_eq!(
            serde_json::to_string(&Fulfillment::Pickup).unwrap(),
            "\"pickup\""
        );
        let parsed: Condition = serde_json::from_str("\"like_new\"").unwrap();
        assert_eq!(parsed, Condition::LikeNew);
    }
}
