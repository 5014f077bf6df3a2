//! # Cart Module
//!
//! Shopping cart state transitions and order-total arithmetic.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Core Function            Result               │
//! │  ───────────────          ─────────────            ──────               │
//! │                                                                         │
//! │  Tap "Add to Cart" ──────► cart.add_item() ──────► new Cart value      │
//! │                                                                         │
//! │  Change quantity ────────► cart.update_quantity()► new Cart value      │
//! │                                                                         │
//! │  Tap "Remove" ───────────► cart.remove_item() ───► new Cart value      │
//! │                                                                         │
//! │  Checkout screen ────────► OrderTotals::compute()► subtotal/tax/total  │
//! │                                                                         │
//! │  NOTE: Every operation returns a NEW cart. The UI re-renders by         │
//! │        comparing values, so the input cart is never mutated; the        │
//! │        caller persists the returned value if the user commits.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Fulfillment, Listing, TaxRate};
use crate::{DELIVERY_FEE_CENTS, MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One (item, quantity) pairing within a shopping cart.
///
/// ## Design Notes
/// - `item_id`: reference to the listing (for backend lookup)
/// - `title` / `unit_price_cents` / `seller_id`: frozen copies of listing
///   data at the moment of adding, so the cart displays consistent data
///   even if the seller edits the listing afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Listing id this line refers to.
    pub item_id: i64,

    /// Listing title at time of adding (frozen).
    pub title: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart, always >= 1.
    pub quantity: i64,

    /// Seller's account id at time of adding (frozen).
    pub seller_id: String,
}

impl CartLine {
    /// Creates a cart line from a listing and quantity.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the listing price changes
    /// in the backend, this line retains the original price until the
    /// caller refreshes the cart.
    pub fn from_listing(listing: &Listing, quantity: i64) -> Self {
        CartLine {
            item_id: listing.id,
            title: listing.title.clone(),
            unit_price_cents: listing.price_cents,
            quantity,
            seller_id: listing.seller_id.clone(),
        }
    }

    /// Line total (unit price × quantity) in cents.
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of lines.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same listing merges
///   quantities)
/// - Quantity is always >= 1 (an update to 0 or below removes the line)
/// - At most [`MAX_CART_LINES`] lines, [`MAX_LINE_QUANTITY`] per line
///
/// ## Value Semantics
/// A cart is an immutable value. Every operation takes `&self` and
/// returns a fresh `Cart`; the caller decides what to do with it. Line
/// order is insertion order, which only matters for stable display.
///
/// ```rust
/// use pennmart_core::cart::Cart;
///
/// let cart = Cart::new();
/// let same = cart.remove_item(42); // removing from empty is a no-op
/// assert_eq!(cart, same);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[ts(export)]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a listing to the cart, returning the resulting cart.
    ///
    /// ## Behavior
    /// - Listing already in cart: quantities merge into the existing line
    /// - Otherwise: a new line is appended
    ///
    /// ## Errors
    /// - Quantity <= 0 (adds must be positive; use
    ///   [`Cart::update_quantity`] with 0 to remove)
    /// - Merged quantity above [`MAX_LINE_QUANTITY`]
    /// - Cart already holds [`MAX_CART_LINES`] distinct lines
    pub fn add_item(&self, listing: &Listing, quantity: i64) -> CoreResult<Cart> {
        if quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        let mut next = self.clone();

        if let Some(line) = next.lines.iter_mut().find(|l| l.item_id == listing.id) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(next);
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        if next.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        next.lines.push(CartLine::from_listing(listing, quantity));
        Ok(next)
    }

    /// Sets the quantity of a line, returning the resulting cart.
    ///
    /// ## Behavior
    /// - Quantity <= 0: behaves exactly as [`Cart::remove_item`]
    /// - Listing not in cart: no-op (the returned cart equals `self`)
    ///
    /// ## Errors
    /// - Quantity above [`MAX_LINE_QUANTITY`]
    pub fn update_quantity(&self, item_id: i64, quantity: i64) -> CoreResult<Cart> {
        if quantity <= 0 {
            return Ok(self.remove_item(item_id));
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        let mut next = self.clone();
        if let Some(line) = next.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity = quantity;
        }
        Ok(next)
    }

    /// Removes a line by listing id, returning the resulting cart.
    ///
    /// Removing an id that isn't in the cart is a no-op, not an error:
    /// the user may have tapped remove twice before the UI settled.
    pub fn remove_item(&self, item_id: i64) -> Cart {
        let lines = self
            .lines
            .iter()
            .filter(|l| l.item_id != item_id)
            .cloned()
            .collect();
        Cart { lines }
    }

    /// Looks up the line for a listing id, if present.
    pub fn line(&self, item_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id == item_id)
    }

    /// Number of distinct lines in the cart.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines (the badge count, not line count).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Subtotal (before tax and fees) in cents. Empty cart → 0.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True iff the cart holds items from more than one seller.
    ///
    /// A cart with zero or one lines is never multi-seller. The checkout
    /// screen uses this to warn that multi-seller orders arrive as
    /// separate handoffs.
    pub fn has_multiple_sellers(&self) -> bool {
        match self.lines.split_first() {
            None => false,
            Some((first, rest)) => rest.iter().any(|l| l.seller_id != first.seller_id),
        }
    }

    /// Human-readable order summary for the payment gateway.
    ///
    /// The caller sends this, together with [`OrderTotals::total_cents`],
    /// to the server-side endpoint that opens the payment session. The
    /// core never calls the payment API itself.
    pub fn order_description(&self) -> String {
        if self.lines.is_empty() {
            return "PennMart order".to_string();
        }

        let mut parts: Vec<String> = self
            .lines
            .iter()
            .take(3)
            .map(|l| {
                if l.quantity > 1 {
                    format!("{} x{}", l.title, l.quantity)
                } else {
                    l.title.clone()
                }
            })
            .collect();

        if self.lines.len() > 3 {
            parts.push(format!("and {} more", self.lines.len() - 3));
        }

        parts.join(", ")
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Checkout totals, derived fresh from a cart snapshot and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderTotals {
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
}

impl OrderTotals {
    /// Computes checkout totals from a subtotal.
    ///
    /// Tax rounds half up to the nearest cent (the single canonical rule,
    /// see [`Money::calculate_tax`]); delivery adds the flat
    /// [`DELIVERY_FEE_CENTS`] fee; pickup adds nothing.
    ///
    /// ## Errors
    /// A negative subtotal is a contract violation and never silently
    /// becomes a negative order total.
    ///
    /// ```rust
    /// use pennmart_core::cart::OrderTotals;
    /// use pennmart_core::types::{Fulfillment, TaxRate};
    ///
    /// let totals =
    ///     OrderTotals::compute(2500, TaxRate::from_bps(800), Fulfillment::Delivery).unwrap();
    /// assert_eq!(totals.tax_cents, 200);
    /// assert_eq!(totals.delivery_fee_cents, 400);
    /// assert_eq!(totals.total_cents, 3100);
    /// ```
    pub fn compute(
        subtotal_cents: i64,
        tax_rate: TaxRate,
        fulfillment: Fulfillment,
    ) -> CoreResult<OrderTotals> {
        if subtotal_cents < 0 {
            return Err(CoreError::NegativeSubtotal {
                cents: subtotal_cents,
            });
        }

        let subtotal = Money::from_cents(subtotal_cents);
        let tax = subtotal.calculate_tax(tax_rate);
        let delivery_fee = match fulfillment {
            Fulfillment::Delivery => Money::from_cents(DELIVERY_FEE_CENTS),
            Fulfillment::Pickup => Money::zero(),
        };
        let total = subtotal + tax + delivery_fee;

        Ok(OrderTotals {
            subtotal_cents,
            tax_cents: tax.cents(),
            delivery_fee_cents: delivery_fee.cents(),
            total_cents: total.cents(),
        })
    }

    /// Convenience: totals straight from a cart snapshot.
    pub fn for_cart(
        cart: &Cart,
        tax_rate: TaxRate,
        fulfillment: Fulfillment,
    ) -> CoreResult<OrderTotals> {
        OrderTotals::compute(cart.subtotal_cents(), tax_rate, fulfillment)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Condition};
    use chrono::Utc;

    fn test_listing(id: i64, price_cents: i64, seller: &str) -> Listing {
        Listing {
            id,
            seller_id: seller.to_string(),
            title: format!("Listing {}", id),
            description: None,
            price_cents,
            category: Category::Other,
            condition: Condition::Good,
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_item_appends_line() {
        let cart = Cart::new();
        let listing = test_listing(1, 999, "s1");

        let cart = cart.add_item(&listing, 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal_cents(), 1998);
    }

    #[test]
    fn test_add_same_listing_merges_quantities() {
        let listing = test_listing(1, 999, "s1");
        let cart = Cart::new()
            .add_item(&listing, 2)
            .unwrap()
            .add_item(&listing, 3)
            .unwrap();

        assert_eq!(cart.line_count(), 1); // still one distinct line
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_add_never_mutates_input() {
        let listing = test_listing(1, 500, "s1");
        let before = Cart::new().add_item(&listing, 1).unwrap();
        let snapshot = before.clone();

        let after = before.add_item(&listing, 4).unwrap();

        assert_eq!(before, snapshot);
        assert_eq!(after.line(1).unwrap().quantity, 5);
        assert_eq!(before.line(1).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let listing = test_listing(1, 500, "s1");
        assert!(Cart::new().add_item(&listing, 0).is_err());
        assert!(Cart::new().add_item(&listing, -3).is_err());
    }

    #[test]
    fn test_add_respects_quantity_cap() {
        let listing = test_listing(1, 500, "s1");
        let cart = Cart::new().add_item(&listing, MAX_LINE_QUANTITY).unwrap();
        assert!(matches!(
            cart.add_item(&listing, 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
    }

    #[test]
    fn test_remove_is_noop_for_missing_id() {
        let listing = test_listing(1, 500, "s1");
        let cart = Cart::new().add_item(&listing, 1).unwrap();

        let after = cart.remove_item(999);
        assert_eq!(after, cart);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let listing = test_listing(1, 500, "s1");
        let cart = Cart::new().add_item(&listing, 1).unwrap();

        let once = cart.remove_item(1);
        let twice = once.remove_item(1);
        assert_eq!(once, twice);
        assert!(once.is_empty());
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let listing = test_listing(1, 500, "s1");
        let cart = Cart::new().add_item(&listing, 3).unwrap();

        let removed = cart.remove_item(1);
        assert_eq!(cart.update_quantity(1, 0).unwrap(), removed);
        assert_eq!(cart.update_quantity(1, -5).unwrap(), removed);
    }

    #[test]
    fn test_update_quantity_replaces_value() {
        let listing = test_listing(1, 500, "s1");
        let cart = Cart::new().add_item(&listing, 3).unwrap();

        let updated = cart.update_quantity(1, 7).unwrap();
        assert_eq!(updated.line(1).unwrap().quantity, 7);
        // no effect for an id that isn't in the cart
        let same = cart.update_quantity(42, 7).unwrap();
        assert_eq!(same, cart);
    }

    #[test]
    fn test_subtotal_matches_direct_summation() {
        let a = test_listing(1, 1000, "s1");
        let b = test_listing(2, 500, "s2");
        let cart = Cart::new()
            .add_item(&a, 2)
            .unwrap()
            .add_item(&b, 1)
            .unwrap();

        let reference: i64 = cart
            .lines
            .iter()
            .map(|l| l.unit_price_cents * l.quantity)
            .sum();
        assert_eq!(cart.subtotal_cents(), reference);
        assert_eq!(cart.subtotal_cents(), 2500);
        assert_eq!(Cart::new().subtotal_cents(), 0);
    }

    #[test]
    fn test_multiple_sellers_detection() {
        assert!(!Cart::new().has_multiple_sellers());

        let one = Cart::new().add_item(&test_listing(1, 100, "s1"), 1).unwrap();
        assert!(!one.has_multiple_sellers());

        let same_seller = one.add_item(&test_listing(2, 100, "s1"), 1).unwrap();
        assert!(!same_seller.has_multiple_sellers());

        let mixed = one.add_item(&test_listing(3, 100, "s2"), 1).unwrap();
        assert!(mixed.has_multiple_sellers());
    }

    #[test]
    fn test_checkout_scenario_delivery_and_pickup() {
        // {price 1000 x qty 2, price 500 x qty 1} → subtotal 2500
        let a = test_listing(1, 1000, "s1");
        let b = test_listing(2, 500, "s1");
        let cart = Cart::new()
            .add_item(&a, 2)
            .unwrap()
            .add_item(&b, 1)
            .unwrap();
        assert_eq!(cart.subtotal_cents(), 2500);

        let rate = TaxRate::from_bps(800);

        let delivery = OrderTotals::for_cart(&cart, rate, Fulfillment::Delivery).unwrap();
        assert_eq!(delivery.subtotal_cents, 2500);
        assert_eq!(delivery.tax_cents, 200);
        assert_eq!(delivery.delivery_fee_cents, 400);
        assert_eq!(delivery.total_cents, 3100);

        let pickup = OrderTotals::for_cart(&cart, rate, Fulfillment::Pickup).unwrap();
        assert_eq!(pickup.delivery_fee_cents, 0);
        assert_eq!(pickup.total_cents, 2700);
    }

    #[test]
    fn test_totals_reject_negative_subtotal() {
        let result = OrderTotals::compute(-100, TaxRate::from_bps(800), Fulfillment::Pickup);
        assert!(matches!(result, Err(CoreError::NegativeSubtotal { .. })));
    }

    #[test]
    fn test_order_description() {
        assert_eq!(Cart::new().order_description(), "PennMart order");

        let cart = Cart::new()
            .add_item(&test_listing(1, 100, "s1"), 2)
            .unwrap()
            .add_item(&test_listing(2, 100, "s1"), 1)
            .unwrap();
        assert_eq!(cart.order_description(), "Listing 1 x2, Listing 2");

        let mut big = Cart::new();
        for id in 1..=5 {
            big = big.add_item(&test_listing(id, 100, "s1"), 1).unwrap();
        }
        assert_eq!(
            big.order_description(),
            "Listing 1, Listing 2, Listing 3, and 2 more"
        );
    }
}
