//! # pennmart-core: Pure Business Logic for PennMart
//!
//! This crate is the **heart** of the PennMart campus marketplace. It
//! contains all reusable business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PennMart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile / Web Frontend (TypeScript)              │   │
//! │  │    Browse ──► Listing ──► Cart ──► Checkout ──► Delivery       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS bindings                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pennmart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────┐ ┌────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐   │   │
//! │  │   │ money  │ │  cart  │ │ catalog │ │ identity │ │ dasher │   │   │
//! │  │   │ Money  │ │  Cart  │ │ filters │ │  emails  │ │ status │   │   │
//! │  │   │ TaxCalc│ │ totals │ │  sorts  │ │ address  │ │  ETA   │   │   │
//! │  │   └────────┘ └────────┘ └─────────┘ └──────────┘ └────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain records in, values out           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │     Hosted backend (auth, storage, queries) + payment gateway   │   │
//! │  │                 External collaborators, not in this repo        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Shared domain types (Listing, Category, Condition, ...)
//! - [`cart`] - Cart state transitions and order totals
//! - [`catalog`] - Listing search, filtering, and sorting
//! - [`identity`] - Email/password/name validation and address display
//! - [`dasher`] - Delivery eligibility, status machine, ETA, ratings
//! - [`validation`] - Commerce input validation
//! - [`error`] - Typed domain errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic, same input = same output, no
//!    observable side effects; safe to call from any thread
//! 2. **New Values, Not Mutation**: cart and catalog operations return
//!    fresh values so the UI can diff and re-render
//! 3. **No I/O**: database, network, and file system access are FORBIDDEN
//!    here; callers fetch records and persist results
//! 4. **Integer Money**: all monetary values are cents (i64); floats
//!    never carry currency across a module boundary
//! 5. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use pennmart_core::cart::OrderTotals;
//! use pennmart_core::types::{Fulfillment, TaxRate};
//!
//! // $25.00 cart, 8% tax, delivered by a dasher
//! let totals =
//!     OrderTotals::compute(2500, TaxRate::from_bps(800), Fulfillment::Delivery).unwrap();
//! assert_eq!(totals.total_cents, 3100); // 2500 + 200 tax + 400 fee
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod dasher;
pub mod error;
pub mod identity;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pennmart_core::Money` instead of
// `use pennmart_core::money::Money`

pub use cart::{Cart, CartLine, OrderTotals};
pub use catalog::{ListingFilter, SortKey};
pub use dasher::{Dasher, DeliveryAssignment, DeliveryStatus};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat delivery fee in cents charged when a dasher fulfills the order.
///
/// ## Why a constant?
/// A fixed business rule today ($4.00 per delivery, any distance). If fees
/// ever become distance- or surge-based, this moves into backend config.
pub const DELIVERY_FEE_CENTS: i64 = 400;

/// Default sales tax rate in basis points (8%, Philadelphia).
///
/// Callers pass an explicit [`types::TaxRate`] to the totals computation;
/// this is the rate the checkout screen uses today.
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;

/// Maximum distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps single orders hand-deliverable.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single listing in a cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
