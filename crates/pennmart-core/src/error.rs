//! # Error Types
//!
//! Domain-specific error types for pennmart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pennmart-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  App shell errors (external, not in this repo)                         │
//! │  └── whatever the UI layer maps these into for display                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller → user-visible message     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, limits, etc.)
//! 3. Errors are enum variants, never String
//! 4. The core never formats user-facing copy; callers translate

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. The core prefers total
/// functions with defined fallbacks (removing a missing cart line is a
/// no-op, a missing address field falls back to `"Address"`); a `CoreError`
/// is reserved for genuine contract violations that must not silently
/// produce nonsensical values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cart has exceeded the maximum number of distinct lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds the maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Checkout was asked to total a negative subtotal.
    ///
    /// ## When This Occurs
    /// Never through this crate's own cart math (quantities and prices are
    /// validated non-negative); only when a caller feeds a corrupted
    /// snapshot straight into the totals computation.
    #[error("Order subtotal cannot be negative: {cents} cents")]
    NegativeSubtotal { cents: i64 },

    /// A delivery assignment was advanced past its terminal status.
    ///
    /// ## When This Occurs
    /// - Double-tap on the "mark delivered" action
    /// - A stale assignment record advanced after completion
    #[error("Delivery {assignment_id} is already delivered")]
    DeliveryAlreadyComplete { assignment_id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be a finite number.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g., invalid UUID, malformed zip code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
