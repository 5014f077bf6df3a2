//! # Dasher Module
//!
//! Delivery-worker eligibility, the delivery status machine, ETA
//! estimation, and rating updates.
//!
//! ## Delivery Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Delivery Assignment Lifecycle                        │
//! │                                                                         │
//! │  ┌─────────┐    ┌──────────┐    ┌───────────┐    ┌───────────┐         │
//! │  │ pending │───►│ accepted │───►│ picked_up │───►│ delivered │ (end)   │
//! │  └─────────┘    └──────────┘    └───────────┘    └───────────┘         │
//! │                                                                         │
//! │  Strictly linear: no branching, no skipping. Cancellation lives in     │
//! │  the backend, not in this core.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};

// =============================================================================
// Dasher
// =============================================================================

/// A dasher's availability state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DasherStatus {
    /// Online and free to take an assignment.
    Available,
    /// Online but mid-delivery.
    Busy,
    /// Not working.
    Offline,
}

/// How the dasher moves around campus, with an average speed per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Walk,
    Bike,
    Scooter,
    Car,
}

impl VehicleType {
    /// Average speed in miles per hour, used for ETA estimation.
    #[inline]
    pub const fn speed_mph(self) -> u32 {
        match self {
            VehicleType::Walk => 3,
            VehicleType::Bike => 10,
            VehicleType::Scooter => 15,
            VehicleType::Car => 25,
        }
    }
}

/// A delivery-worker account, as supplied by the backend.
///
/// `total_deliveries` and `average_rating` change only through
/// [`next_average_rating`] plus the caller's count increment, never by
/// direct mutation in the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dasher {
    /// Account id (UUID).
    pub id: String,
    pub is_active: bool,
    pub current_status: DasherStatus,
    pub vehicle_type: VehicleType,
    pub total_deliveries: i64,
    pub average_rating: f64,
}

impl Dasher {
    /// Whether this dasher may be offered a new assignment.
    #[inline]
    pub fn can_accept_delivery(&self) -> bool {
        self.is_active && self.current_status == DasherStatus::Available
    }
}

// =============================================================================
// Delivery Status Machine
// =============================================================================

/// A delivery assignment's position in the linear lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    Accepted,
    PickedUp,
    Delivered,
}

impl DeliveryStatus {
    /// The next status in the chain; `None` once delivered.
    ///
    /// ```rust
    /// use pennmart_core::dasher::DeliveryStatus;
    ///
    /// assert_eq!(DeliveryStatus::Pending.next(), Some(DeliveryStatus::Accepted));
    /// assert_eq!(DeliveryStatus::Delivered.next(), None);
    /// ```
    #[inline]
    pub const fn next(self) -> Option<DeliveryStatus> {
        match self {
            DeliveryStatus::Pending => Some(DeliveryStatus::Accepted),
            DeliveryStatus::Accepted => Some(DeliveryStatus::PickedUp),
            DeliveryStatus::PickedUp => Some(DeliveryStatus::Delivered),
            DeliveryStatus::Delivered => None,
        }
    }

    /// True once the assignment has reached its final status.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, DeliveryStatus::Delivered)
    }
}

/// A single delivery task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryAssignment {
    /// Assignment id (UUID).
    pub id: String,
    pub status: DeliveryStatus,
}

impl DeliveryAssignment {
    /// Advances the assignment one step along the chain.
    ///
    /// ## Errors
    /// Advancing a delivered assignment is a contract violation and
    /// surfaces as a typed error rather than a silent no-op, so a stale
    /// or double-tapped status update shows up as a bug instead of
    /// disappearing.
    pub fn advance(&self) -> CoreResult<DeliveryAssignment> {
        match self.status.next() {
            Some(status) => Ok(DeliveryAssignment {
                id: self.id.clone(),
                status,
            }),
            None => Err(CoreError::DeliveryAlreadyComplete {
                assignment_id: self.id.clone(),
            }),
        }
    }
}

// =============================================================================
// ETA Estimation
// =============================================================================

/// Estimated delivery time in whole minutes for a distance and vehicle.
///
/// `distance / speed × 60`, rounded UP to the next whole minute. Ceiling,
/// never round-to-nearest: a too-early promise is worse than a minute of
/// slack.
///
/// ## Errors
/// Negative or non-finite distances are contract violations.
///
/// ```rust
/// use pennmart_core::dasher::{estimated_minutes, VehicleType};
///
/// // 1.5 miles by car: 3.6 minutes → 4
/// assert_eq!(estimated_minutes(VehicleType::Car, 1.5).unwrap(), 4);
/// ```
pub fn estimated_minutes(vehicle: VehicleType, distance_miles: f64) -> CoreResult<u32> {
    if !distance_miles.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "distance_miles".to_string(),
        }
        .into());
    }
    if distance_miles < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "distance_miles".to_string(),
            min: 0,
            max: i64::MAX,
        }
        .into());
    }

    let minutes = distance_miles / vehicle.speed_mph() as f64 * 60.0;
    Ok(minutes.ceil() as u32)
}

// =============================================================================
// Ratings
// =============================================================================

/// Folds a new rating into a dasher's running average.
///
/// With zero prior deliveries the new rating IS the average — there is no
/// phantom prior to weight against (and no divide-by-zero). The caller
/// increments `total_deliveries` separately; this function neither
/// mutates nor returns the count.
pub fn next_average_rating(current_avg: f64, total_deliveries: i64, new_rating: f64) -> f64 {
    if total_deliveries <= 0 {
        return new_rating;
    }
    (current_avg * total_deliveries as f64 + new_rating) / (total_deliveries as f64 + 1.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
