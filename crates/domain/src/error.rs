// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::validation::FieldViolation;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more draft fields failed validation.
    ///
    /// Carries every violated field so callers can surface the complete
    /// list in one pass.
    ValidationFailed {
        /// The violated fields, in the order they were checked.
        violations: Vec<FieldViolation>,
    },
    /// Room does not exist in the catalog.
    RoomNotFound {
        /// The room identifier that was requested.
        room_id: String,
    },
    /// Booking does not exist in the ledger.
    BookingNotFound {
        /// The booking identifier that was requested.
        booking_id: i64,
    },
    /// Room exists but is flagged unavailable.
    RoomUnavailable {
        /// The room identifier.
        room_id: String,
    },
    /// Check-out does not fall strictly after check-in.
    InvalidDateRange {
        /// The requested check-in.
        check_in: String,
        /// The requested check-out.
        check_out: String,
    },
    /// Failed to parse a date or instant from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Booking status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is rejected.
        reason: String,
    },
    /// Payment status transition is not permitted.
    InvalidPaymentTransition {
        /// The current payment status.
        from: String,
        /// The requested payment status.
        to: String,
        /// Why the transition is rejected.
        reason: String,
    },
    /// Booking status string is not recognized.
    InvalidBookingStatus {
        /// The unrecognized status value.
        status: String,
    },
    /// Payment status string is not recognized.
    InvalidPaymentStatus {
        /// The unrecognized status value.
        status: String,
    },
    /// Multiplying the nightly rate by the night count overflowed.
    PriceOverflow {
        /// The night count that triggered the overflow.
        nights: i64,
    },
    /// A room definition failed catalog-load validation.
    InvalidRoomDefinition {
        /// The room identifier.
        room_id: String,
        /// Description of the defect.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed { violations } => {
                write!(f, "Validation failed: ")?;
                for (index, violation) in violations.iter().enumerate() {
                    if index > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: {}", violation.field, violation.message)?;
                }
                Ok(())
            }
            Self::RoomNotFound { room_id } => write!(f, "Room '{room_id}' not found"),
            Self::BookingNotFound { booking_id } => {
                write!(f, "Booking {booking_id} not found")
            }
            Self::RoomUnavailable { room_id } => {
                write!(f, "Room '{room_id}' is not available for booking")
            }
            Self::InvalidDateRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out '{check_out}' must fall strictly after check-in '{check_in}'"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition booking from '{from}' to '{to}': {reason}")
            }
            Self::InvalidPaymentTransition { from, to, reason } => {
                write!(f, "Cannot transition payment from '{from}' to '{to}': {reason}")
            }
            Self::InvalidBookingStatus { status } => {
                write!(f, "Unknown booking status: {status}")
            }
            Self::InvalidPaymentStatus { status } => {
                write!(f, "Unknown payment status: {status}")
            }
            Self::PriceOverflow { nights } => {
                write!(f, "Total price overflowed for a stay of {nights} nights")
            }
            Self::InvalidRoomDefinition { room_id, reason } => {
                write!(f, "Invalid definition for room '{room_id}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
