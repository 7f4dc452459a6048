// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking and payment status tracking and transition logic.
//!
//! Status transitions are staff-initiated only; the system never advances
//! a booking based on time alone. Every transition is validated against an
//! explicit table before any record is mutated.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Booking lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Created but not yet confirmed. Initial state.
    #[default]
    Pending,
    /// Confirmed by payment or staff action.
    Confirmed,
    /// Cancelled before or after confirmation. Terminal.
    Cancelled,
    /// Stay finished. Terminal.
    Completed,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for API serialization and display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Returns true if this status is terminal (no further legal transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Validates whether a transition from this status to another is permitted.
    ///
    /// Valid transitions are:
    /// - `Pending` → `Confirmed`
    /// - `Pending` → `Cancelled`
    /// - `Confirmed` → `Completed`
    /// - `Confirmed` → `Cancelled`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid: bool = matches!(
            (self, new_status),
            (Self::Pending, Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::Completed | Self::Cancelled)
        );

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by booking lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidBookingStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// No payment captured yet. Initial state.
    #[default]
    Pending,
    /// Payment captured.
    Paid,
    /// Payment returned to the guest. Terminal.
    Refunded,
}

impl PaymentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }

    /// Returns true if this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Refunded)
    }

    /// Validates whether a payment transition is permitted, given the
    /// booking's current lifecycle status.
    ///
    /// Valid transitions are `Pending` → `Paid` and `Paid` → `Refunded`.
    /// A transition to `Paid` is rejected while the booking is cancelled.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPaymentTransition` if the transition is
    /// not allowed.
    pub fn validate_transition(
        &self,
        new_status: Self,
        booking_status: BookingStatus,
    ) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidPaymentTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        if new_status == Self::Paid && booking_status == BookingStatus::Cancelled {
            return Err(DomainError::InvalidPaymentTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot capture payment for a cancelled booking".to_string(),
            });
        }

        let valid: bool = matches!(
            (self, new_status),
            (Self::Pending, Self::Paid) | (Self::Paid, Self::Refunded)
        );

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidPaymentTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by payment lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "refunded" => Ok(Self::Refunded),
            _ => Err(DomainError::InvalidPaymentStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ];

        for status in statuses {
            let s = status.as_str();
            match BookingStatus::from_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        assert!(BookingStatus::from_str("checked_in").is_err());
        assert!(PaymentStatus::from_str("authorized").is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(BookingStatus::Completed.is_terminal());
        assert!(!PaymentStatus::Pending.is_terminal());
        assert!(!PaymentStatus::Paid.is_terminal());
        assert!(PaymentStatus::Refunded.is_terminal());
    }

    #[test]
    fn test_valid_transitions_from_pending() {
        let current = BookingStatus::Pending;

        assert!(current.validate_transition(BookingStatus::Confirmed).is_ok());
        assert!(current.validate_transition(BookingStatus::Cancelled).is_ok());
    }

    #[test]
    fn test_pending_cannot_skip_to_completed() {
        let result = BookingStatus::Pending.validate_transition(BookingStatus::Completed);
        assert!(result.is_err());
    }

    #[test]
    fn test_valid_transitions_from_confirmed() {
        let current = BookingStatus::Confirmed;

        assert!(current.validate_transition(BookingStatus::Completed).is_ok());
        assert!(current.validate_transition(BookingStatus::Cancelled).is_ok());
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        let terminal_states = vec![BookingStatus::Cancelled, BookingStatus::Completed];

        for terminal in terminal_states {
            assert!(terminal.validate_transition(BookingStatus::Pending).is_err());
            assert!(
                terminal
                    .validate_transition(BookingStatus::Confirmed)
                    .is_err()
            );
            assert!(
                terminal
                    .validate_transition(BookingStatus::Completed)
                    .is_err()
            );
        }
    }

    #[test]
    fn test_payment_pending_to_paid() {
        let result =
            PaymentStatus::Pending.validate_transition(PaymentStatus::Paid, BookingStatus::Pending);
        assert!(result.is_ok());
    }

    #[test]
    fn test_payment_paid_to_refunded() {
        let result = PaymentStatus::Paid
            .validate_transition(PaymentStatus::Refunded, BookingStatus::Cancelled);
        assert!(result.is_ok());
    }

    #[test]
    fn test_payment_rejected_for_cancelled_booking() {
        let result = PaymentStatus::Pending
            .validate_transition(PaymentStatus::Paid, BookingStatus::Cancelled);
        assert!(result.is_err());
    }

    #[test]
    fn test_payment_no_transition_from_refunded() {
        let result = PaymentStatus::Refunded
            .validate_transition(PaymentStatus::Paid, BookingStatus::Confirmed);
        assert!(result.is_err());
    }

    #[test]
    fn test_payment_cannot_skip_to_refunded() {
        let result = PaymentStatus::Pending
            .validate_transition(PaymentStatus::Refunded, BookingStatus::Confirmed);
        assert!(result.is_err());
    }
}
