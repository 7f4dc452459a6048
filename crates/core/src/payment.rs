// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment processing capability.
//!
//! The engine depends only on the outcome of a payment attempt, never on
//! its timing. Real gateway integration lives outside the core; payment
//! runs after a booking is created and is not part of the creation
//! invariants.

use stay_reserve_domain::Booking;

/// The result of a payment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The payment was captured.
    Approved,
    /// The payment was rejected.
    Declined {
        /// The gateway's reason.
        reason: String,
    },
}

/// A capability that can settle payment for a booking.
pub trait PaymentProcessor {
    /// Attempts to capture payment for the booking's total price.
    fn process(&self, booking: &Booking) -> PaymentOutcome;
}

/// A gateway stand-in that settles every payment immediately.
///
/// Replaces the fixed-delay simulation the booking form used; tests can
/// construct a declining variant to exercise the failure path.
#[derive(Debug, Clone, Default)]
pub struct SimulatedPaymentProcessor {
    decline_reason: Option<String>,
}

impl SimulatedPaymentProcessor {
    /// Creates a processor that approves every payment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decline_reason: None,
        }
    }

    /// Creates a processor that declines every payment with a reason.
    #[must_use]
    pub fn declining(reason: &str) -> Self {
        Self {
            decline_reason: Some(reason.to_owned()),
        }
    }
}

impl PaymentProcessor for SimulatedPaymentProcessor {
    fn process(&self, booking: &Booking) -> PaymentOutcome {
        self.decline_reason.as_ref().map_or_else(
            || {
                tracing::debug!(
                    booking_id = booking.id.value(),
                    total = %booking.total_price,
                    "simulated payment approved"
                );
                PaymentOutcome::Approved
            },
            |reason| PaymentOutcome::Declined {
                reason: reason.clone(),
            },
        )
    }
}
