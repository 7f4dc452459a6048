// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Currency amounts in integer minor units.
//!
//! All prices are carried as whole cents. Arithmetic is checked; an
//! operation that would overflow fails rather than wrapping or silently
//! truncating.

use serde::{Deserialize, Serialize};

/// A currency amount in integer cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Zero cents.
    pub const ZERO: Self = Self { cents: 0 };

    /// Creates a `Money` from a cent count.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a `Money` from a whole-dollar amount.
    ///
    /// Saturates at the representable bounds rather than wrapping.
    #[must_use]
    pub const fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars.saturating_mul(100),
        }
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns whether the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Multiplies the amount by a count, failing on overflow.
    #[must_use]
    pub const fn checked_mul(self, count: i64) -> Option<Self> {
        match self.cents.checked_mul(count) {
            Some(cents) => Some(Self { cents }),
            None => None,
        }
    }

    /// Adds two amounts, failing on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.cents.checked_add(other.cents) {
            Some(cents) => Some(Self { cents }),
            None => None,
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign: &str = if self.cents < 0 { "-" } else { "" };
        let magnitude: i64 = self.cents.abs();
        write!(f, "{sign}${}.{:02}", magnitude / 100, magnitude % 100)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars_scales_to_cents() {
        assert_eq!(Money::from_dollars(199).cents(), 19_900);
        assert_eq!(Money::from_dollars(0).cents(), 0);
    }

    #[test]
    fn test_checked_mul_exact() {
        let rate: Money = Money::from_dollars(199);
        let total: Money = rate.checked_mul(5).unwrap();
        assert_eq!(total, Money::from_dollars(995));
    }

    #[test]
    fn test_checked_mul_overflow_fails() {
        let rate: Money = Money::from_cents(i64::MAX);
        assert!(rate.checked_mul(2).is_none());
    }

    #[test]
    fn test_checked_add() {
        let subtotal: Money = Money::from_dollars(995);
        assert_eq!(
            subtotal.checked_add(Money::from_cents(50)),
            Some(Money::from_cents(99_550))
        );
        assert!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)).is_none());
    }

    #[test]
    fn test_display_renders_minor_units() {
        assert_eq!(Money::from_cents(19_900).to_string(), "$199.00");
        assert_eq!(Money::from_cents(105).to_string(), "$1.05");
        assert_eq!(Money::from_cents(-250).to_string(), "-$2.50");
    }

    #[test]
    fn test_is_positive() {
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::from_cents(-1).is_positive());
    }
}
