// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stay pricing calculation.
//!
//! Given a room and a date range, computes the night count and total
//! price. The calculation is pure and deterministic: identical inputs
//! yield identical output, with no reliance on the current time.
//!
//! ## Invariants
//!
//! - Check-out must fall strictly after check-in
//! - Nights are whole days, rounded up
//! - The total is exact to the cent; overflow fails rather than truncating

use crate::error::DomainError;
use crate::money::Money;
use crate::types::Room;
use time::OffsetDateTime;
use time::format_description::well_known::{Iso8601, Rfc3339};

/// Seconds in one night for night-count rounding.
const SECONDS_PER_DAY: i64 = 86_400;

/// The priced result of a stay calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayQuote {
    /// Whole-night count, rounded up.
    pub nights: i64,
    /// `nights` × the room's nightly rate.
    pub total_price: Money,
}

/// Parses an ISO-8601 value into a UTC instant.
///
/// Accepts both full RFC 3339 instants (`2025-04-10T14:00:00Z`) and plain
/// calendar dates (`2025-04-10`), which are read as midnight UTC. The
/// booking form sends dates; the staff tooling exchanges instants.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the value matches neither form.
pub fn parse_instant(value: &str) -> Result<OffsetDateTime, DomainError> {
    if let Ok(instant) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(instant);
    }

    time::Date::parse(value, &Iso8601::DEFAULT)
        .map(|date| date.midnight().assume_utc())
        .map_err(|e| DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        })
}

/// Computes the night count and total price for a stay.
///
/// # Arguments
///
/// * `room` - The room being priced
/// * `check_in` - Requested check-in (ISO-8601 date or RFC 3339 instant)
/// * `check_out` - Requested check-out (ISO-8601 date or RFC 3339 instant)
///
/// # Returns
///
/// A `StayQuote` with the night count and exact total.
///
/// # Errors
///
/// Returns an error if:
/// - Either date fails to parse
/// - Check-out does not fall strictly after check-in
/// - The total price overflows
pub fn compute_stay(
    room: &Room,
    check_in: &str,
    check_out: &str,
) -> Result<StayQuote, DomainError> {
    let check_in_instant: OffsetDateTime = parse_instant(check_in)?;
    let check_out_instant: OffsetDateTime = parse_instant(check_out)?;

    compute_stay_between(room, check_in_instant, check_out_instant)
}

/// Computes the night count and total price for already-parsed instants.
///
/// # Errors
///
/// Returns an error if check-out does not fall strictly after check-in,
/// or if the total price overflows.
pub fn compute_stay_between(
    room: &Room,
    check_in: OffsetDateTime,
    check_out: OffsetDateTime,
) -> Result<StayQuote, DomainError> {
    let seconds: i64 = (check_out - check_in).whole_seconds();
    if seconds <= 0 {
        return Err(DomainError::InvalidDateRange {
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        });
    }

    // Partial nights round up: a 14:00 arrival against an 11:00 departure
    // five days later is still five nights.
    // `seconds > 0` is guaranteed above, so this positive ceil-div matches
    // `seconds.div_ceil(SECONDS_PER_DAY)` (unstable for signed ints).
    let nights: i64 = (seconds - 1) / SECONDS_PER_DAY + 1;

    let total_price: Money = room
        .price
        .checked_mul(nights)
        .ok_or(DomainError::PriceOverflow { nights })?;

    Ok(StayQuote {
        nights,
        total_price,
    })
}
