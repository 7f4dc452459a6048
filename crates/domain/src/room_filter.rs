// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room search filtering.
//!
//! Selects catalog entries matching guest-supplied criteria. All provided
//! criteria are conjunctive, result order preserves catalog order, and
//! filtering never mutates the catalog.
//!
//! When a date range is provided, rooms with any non-cancelled booking
//! overlapping the requested `[check_in, check_out)` interval are
//! excluded, as are rooms flagged unavailable.

use crate::booking_status::BookingStatus;
use crate::error::DomainError;
use crate::stay::parse_instant;
use crate::types::{Booking, Room, RoomFilterCriteria};
use time::OffsetDateTime;

/// Filters rooms against guest-supplied criteria.
///
/// # Arguments
///
/// * `rooms` - The catalog entries, in catalog order
/// * `criteria` - The guest's criteria; absent fields are unbounded
/// * `bookings` - Existing bookings, consulted for calendar conflicts when
///   both dates are provided
///
/// # Returns
///
/// The matching subsequence of `rooms`, in catalog order.
///
/// # Errors
///
/// Returns an error if a provided date fails to parse, or if both dates
/// are provided and check-out does not fall strictly after check-in.
pub fn filter_rooms(
    rooms: &[Room],
    criteria: &RoomFilterCriteria,
    bookings: &[Booking],
) -> Result<Vec<Room>, DomainError> {
    let requested_span: Option<(OffsetDateTime, OffsetDateTime)> =
        match (&criteria.check_in, &criteria.check_out) {
            (Some(check_in), Some(check_out)) => {
                let start: OffsetDateTime = parse_instant(check_in)?;
                let end: OffsetDateTime = parse_instant(check_out)?;
                if end <= start {
                    return Err(DomainError::InvalidDateRange {
                        check_in: check_in.clone(),
                        check_out: check_out.clone(),
                    });
                }
                Some((start, end))
            }
            // A single date without its pair cannot bound a stay
            _ => None,
        };

    let matches: Vec<Room> = rooms
        .iter()
        .filter(|room| {
            if criteria.min_price.is_some_and(|min| room.price < min) {
                return false;
            }
            if criteria.max_price.is_some_and(|max| room.price > max) {
                return false;
            }
            if criteria.guests.is_some_and(|guests| room.capacity < guests) {
                return false;
            }
            if let Some((start, end)) = requested_span {
                if !room.available {
                    return false;
                }
                if !room_is_free(room, bookings, start, end) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect();

    Ok(matches)
}

/// Checks whether a room has no calendar conflict for the requested span.
///
/// A conflict is any non-cancelled booking for the room whose
/// `[check_in, check_out)` interval overlaps the requested interval.
fn room_is_free(
    room: &Room,
    bookings: &[Booking],
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> bool {
    !bookings.iter().any(|booking| {
        booking.room_id == room.id
            && booking.status != BookingStatus::Cancelled
            && booking.check_in < end
            && start < booking.check_out
    })
}
