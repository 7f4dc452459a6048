// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::RoomCatalog;
use crate::error::CoreError;
use crate::ledger::{BookingLedger, BookingTransition};
use stay_reserve_audit::{Actor, Cause};
use stay_reserve_domain::{
    BookingDraft, DomainError, Room, StayQuote, compute_stay, validate_draft,
};

/// Turns a guest's booking request into a stored booking.
///
/// This is the only path that creates a booking: it resolves the room,
/// validates the draft, prices the stay, and hands off to the ledger.
///
/// # Arguments
///
/// * `catalog` - The room catalog
/// * `ledger` - The booking ledger
/// * `draft` - The guest's draft
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// The fully materialized booking, including its reference code and total
/// price, together with the audit event for the creation.
///
/// # Errors
///
/// Returns an error if:
/// - The room does not exist (`RoomNotFound`)
/// - The room is flagged unavailable (`RoomUnavailable`)
/// - Any guest field violates the creation invariants (`ValidationFailed`)
/// - The date range is invalid (`InvalidDateRange` / `DateParseError`)
pub fn create_booking(
    catalog: &RoomCatalog,
    ledger: &mut BookingLedger,
    draft: &BookingDraft,
    actor: &Actor,
    cause: &Cause,
) -> Result<BookingTransition, CoreError> {
    let room: &Room = catalog.get(&draft.room_id)?;

    if !room.available {
        return Err(CoreError::DomainViolation(DomainError::RoomUnavailable {
            room_id: room.id.value().to_owned(),
        }));
    }

    validate_draft(draft, room.capacity)?;

    let quote: StayQuote = compute_stay(room, &draft.check_in, &draft.check_out)?;

    ledger.create(room, draft, quote, actor, cause)
}
