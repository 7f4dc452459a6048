// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking_status;
mod error;
mod money;
mod room_filter;
mod stay;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking_status::{BookingStatus, PaymentStatus};
pub use error::DomainError;
pub use money::Money;
pub use room_filter::filter_rooms;
pub use stay::{StayQuote, compute_stay, compute_stay_between, parse_instant};
pub use types::{
    Booking, BookingDraft, BookingId, ReferenceCode, Room, RoomFilterCriteria, RoomId,
};
pub use validation::{FieldViolation, validate_draft, validate_room_definition};
