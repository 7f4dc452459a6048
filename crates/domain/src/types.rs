// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_status::{BookingStatus, PaymentStatus};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identifies a room within the catalog.
///
/// Room identifiers are opaque strings assigned at catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId {
    value: String,
}

impl RoomId {
    /// Creates a new `RoomId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The canonical internal identifier for a booking.
///
/// Assigned sequentially by the ledger. Distinct from the public
/// [`ReferenceCode`], which guests share with staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId {
    value: i64,
}

impl BookingId {
    /// Creates a `BookingId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The short public identifier for a booking.
///
/// Reference codes are normalized to uppercase so guests can read them
/// over the phone without case ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceCode {
    value: String,
}

impl ReferenceCode {
    /// Creates a new `ReferenceCode`.
    ///
    /// # Arguments
    ///
    /// * `value` - The code value (will be normalized to uppercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_uppercase(),
        }
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A bookable inventory unit.
///
/// Rooms are created at catalog initialization and are immutable for the
/// process lifetime, with one exception: staff may toggle the
/// availability flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// The room identifier.
    pub id: RoomId,
    /// Display name (e.g., "Deluxe King Room").
    pub name: String,
    /// Full marketing description.
    pub description: String,
    /// One-line description for listing views.
    pub short_description: String,
    /// Nightly rate in cents.
    pub price: Money,
    /// Maximum occupant count.
    pub capacity: u8,
    /// Ordered image references.
    pub images: Vec<String>,
    /// Amenity labels.
    pub amenities: Vec<String>,
    /// Floor area in square meters.
    pub size_sqm: u16,
    /// Bed configuration label (e.g., "King", "Two Queens").
    pub bed_type: String,
    /// Whether the room is highlighted on the landing page.
    pub featured: bool,
    /// Whether the room can currently be booked.
    pub available: bool,
}

impl Room {
    /// Creates a new `Room`.
    #[must_use]
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub const fn new(
        id: RoomId,
        name: String,
        description: String,
        short_description: String,
        price: Money,
        capacity: u8,
        images: Vec<String>,
        amenities: Vec<String>,
        size_sqm: u16,
        bed_type: String,
        featured: bool,
        available: bool,
    ) -> Self {
        Self {
            id,
            name,
            description,
            short_description,
            price,
            capacity,
            images,
            amenities,
            size_sqm,
            bed_type,
            featured,
            available,
        }
    }
}

/// A guest's reservation of a room for a date range.
///
/// Bookings are created only through the booking factory and mutated only
/// through the ledger's explicit transition operations. They are never
/// deleted; completed and cancelled are terminal states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The canonical internal identifier.
    pub id: BookingId,
    /// The public reference code.
    pub reference: ReferenceCode,
    /// The booked room.
    pub room_id: RoomId,
    /// Room name snapshot taken at creation, kept for historical display
    /// even if the room record later changes.
    pub room_name: String,
    /// The guest's full name.
    pub guest_name: String,
    /// The guest's email address.
    pub guest_email: String,
    /// The guest's phone number.
    pub guest_phone: String,
    /// Check-in instant (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub check_in: OffsetDateTime,
    /// Check-out instant (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub check_out: OffsetDateTime,
    /// Adult occupant count (at least 1).
    pub adults: u8,
    /// Child occupant count.
    pub children: u8,
    /// Free-text requests from the booking form.
    pub special_requests: Option<String>,
    /// Total stay price, computed once at creation and never recomputed
    /// on later room price changes.
    pub total_price: Money,
    /// Booking lifecycle status.
    pub status: BookingStatus,
    /// Payment lifecycle status.
    pub payment_status: PaymentStatus,
    /// When the booking was created (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A guest-supplied booking request, prior to validation.
///
/// Dates arrive as raw strings from the booking form and are parsed during
/// stay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    /// The room to book.
    pub room_id: RoomId,
    /// The guest's first name.
    pub first_name: String,
    /// The guest's last name.
    pub last_name: String,
    /// The guest's email address.
    pub email: String,
    /// The guest's phone number.
    pub phone: String,
    /// Requested check-in (ISO-8601 date or RFC 3339 instant).
    pub check_in: String,
    /// Requested check-out (ISO-8601 date or RFC 3339 instant).
    pub check_out: String,
    /// Adult occupant count.
    pub adults: u8,
    /// Child occupant count.
    pub children: u8,
    /// Free-text requests, if any.
    pub special_requests: Option<String>,
}

impl BookingDraft {
    /// Returns the guest's full name as stored on the booking.
    #[must_use]
    pub fn guest_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Guest-supplied room search criteria.
///
/// Transient: exists only for the duration of one filter operation. All
/// provided criteria are conjunctive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoomFilterCriteria {
    /// Requested check-in, if the guest picked dates.
    pub check_in: Option<String>,
    /// Requested check-out, if the guest picked dates.
    pub check_out: Option<String>,
    /// Occupant count the room must hold.
    pub guests: Option<u8>,
    /// Inclusive lower price bound.
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    pub max_price: Option<Money>,
}
