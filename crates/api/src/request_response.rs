// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the API boundary.
//!
//! These are distinct from domain types and represent the API contract:
//! money crosses the boundary as integer cents, dates as ISO-8601
//! strings.

use serde::{Deserialize, Serialize};
use stay_reserve_audit::{AuditEvent, AuditSubject};
use stay_reserve_domain::{Booking, Money, Room, RoomFilterCriteria, RoomId};
use time::OffsetDateTime;

/// A room as exposed through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    /// The room identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// One-line description for listing views.
    pub short_description: String,
    /// Nightly rate in cents.
    pub price_cents: i64,
    /// Maximum occupant count.
    pub capacity: u8,
    /// Ordered image references.
    pub images: Vec<String>,
    /// Amenity labels.
    pub amenities: Vec<String>,
    /// Floor area in square meters.
    pub size_sqm: u16,
    /// Bed configuration label.
    pub bed_type: String,
    /// Whether the room is highlighted on the landing page.
    pub featured: bool,
    /// Whether the room can currently be booked.
    pub available: bool,
}

impl From<&Room> for RoomInfo {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.value().to_owned(),
            name: room.name.clone(),
            description: room.description.clone(),
            short_description: room.short_description.clone(),
            price_cents: room.price.cents(),
            capacity: room.capacity,
            images: room.images.clone(),
            amenities: room.amenities.clone(),
            size_sqm: room.size_sqm,
            bed_type: room.bed_type.clone(),
            featured: room.featured,
            available: room.available,
        }
    }
}

/// A booking as exposed through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInfo {
    /// The internal booking identifier.
    pub id: i64,
    /// The public reference code.
    pub reference: String,
    /// The booked room's identifier.
    pub room_id: String,
    /// Room name snapshot from creation time.
    pub room_name: String,
    /// The guest's full name.
    pub guest_name: String,
    /// The guest's email address.
    pub guest_email: String,
    /// The guest's phone number.
    pub guest_phone: String,
    /// Check-in instant.
    #[serde(with = "time::serde::rfc3339")]
    pub check_in: OffsetDateTime,
    /// Check-out instant.
    #[serde(with = "time::serde::rfc3339")]
    pub check_out: OffsetDateTime,
    /// Adult occupant count.
    pub adults: u8,
    /// Child occupant count.
    pub children: u8,
    /// Free-text requests from the booking form.
    pub special_requests: Option<String>,
    /// Total stay price in cents.
    pub total_price_cents: i64,
    /// Booking lifecycle status.
    pub status: String,
    /// Payment lifecycle status.
    pub payment_status: String,
    /// Creation instant.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<&Booking> for BookingInfo {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.value(),
            reference: booking.reference.value().to_owned(),
            room_id: booking.room_id.value().to_owned(),
            room_name: booking.room_name.clone(),
            guest_name: booking.guest_name.clone(),
            guest_email: booking.guest_email.clone(),
            guest_phone: booking.guest_phone.clone(),
            check_in: booking.check_in,
            check_out: booking.check_out,
            adults: booking.adults,
            children: booking.children,
            special_requests: booking.special_requests.clone(),
            total_price_cents: booking.total_price.cents(),
            status: booking.status.as_str().to_owned(),
            payment_status: booking.payment_status.as_str().to_owned(),
            created_at: booking.created_at,
        }
    }
}

/// API response listing rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoomsResponse {
    /// The rooms, in catalog order.
    pub rooms: Vec<RoomInfo>,
}

/// API response for a single room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRoomResponse {
    /// The room.
    pub room: RoomInfo,
}

/// API request to search rooms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchRoomsRequest {
    /// Requested check-in, if the guest picked dates.
    pub check_in: Option<String>,
    /// Requested check-out, if the guest picked dates.
    pub check_out: Option<String>,
    /// Occupant count the room must hold.
    pub guests: Option<u8>,
    /// Inclusive lower price bound in cents.
    pub min_price_cents: Option<i64>,
    /// Inclusive upper price bound in cents.
    pub max_price_cents: Option<i64>,
}

impl SearchRoomsRequest {
    /// Translates the request into domain filter criteria.
    #[must_use]
    pub fn to_criteria(&self) -> RoomFilterCriteria {
        RoomFilterCriteria {
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            guests: self.guests,
            min_price: self.min_price_cents.map(Money::from_cents),
            max_price: self.max_price_cents.map(Money::from_cents),
        }
    }
}

/// API response for a room search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRoomsResponse {
    /// The matching rooms, in catalog order.
    pub rooms: Vec<RoomInfo>,
}

/// API request to price a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteStayRequest {
    /// The room to price.
    pub room_id: String,
    /// Requested check-in.
    pub check_in: String,
    /// Requested check-out.
    pub check_out: String,
}

/// API response for a priced stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteStayResponse {
    /// The priced room.
    pub room_id: String,
    /// Whole-night count, rounded up.
    pub nights: i64,
    /// Nightly rate in cents.
    pub nightly_rate_cents: i64,
    /// Total stay price in cents.
    pub total_price_cents: i64,
}

/// API request to create a booking from the guest booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The room to book.
    pub room_id: String,
    /// The guest's first name.
    pub first_name: String,
    /// The guest's last name.
    pub last_name: String,
    /// The guest's email address.
    pub email: String,
    /// The guest's phone number.
    pub phone: String,
    /// Requested check-in.
    pub check_in: String,
    /// Requested check-out.
    pub check_out: String,
    /// Adult occupant count.
    pub adults: u8,
    /// Child occupant count.
    pub children: u8,
    /// Free-text requests, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl CreateBookingRequest {
    /// Translates the request into a domain booking draft.
    #[must_use]
    pub fn to_draft(&self) -> stay_reserve_domain::BookingDraft {
        stay_reserve_domain::BookingDraft {
            room_id: RoomId::new(&self.room_id),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            adults: self.adults,
            children: self.children,
            special_requests: self.special_requests.clone(),
        }
    }
}

/// API response for a created booking.
///
/// Carries everything the confirmation page displays: the reference code,
/// room name, dates, party size, and total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    /// The created booking.
    pub booking: BookingInfo,
    /// A success message.
    pub message: String,
}

/// API request to settle payment for a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessPaymentRequest {
    /// The booking to settle.
    pub booking_id: i64,
}

/// API response for a payment attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessPaymentResponse {
    /// The booking after the attempt.
    pub booking: BookingInfo,
    /// Whether the gateway approved the payment.
    pub approved: bool,
    /// A human-readable outcome message.
    pub message: String,
}

/// API response listing bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBookingsResponse {
    /// The bookings, in creation order.
    pub bookings: Vec<BookingInfo>,
}

/// API response for a single booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBookingResponse {
    /// The booking.
    pub booking: BookingInfo,
}

/// API request for a staff booking status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookingStatusRequest {
    /// The booking to transition.
    pub booking_id: i64,
    /// The target status (`pending`, `confirmed`, `cancelled`, `completed`).
    pub new_status: String,
}

/// API response for a booking status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookingStatusResponse {
    /// The booking after the transition.
    pub booking: BookingInfo,
    /// A success message.
    pub message: String,
}

/// API request for a staff payment status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePaymentStatusRequest {
    /// The booking to transition.
    pub booking_id: i64,
    /// The target status (`pending`, `paid`, `refunded`).
    pub new_status: String,
}

/// API response for a payment status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePaymentStatusResponse {
    /// The booking after the transition.
    pub booking: BookingInfo,
    /// A success message.
    pub message: String,
}

/// API request to toggle a room's availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRoomAvailabilityRequest {
    /// The room to update.
    pub room_id: String,
    /// The new availability flag.
    pub available: bool,
}

/// API response for an availability change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRoomAvailabilityResponse {
    /// The room after the change.
    pub room: RoomInfo,
    /// A success message.
    pub message: String,
}

/// Aggregate counts for the staff dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummaryResponse {
    /// Total bookings in the ledger.
    pub total_bookings: usize,
    /// Bookings currently confirmed.
    pub confirmed_bookings: usize,
    /// Bookings with payment still pending.
    pub pending_payments: usize,
    /// Rooms currently flagged available.
    pub available_rooms: usize,
}

/// One audit event as exposed through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventInfo {
    /// The actor's identifier.
    pub actor_id: String,
    /// The actor's type.
    pub actor_type: String,
    /// The cause identifier.
    pub cause_id: String,
    /// The cause description.
    pub cause_description: String,
    /// The action name.
    pub action: String,
    /// Optional action details.
    pub details: Option<String>,
    /// The record the event is scoped to (e.g., `booking:3`, `room:2`).
    pub subject: String,
    /// State before the transition.
    pub before: String,
    /// State after the transition.
    pub after: String,
}

impl From<&AuditEvent> for AuditEventInfo {
    fn from(event: &AuditEvent) -> Self {
        let subject: String = match &event.subject {
            AuditSubject::Booking(id) => format!("booking:{id}"),
            AuditSubject::Room(id) => format!("room:{id}"),
        };
        Self {
            actor_id: event.actor.id.clone(),
            actor_type: event.actor.actor_type.clone(),
            cause_id: event.cause.id.clone(),
            cause_description: event.cause.description.clone(),
            action: event.action.name.clone(),
            details: event.action.details.clone(),
            subject,
            before: event.before.data.clone(),
            after: event.after.data.clone(),
        }
    }
}

/// API response for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrailResponse {
    /// Every recorded event, in application order.
    pub events: Vec<AuditEventInfo>,
}
