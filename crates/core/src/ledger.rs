// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::reference::generate_reference_code;
use stay_reserve_audit::{Action, Actor, AuditEvent, AuditSubject, Cause, StateSnapshot};
use stay_reserve_domain::{
    Booking, BookingDraft, BookingId, BookingStatus, PaymentStatus, ReferenceCode, Room, RoomId,
    StayQuote, parse_instant, validate_draft,
};
use time::OffsetDateTime;

/// The single source of truth for booking records.
///
/// Bookings are created through [`create`](BookingLedger::create) and
/// mutated only through the explicit transition operations. Every
/// mutation validates fully before any stored record changes, so a failed
/// operation leaves the ledger exactly as it was. Bookings are never
/// deleted; they end in the terminal `cancelled` or `completed` states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
    next_id: i64,
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a successful ledger mutation.
///
/// Mutations are atomic: they either succeed completely and produce an
/// audit event, or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingTransition {
    /// The booking after the mutation.
    pub booking: Booking,
    /// The audit event recording this mutation.
    pub audit_event: AuditEvent,
}

fn status_snapshot(booking: &Booking) -> StateSnapshot {
    StateSnapshot::new(format!(
        "status={},payment={}",
        booking.status, booking.payment_status
    ))
}

impl BookingLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bookings: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns every booking in creation order.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Looks up a booking by its internal id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BookingNotFound` if no booking has the id.
    pub fn get(&self, id: BookingId) -> Result<&Booking, CoreError> {
        self.bookings
            .iter()
            .find(|booking| booking.id == id)
            .ok_or_else(|| {
                CoreError::DomainViolation(stay_reserve_domain::DomainError::BookingNotFound {
                    booking_id: id.value(),
                })
            })
    }

    /// Looks up a booking by its public reference code.
    #[must_use]
    pub fn find_by_reference(&self, reference: &ReferenceCode) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|booking| &booking.reference == reference)
    }

    /// Returns the bookings made under a guest email, in creation order.
    ///
    /// Email matching is case-insensitive.
    #[must_use]
    pub fn bookings_for_guest(&self, email: &str) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|booking| booking.guest_email.eq_ignore_ascii_case(email))
            .cloned()
            .collect()
    }

    /// Returns the bookings held against a room, in creation order.
    #[must_use]
    pub fn bookings_for_room(&self, room_id: &RoomId) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|booking| &booking.room_id == room_id)
            .cloned()
            .collect()
    }

    /// Creates a booking from a validated request.
    ///
    /// Assigns the internal id and a ledger-unique reference code, stamps
    /// the creation time, and stores the booking in the initial
    /// `pending`/`pending` state. The room-name snapshot and total price
    /// are fixed here and never recomputed.
    ///
    /// # Arguments
    ///
    /// * `room` - The resolved room being booked
    /// * `draft` - The guest's draft
    /// * `quote` - The priced stay for the draft's date range
    /// * `actor` - The actor performing this action
    /// * `cause` - The cause or reason for this action
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any draft field violates the creation invariants
    /// - Either date fails to parse
    /// - Reference-code generation exhausts its retry budget
    pub fn create(
        &mut self,
        room: &Room,
        draft: &BookingDraft,
        quote: StayQuote,
        actor: &Actor,
        cause: &Cause,
    ) -> Result<BookingTransition, CoreError> {
        validate_draft(draft, room.capacity)?;

        let check_in: OffsetDateTime = parse_instant(&draft.check_in)?;
        let check_out: OffsetDateTime = parse_instant(&draft.check_out)?;

        let reference: ReferenceCode =
            generate_reference_code(|candidate| self.find_by_reference(candidate).is_some())?;

        let before: StateSnapshot =
            StateSnapshot::new(format!("bookings_count={}", self.bookings.len()));

        let booking: Booking = Booking {
            id: BookingId::new(self.next_id),
            reference,
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            guest_name: draft.guest_name(),
            guest_email: draft.email.trim().to_owned(),
            guest_phone: draft.phone.trim().to_owned(),
            check_in,
            check_out,
            adults: draft.adults,
            children: draft.children,
            special_requests: draft.special_requests.clone(),
            total_price: quote.total_price,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            created_at: OffsetDateTime::now_utc(),
        };
        self.next_id += 1;

        let after: StateSnapshot = status_snapshot(&booking);

        tracing::info!(
            booking_id = booking.id.value(),
            reference = %booking.reference,
            room_id = %booking.room_id,
            nights = quote.nights,
            total = %booking.total_price,
            "booking created"
        );

        let action: Action = Action::new(
            String::from("CreateBooking"),
            Some(format!(
                "Booked '{}' for {} ({} nights, {})",
                booking.room_name, booking.guest_name, quote.nights, booking.total_price
            )),
        );
        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            cause.clone(),
            action,
            AuditSubject::Booking(booking.id),
            before,
            after,
        );

        self.bookings.push(booking.clone());

        Ok(BookingTransition {
            booking,
            audit_event,
        })
    }

    /// Transitions a booking's lifecycle status.
    ///
    /// The transition is validated against the current stored state, so a
    /// caller that lost a race observes the applied state and fails if the
    /// move is no longer legal.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or the transition is
    /// not permitted.
    pub fn update_status(
        &mut self,
        id: BookingId,
        new_status: BookingStatus,
        actor: &Actor,
        cause: &Cause,
    ) -> Result<BookingTransition, CoreError> {
        let booking: &mut Booking = self.find_mut(id)?;

        booking.status.validate_transition(new_status)?;

        let before: StateSnapshot = status_snapshot(booking);
        let previous: BookingStatus = booking.status;
        booking.status = new_status;
        let after: StateSnapshot = status_snapshot(booking);

        tracing::info!(
            booking_id = booking.id.value(),
            from = %previous,
            to = %new_status,
            "booking status updated"
        );

        let action: Action = Action::new(
            String::from("UpdateStatus"),
            Some(format!("Status changed from {previous} to {new_status}")),
        );
        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            cause.clone(),
            action,
            AuditSubject::Booking(booking.id),
            before,
            after,
        );

        Ok(BookingTransition {
            booking: booking.clone(),
            audit_event,
        })
    }

    /// Transitions a booking's payment status.
    ///
    /// A move to `paid` is rejected while the booking is cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or the transition is
    /// not permitted.
    pub fn update_payment_status(
        &mut self,
        id: BookingId,
        new_status: PaymentStatus,
        actor: &Actor,
        cause: &Cause,
    ) -> Result<BookingTransition, CoreError> {
        let booking: &mut Booking = self.find_mut(id)?;

        booking
            .payment_status
            .validate_transition(new_status, booking.status)?;

        let before: StateSnapshot = status_snapshot(booking);
        let previous: PaymentStatus = booking.payment_status;
        booking.payment_status = new_status;
        let after: StateSnapshot = status_snapshot(booking);

        tracing::info!(
            booking_id = booking.id.value(),
            from = %previous,
            to = %new_status,
            "payment status updated"
        );

        let action: Action = Action::new(
            String::from("UpdatePaymentStatus"),
            Some(format!("Payment changed from {previous} to {new_status}")),
        );
        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            cause.clone(),
            action,
            AuditSubject::Booking(booking.id),
            before,
            after,
        );

        Ok(BookingTransition {
            booking: booking.clone(),
            audit_event,
        })
    }

    fn find_mut(&mut self, id: BookingId) -> Result<&mut Booking, CoreError> {
        self.bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or_else(|| {
                CoreError::DomainViolation(stay_reserve_domain::DomainError::BookingNotFound {
                    booking_id: id.value(),
                })
            })
    }
}
