// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Mutating handlers enforce authorization first, translate the request
//! into domain types, drive the engine, and record the resulting audit
//! event before returning. Domain and core errors are translated
//! explicitly and never leaked.

use std::str::FromStr;
use stay_reserve::{
    AuditLog, BookingLedger, BookingTransition, PaymentOutcome, PaymentProcessor, RoomCatalog,
    RoomTransition,
};
use stay_reserve_audit::{Actor, Cause};
use stay_reserve_domain::{
    Booking, BookingDraft, BookingId, BookingStatus, PaymentStatus, Room, RoomId, StayQuote,
    compute_stay, filter_rooms,
};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AuditEventInfo, AuditTrailResponse, BookingInfo, CreateBookingRequest, CreateBookingResponse,
    DashboardSummaryResponse, GetBookingResponse, GetRoomResponse, ListBookingsResponse,
    ListRoomsResponse, ProcessPaymentRequest, ProcessPaymentResponse, QuoteStayRequest,
    QuoteStayResponse, RoomInfo, SearchRoomsRequest, SearchRoomsResponse,
    SetRoomAvailabilityRequest, SetRoomAvailabilityResponse, UpdateBookingStatusRequest,
    UpdateBookingStatusResponse, UpdatePaymentStatusRequest, UpdatePaymentStatusResponse,
};

/// Lists the full catalog in catalog order.
#[must_use]
pub fn list_rooms(catalog: &RoomCatalog) -> ListRoomsResponse {
    ListRoomsResponse {
        rooms: catalog.rooms().iter().map(RoomInfo::from).collect(),
    }
}

/// Lists the featured subsequence of the catalog.
#[must_use]
pub fn list_featured_rooms(catalog: &RoomCatalog) -> ListRoomsResponse {
    ListRoomsResponse {
        rooms: catalog.featured().iter().map(RoomInfo::from).collect(),
    }
}

/// Looks up a single room.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the room does not exist.
pub fn get_room(catalog: &RoomCatalog, room_id: &str) -> Result<GetRoomResponse, ApiError> {
    let room: &Room = catalog
        .get(&RoomId::new(room_id))
        .map_err(translate_core_error)?;
    Ok(GetRoomResponse {
        room: RoomInfo::from(room),
    })
}

/// Searches the catalog against guest criteria.
///
/// When both dates are provided the search is calendar-aware: rooms with
/// a conflicting non-cancelled booking are excluded.
///
/// # Errors
///
/// Returns an error if a provided date fails to parse or the range is
/// inverted.
pub fn search_rooms(
    catalog: &RoomCatalog,
    ledger: &BookingLedger,
    request: &SearchRoomsRequest,
) -> Result<SearchRoomsResponse, ApiError> {
    let matches: Vec<Room> = filter_rooms(
        catalog.rooms(),
        &request.to_criteria(),
        ledger.bookings(),
    )
    .map_err(translate_domain_error)?;

    Ok(SearchRoomsResponse {
        rooms: matches.iter().map(RoomInfo::from).collect(),
    })
}

/// Prices a stay for a room and date range.
///
/// # Errors
///
/// Returns an error if the room does not exist, a date fails to parse, or
/// the range is inverted.
pub fn quote_stay(
    catalog: &RoomCatalog,
    request: &QuoteStayRequest,
) -> Result<QuoteStayResponse, ApiError> {
    let room: &Room = catalog
        .get(&RoomId::new(&request.room_id))
        .map_err(translate_core_error)?;

    let quote: StayQuote = compute_stay(room, &request.check_in, &request.check_out)
        .map_err(translate_domain_error)?;

    Ok(QuoteStayResponse {
        room_id: request.room_id.clone(),
        nights: quote.nights,
        nightly_rate_cents: room.price.cents(),
        total_price_cents: quote.total_price.cents(),
    })
}

/// Creates a booking from the guest booking form.
///
/// The only path that creates a booking; open to guests and staff alike.
///
/// # Errors
///
/// Returns an error if the room is unknown or unavailable, any draft
/// field is invalid, or the date range is rejected.
pub fn create_booking(
    catalog: &RoomCatalog,
    ledger: &mut BookingLedger,
    audit_log: &mut AuditLog,
    request: &CreateBookingRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: &Cause,
) -> Result<CreateBookingResponse, ApiError> {
    let actor: Actor = authenticated_actor.to_audit_actor();
    let draft: BookingDraft = request.to_draft();

    let transition: BookingTransition =
        stay_reserve::create_booking(catalog, ledger, &draft, &actor, cause)
            .map_err(translate_core_error)?;

    audit_log.record(transition.audit_event);

    let message: String = format!(
        "Booking {} created for '{}'",
        transition.booking.reference, transition.booking.room_name
    );
    Ok(CreateBookingResponse {
        booking: BookingInfo::from(&transition.booking),
        message,
    })
}

/// Settles payment for a booking through the injected processor.
///
/// On approval the payment moves to `paid` and a pending booking is
/// confirmed. On decline the booking is left untouched.
///
/// # Errors
///
/// Returns an error if the booking does not exist or its payment state
/// does not admit capture.
pub fn process_payment(
    ledger: &mut BookingLedger,
    audit_log: &mut AuditLog,
    processor: &dyn PaymentProcessor,
    request: &ProcessPaymentRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: &Cause,
) -> Result<ProcessPaymentResponse, ApiError> {
    let actor: Actor = authenticated_actor.to_audit_actor();
    let id: BookingId = BookingId::new(request.booking_id);

    let booking: Booking = ledger.get(id).map_err(translate_core_error)?.clone();

    // Reject early when capture is impossible, before touching the gateway
    booking
        .payment_status
        .validate_transition(PaymentStatus::Paid, booking.status)
        .map_err(translate_domain_error)?;

    match processor.process(&booking) {
        PaymentOutcome::Approved => {
            let paid: BookingTransition = ledger
                .update_payment_status(id, PaymentStatus::Paid, &actor, cause)
                .map_err(translate_core_error)?;
            audit_log.record(paid.audit_event);

            let current: Booking = paid.booking;
            let settled: Booking = if current.status == BookingStatus::Pending {
                let confirmed: BookingTransition = ledger
                    .update_status(id, BookingStatus::Confirmed, &actor, cause)
                    .map_err(translate_core_error)?;
                audit_log.record(confirmed.audit_event);
                confirmed.booking
            } else {
                current
            };

            Ok(ProcessPaymentResponse {
                booking: BookingInfo::from(&settled),
                approved: true,
                message: format!("Payment of {} captured", settled.total_price),
            })
        }
        PaymentOutcome::Declined { reason } => {
            tracing::warn!(
                booking_id = request.booking_id,
                reason = %reason,
                "payment declined"
            );
            Ok(ProcessPaymentResponse {
                booking: BookingInfo::from(&booking),
                approved: false,
                message: format!("Payment declined: {reason}"),
            })
        }
    }
}

/// Lists every booking in the ledger.
///
/// # Errors
///
/// Returns an error if the caller is not staff.
pub fn list_bookings(
    ledger: &BookingLedger,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListBookingsResponse, ApiError> {
    AuthorizationService::authorize_list_bookings(authenticated_actor)?;

    Ok(ListBookingsResponse {
        bookings: ledger.bookings().iter().map(BookingInfo::from).collect(),
    })
}

/// Looks up a single booking by its internal id.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the booking does not exist.
pub fn get_booking(ledger: &BookingLedger, booking_id: i64) -> Result<GetBookingResponse, ApiError> {
    let booking: &Booking = ledger
        .get(BookingId::new(booking_id))
        .map_err(translate_core_error)?;
    Ok(GetBookingResponse {
        booking: BookingInfo::from(booking),
    })
}

/// Lists the bookings made under a guest email.
#[must_use]
pub fn list_guest_bookings(ledger: &BookingLedger, email: &str) -> ListBookingsResponse {
    ListBookingsResponse {
        bookings: ledger
            .bookings_for_guest(email)
            .iter()
            .map(BookingInfo::from)
            .collect(),
    }
}

/// Transitions a booking's lifecycle status on behalf of staff.
///
/// # Errors
///
/// Returns an error if the caller is not staff, the status value is
/// unknown, the booking does not exist, or the transition is illegal.
pub fn update_booking_status(
    ledger: &mut BookingLedger,
    audit_log: &mut AuditLog,
    request: &UpdateBookingStatusRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: &Cause,
) -> Result<UpdateBookingStatusResponse, ApiError> {
    AuthorizationService::authorize_update_booking_status(authenticated_actor)?;

    let new_status: BookingStatus =
        BookingStatus::from_str(&request.new_status).map_err(translate_domain_error)?;
    let actor: Actor = authenticated_actor.to_audit_actor();

    let transition: BookingTransition = ledger
        .update_status(BookingId::new(request.booking_id), new_status, &actor, cause)
        .map_err(translate_core_error)?;
    audit_log.record(transition.audit_event);

    Ok(UpdateBookingStatusResponse {
        message: format!("Booking status updated to {new_status}"),
        booking: BookingInfo::from(&transition.booking),
    })
}

/// Transitions a booking's payment status on behalf of staff.
///
/// # Errors
///
/// Returns an error if the caller is not staff, the status value is
/// unknown, the booking does not exist, or the transition is illegal.
pub fn update_payment_status(
    ledger: &mut BookingLedger,
    audit_log: &mut AuditLog,
    request: &UpdatePaymentStatusRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: &Cause,
) -> Result<UpdatePaymentStatusResponse, ApiError> {
    AuthorizationService::authorize_update_payment_status(authenticated_actor)?;

    let new_status: PaymentStatus =
        PaymentStatus::from_str(&request.new_status).map_err(translate_domain_error)?;
    let actor: Actor = authenticated_actor.to_audit_actor();

    let transition: BookingTransition = ledger
        .update_payment_status(BookingId::new(request.booking_id), new_status, &actor, cause)
        .map_err(translate_core_error)?;
    audit_log.record(transition.audit_event);

    Ok(UpdatePaymentStatusResponse {
        message: format!("Payment status updated to {new_status}"),
        booking: BookingInfo::from(&transition.booking),
    })
}

/// Toggles a room's availability flag on behalf of staff.
///
/// # Errors
///
/// Returns an error if the caller is not staff or the room does not
/// exist.
pub fn set_room_availability(
    catalog: &mut RoomCatalog,
    audit_log: &mut AuditLog,
    request: &SetRoomAvailabilityRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: &Cause,
) -> Result<SetRoomAvailabilityResponse, ApiError> {
    AuthorizationService::authorize_set_room_availability(authenticated_actor)?;

    let actor: Actor = authenticated_actor.to_audit_actor();
    let transition: RoomTransition = catalog
        .set_availability(
            &RoomId::new(&request.room_id),
            request.available,
            &actor,
            cause,
        )
        .map_err(translate_core_error)?;
    audit_log.record(transition.audit_event);

    Ok(SetRoomAvailabilityResponse {
        message: format!(
            "Room '{}' marked {}",
            transition.room.name,
            if request.available {
                "available"
            } else {
                "unavailable"
            }
        ),
        room: RoomInfo::from(&transition.room),
    })
}

/// Computes the aggregate counts for the staff dashboard.
///
/// # Errors
///
/// Returns an error if the caller is not staff.
pub fn dashboard_summary(
    catalog: &RoomCatalog,
    ledger: &BookingLedger,
    authenticated_actor: &AuthenticatedActor,
) -> Result<DashboardSummaryResponse, ApiError> {
    AuthorizationService::authorize_view_dashboard(authenticated_actor)?;

    Ok(DashboardSummaryResponse {
        total_bookings: ledger.bookings().len(),
        confirmed_bookings: ledger
            .bookings()
            .iter()
            .filter(|b| b.status == BookingStatus::Confirmed)
            .count(),
        pending_payments: ledger
            .bookings()
            .iter()
            .filter(|b| b.payment_status == PaymentStatus::Pending)
            .count(),
        available_rooms: catalog.rooms().iter().filter(|r| r.available).count(),
    })
}

/// Returns the full audit trail.
///
/// # Errors
///
/// Returns an error if the caller is not staff.
pub fn audit_trail(
    audit_log: &AuditLog,
    authenticated_actor: &AuthenticatedActor,
) -> Result<AuditTrailResponse, ApiError> {
    AuthorizationService::authorize_view_audit_trail(authenticated_actor)?;

    Ok(AuditTrailResponse {
        events: audit_log.events().iter().map(AuditEventInfo::from).collect(),
    })
}
