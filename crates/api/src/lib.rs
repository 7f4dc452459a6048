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
    clippy::all
)]

mod auth;
mod csv_inventory;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use csv_inventory::{InventoryImportError, read_inventory_csv};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    audit_trail, create_booking, dashboard_summary, get_booking, get_room, list_bookings,
    list_featured_rooms, list_guest_bookings, list_rooms, process_payment, quote_stay,
    search_rooms, set_room_availability, update_booking_status, update_payment_status,
};
pub use request_response::{
    AuditEventInfo, AuditTrailResponse, BookingInfo, CreateBookingRequest, CreateBookingResponse,
    DashboardSummaryResponse, GetBookingResponse, GetRoomResponse, ListBookingsResponse,
    ListRoomsResponse, ProcessPaymentRequest, ProcessPaymentResponse, QuoteStayRequest,
    QuoteStayResponse, RoomInfo, SearchRoomsRequest, SearchRoomsResponse,
    SetRoomAvailabilityRequest, SetRoomAvailabilityResponse, UpdateBookingStatusRequest,
    UpdateBookingStatusResponse, UpdatePaymentStatusRequest, UpdatePaymentStatusResponse,
};
