// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::{AuthenticatedActor, Role};
use crate::request_response::{CreateBookingRequest, CreateBookingResponse};
use stay_reserve::{AuditLog, BookingLedger, RoomCatalog};
use stay_reserve_audit::Cause;
use stay_reserve_domain::{Money, Room, RoomId};

pub fn staff_actor() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("staff-107"), Role::Staff)
}

pub fn guest_actor() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("guest-session-1"), Role::Guest)
}

pub fn test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Test request"))
}

pub fn test_room(id: &str, price_dollars: i64, capacity: u8, featured: bool) -> Room {
    Room::new(
        RoomId::new(id),
        format!("Room {id}"),
        String::from("A comfortable room for testing."),
        String::from("Comfortable room"),
        Money::from_dollars(price_dollars),
        capacity,
        vec![String::from("/placeholder.svg")],
        vec![String::from("Free Wi-Fi")],
        30,
        String::from("Queen"),
        featured,
        true,
    )
}

pub fn test_catalog() -> RoomCatalog {
    RoomCatalog::new(vec![
        test_room("1", 199, 2, true),
        test_room("2", 349, 2, false),
        test_room("3", 249, 4, true),
    ])
    .unwrap()
}

pub fn booking_request(room_id: &str) -> CreateBookingRequest {
    CreateBookingRequest {
        room_id: room_id.to_owned(),
        first_name: String::from("John"),
        last_name: String::from("Smith"),
        email: String::from("john.smith@example.com"),
        phone: String::from("555-123-4567"),
        check_in: String::from("2025-04-10"),
        check_out: String::from("2025-04-15"),
        adults: 2,
        children: 0,
        special_requests: None,
    }
}

pub fn create_booking_via_api(
    catalog: &RoomCatalog,
    ledger: &mut BookingLedger,
    audit_log: &mut AuditLog,
    room_id: &str,
) -> CreateBookingResponse {
    crate::create_booking(
        catalog,
        ledger,
        audit_log,
        &booking_request(room_id),
        &guest_actor(),
        &test_cause(),
    )
    .unwrap()
}
