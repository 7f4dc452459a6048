// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingLedger, BookingTransition, RoomCatalog};
use stay_reserve_audit::{Actor, Cause};
use stay_reserve_domain::{BookingDraft, Money, Room, RoomId};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("staff-107"), String::from("staff"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Staff request"))
}

pub fn create_test_room(id: &str, price_dollars: i64, capacity: u8) -> Room {
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
        false,
        true,
    )
}

pub fn create_test_catalog() -> RoomCatalog {
    RoomCatalog::new(vec![
        create_test_room("1", 199, 2),
        create_test_room("2", 349, 2),
        create_test_room("3", 249, 4),
    ])
    .unwrap()
}

pub fn create_test_draft(room_id: &str) -> BookingDraft {
    BookingDraft {
        room_id: RoomId::new(room_id),
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

pub fn create_stored_booking(
    catalog: &RoomCatalog,
    ledger: &mut BookingLedger,
    room_id: &str,
) -> BookingTransition {
    crate::create_booking(
        catalog,
        ledger,
        &create_test_draft(room_id),
        &create_test_actor(),
        &create_test_cause(),
    )
    .unwrap()
}
