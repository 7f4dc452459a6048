// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Booking, BookingDraft, BookingId, BookingStatus, Money, PaymentStatus, ReferenceCode, Room,
    RoomId,
};
use time::macros::datetime;

pub fn create_test_room(id: &str, price_dollars: i64, capacity: u8) -> Room {
    Room::new(
        RoomId::new(id),
        format!("Room {id}"),
        String::from("A comfortable room for testing."),
        String::from("Comfortable room"),
        Money::from_dollars(price_dollars),
        capacity,
        vec![String::from("/placeholder.svg")],
        vec![String::from("Free Wi-Fi"), String::from("Flat-screen TV")],
        30,
        String::from("Queen"),
        false,
        true,
    )
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

pub fn create_test_booking(id: i64, room_id: &str, check_in: &str, check_out: &str) -> Booking {
    Booking {
        id: BookingId::new(id),
        reference: ReferenceCode::new(&format!("REF{id}AB")),
        room_id: RoomId::new(room_id),
        room_name: format!("Room {room_id}"),
        guest_name: String::from("John Smith"),
        guest_email: String::from("john.smith@example.com"),
        guest_phone: String::from("555-123-4567"),
        check_in: crate::parse_instant(check_in).unwrap(),
        check_out: crate::parse_instant(check_out).unwrap(),
        adults: 2,
        children: 0,
        special_requests: None,
        total_price: Money::from_dollars(995),
        status: BookingStatus::Confirmed,
        payment_status: PaymentStatus::Paid,
        created_at: datetime!(2025-03-25 09:45:00 UTC),
    }
}
