// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_booking, create_test_room};
use crate::{
    Booking, BookingStatus, DomainError, Money, Room, RoomFilterCriteria, filter_rooms,
};

fn catalog() -> Vec<Room> {
    vec![
        create_test_room("1", 199, 2),
        create_test_room("2", 349, 2),
        create_test_room("3", 249, 4),
        create_test_room("4", 149, 2),
    ]
}

#[test]
fn test_unbounded_criteria_return_catalog_in_order() {
    let rooms: Vec<Room> = catalog();
    let criteria: RoomFilterCriteria = RoomFilterCriteria {
        min_price: Some(Money::ZERO),
        max_price: Some(Money::from_cents(i64::MAX)),
        guests: Some(0),
        ..RoomFilterCriteria::default()
    };

    let matches: Vec<Room> = filter_rooms(&rooms, &criteria, &[]).unwrap();

    assert_eq!(matches, rooms);
}

#[test]
fn test_default_criteria_return_catalog_unchanged() {
    let rooms: Vec<Room> = catalog();

    let matches: Vec<Room> = filter_rooms(&rooms, &RoomFilterCriteria::default(), &[]).unwrap();

    assert_eq!(matches, rooms);
}

#[test]
fn test_price_band_is_inclusive() {
    let rooms: Vec<Room> = catalog();
    let criteria: RoomFilterCriteria = RoomFilterCriteria {
        min_price: Some(Money::from_dollars(149)),
        max_price: Some(Money::from_dollars(249)),
        ..RoomFilterCriteria::default()
    };

    let matches: Vec<Room> = filter_rooms(&rooms, &criteria, &[]).unwrap();

    let ids: Vec<&str> = matches.iter().map(|r| r.id.value()).collect();
    assert_eq!(ids, vec!["1", "3", "4"]);
}

#[test]
fn test_capacity_filter() {
    let rooms: Vec<Room> = catalog();
    let criteria: RoomFilterCriteria = RoomFilterCriteria {
        guests: Some(3),
        ..RoomFilterCriteria::default()
    };

    let matches: Vec<Room> = filter_rooms(&rooms, &criteria, &[]).unwrap();

    let ids: Vec<&str> = matches.iter().map(|r| r.id.value()).collect();
    assert_eq!(ids, vec!["3"]);
}

#[test]
fn test_over_capacity_guest_count_returns_empty() {
    let rooms: Vec<Room> = catalog();
    let criteria: RoomFilterCriteria = RoomFilterCriteria {
        guests: Some(5),
        ..RoomFilterCriteria::default()
    };

    let matches: Vec<Room> = filter_rooms(&rooms, &criteria, &[]).unwrap();

    assert!(matches.is_empty());
}

#[test]
fn test_overlapping_booking_excludes_room() {
    let rooms: Vec<Room> = catalog();
    let bookings: Vec<Booking> = vec![create_test_booking(1, "1", "2025-04-10", "2025-04-15")];
    let criteria: RoomFilterCriteria = RoomFilterCriteria {
        check_in: Some(String::from("2025-04-12")),
        check_out: Some(String::from("2025-04-14")),
        ..RoomFilterCriteria::default()
    };

    let matches: Vec<Room> = filter_rooms(&rooms, &criteria, &bookings).unwrap();

    let ids: Vec<&str> = matches.iter().map(|r| r.id.value()).collect();
    assert_eq!(ids, vec!["2", "3", "4"]);
}

#[test]
fn test_back_to_back_stays_do_not_conflict() {
    // Departure day equals arrival day: [10th, 15th) then [15th, 18th)
    let rooms: Vec<Room> = catalog();
    let bookings: Vec<Booking> = vec![create_test_booking(1, "1", "2025-04-10", "2025-04-15")];
    let criteria: RoomFilterCriteria = RoomFilterCriteria {
        check_in: Some(String::from("2025-04-15")),
        check_out: Some(String::from("2025-04-18")),
        ..RoomFilterCriteria::default()
    };

    let matches: Vec<Room> = filter_rooms(&rooms, &criteria, &bookings).unwrap();

    assert!(matches.iter().any(|r| r.id.value() == "1"));
}

#[test]
fn test_cancelled_bookings_do_not_block() {
    let rooms: Vec<Room> = catalog();
    let mut booking: Booking = create_test_booking(1, "1", "2025-04-10", "2025-04-15");
    booking.status = BookingStatus::Cancelled;
    let criteria: RoomFilterCriteria = RoomFilterCriteria {
        check_in: Some(String::from("2025-04-12")),
        check_out: Some(String::from("2025-04-14")),
        ..RoomFilterCriteria::default()
    };

    let matches: Vec<Room> = filter_rooms(&rooms, &criteria, &[booking]).unwrap();

    assert!(matches.iter().any(|r| r.id.value() == "1"));
}

#[test]
fn test_unavailable_room_excluded_when_dates_given() {
    let mut rooms: Vec<Room> = catalog();
    rooms[0].available = false;
    let criteria: RoomFilterCriteria = RoomFilterCriteria {
        check_in: Some(String::from("2025-04-12")),
        check_out: Some(String::from("2025-04-14")),
        ..RoomFilterCriteria::default()
    };

    let matches: Vec<Room> = filter_rooms(&rooms, &criteria, &[]).unwrap();

    assert!(!matches.iter().any(|r| r.id.value() == "1"));
}

#[test]
fn test_reversed_date_range_rejected() {
    let rooms: Vec<Room> = catalog();
    let criteria: RoomFilterCriteria = RoomFilterCriteria {
        check_in: Some(String::from("2025-04-14")),
        check_out: Some(String::from("2025-04-12")),
        ..RoomFilterCriteria::default()
    };

    let result = filter_rooms(&rooms, &criteria, &[]);

    assert!(matches!(result, Err(DomainError::InvalidDateRange { .. })));
}

#[test]
fn test_filtering_does_not_mutate_catalog() {
    let rooms: Vec<Room> = catalog();
    let before: Vec<Room> = rooms.clone();
    let criteria: RoomFilterCriteria = RoomFilterCriteria {
        guests: Some(3),
        ..RoomFilterCriteria::default()
    };

    let _ = filter_rooms(&rooms, &criteria, &[]).unwrap();

    assert_eq!(rooms, before);
}
