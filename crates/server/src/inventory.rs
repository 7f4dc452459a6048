// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Built-in seed inventory.
//!
//! The default catalog the server opens with when no `--inventory` CSV is
//! supplied.

use stay_reserve_domain::{Money, Room, RoomId};

/// Returns the default room inventory, in catalog order.
#[must_use]
pub fn seed_rooms() -> Vec<Room> {
    vec![
        Room::new(
            RoomId::new("1"),
            String::from("Deluxe King Room"),
            String::from(
                "Our Deluxe King Room offers a spacious and elegant retreat with a comfortable \
                 king-sized bed, luxury linens, and a stunning view of the city skyline. The \
                 modern bathroom features premium amenities, a deep soaking tub, and a separate \
                 rain shower. Perfect for couples or business travelers seeking comfort and style.",
            ),
            String::from("Spacious room with king-sized bed and city view"),
            Money::from_dollars(199),
            2,
            vec![
                String::from("/placeholder.svg"),
                String::from("/placeholder.svg"),
                String::from("/placeholder.svg"),
            ],
            vec![
                String::from("Free Wi-Fi"),
                String::from("Flat-screen TV"),
                String::from("Air conditioning"),
                String::from("Minibar"),
                String::from("Coffee maker"),
                String::from("Safe"),
                String::from("Bathrobe"),
            ],
            35,
            String::from("King"),
            true,
            true,
        ),
        Room::new(
            RoomId::new("2"),
            String::from("Premium Ocean Suite"),
            String::from(
                "Indulge in luxury with our Premium Ocean Suite featuring panoramic ocean views, \
                 a separate living area, and a private balcony. The suite includes a king-sized \
                 bed with premium linens, a spacious bathroom with a jacuzzi tub, and exclusive \
                 access to our executive lounge. Perfect for those seeking a truly memorable stay.",
            ),
            String::from("Luxurious suite with ocean view and private balcony"),
            Money::from_dollars(349),
            2,
            vec![
                String::from("/placeholder.svg"),
                String::from("/placeholder.svg"),
                String::from("/placeholder.svg"),
            ],
            vec![
                String::from("Free Wi-Fi"),
                String::from("Flat-screen TV"),
                String::from("Air conditioning"),
                String::from("Private balcony"),
                String::from("Minibar"),
                String::from("Coffee maker"),
                String::from("Safe"),
                String::from("Bathrobe"),
                String::from("Executive lounge access"),
            ],
            55,
            String::from("King"),
            true,
            true,
        ),
        Room::new(
            RoomId::new("3"),
            String::from("Family Room"),
            String::from(
                "Our spacious Family Room is designed for comfort and convenience, featuring two \
                 queen beds and a pull-out sofa. Perfect for families, the room includes a small \
                 kitchenette, a dining area, and a large bathroom with a shower and tub \
                 combination. Enjoy quality time together in this homey and welcoming space.",
            ),
            String::from("Spacious room ideal for families with two queen beds"),
            Money::from_dollars(249),
            4,
            vec![
                String::from("/placeholder.svg"),
                String::from("/placeholder.svg"),
                String::from("/placeholder.svg"),
            ],
            vec![
                String::from("Free Wi-Fi"),
                String::from("Flat-screen TV"),
                String::from("Air conditioning"),
                String::from("Kitchenette"),
                String::from("Coffee maker"),
                String::from("Safe"),
                String::from("Extra beds available"),
            ],
            45,
            String::from("Two Queens"),
            false,
            true,
        ),
        Room::new(
            RoomId::new("4"),
            String::from("Standard Twin Room"),
            String::from(
                "Our comfortable Standard Twin Room features two single beds with quality linens, \
                 a work desk, and a modern bathroom with a shower. Designed with both business \
                 and leisure travelers in mind, this room offers all the essentials for a \
                 pleasant stay at a great value.",
            ),
            String::from("Cozy room with twin beds, perfect for friends or colleagues"),
            Money::from_dollars(149),
            2,
            vec![
                String::from("/placeholder.svg"),
                String::from("/placeholder.svg"),
                String::from("/placeholder.svg"),
            ],
            vec![
                String::from("Free Wi-Fi"),
                String::from("Flat-screen TV"),
                String::from("Air conditioning"),
                String::from("Work desk"),
                String::from("Coffee maker"),
                String::from("Safe"),
            ],
            25,
            String::from("Twin"),
            false,
            true,
        ),
        Room::new(
            RoomId::new("5"),
            String::from("Executive Business Suite"),
            String::from(
                "Designed for the discerning business traveler, our Executive Business Suite \
                 offers a separate living and working area, a comfortable king-sized bed, and a \
                 luxurious bathroom. Enjoy premium amenities, a fully-stocked minibar, and access \
                 to our business center and executive lounge.",
            ),
            String::from("Sophisticated suite with separate working area"),
            Money::from_dollars(299),
            2,
            vec![
                String::from("/placeholder.svg"),
                String::from("/placeholder.svg"),
                String::from("/placeholder.svg"),
            ],
            vec![
                String::from("Free Wi-Fi"),
                String::from("Flat-screen TV"),
                String::from("Air conditioning"),
                String::from("Work desk"),
                String::from("Minibar"),
                String::from("Coffee maker"),
                String::from("Safe"),
                String::from("Bathrobe"),
                String::from("Business center access"),
                String::from("Executive lounge access"),
            ],
            50,
            String::from("King"),
            true,
            true,
        ),
    ]
}
