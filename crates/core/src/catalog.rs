// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use stay_reserve_audit::{Action, Actor, AuditEvent, AuditSubject, Cause, StateSnapshot};
use stay_reserve_domain::{DomainError, Room, RoomId, validate_room_definition};

/// The fixed inventory of bookable rooms.
///
/// Rooms are loaded once at initialization and held in insertion order.
/// The only permitted mutation is the availability flag, which staff
/// tooling may toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

/// The result of a successful catalog mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTransition {
    /// The room after the mutation.
    pub room: Room,
    /// The audit event recording this mutation.
    pub audit_event: AuditEvent,
}

impl RoomCatalog {
    /// Creates a catalog from a room inventory.
    ///
    /// Every room definition is validated, and identifiers must be unique.
    ///
    /// # Arguments
    ///
    /// * `rooms` - The inventory, in display order
    ///
    /// # Errors
    ///
    /// Returns an error if any room definition is invalid or any
    /// identifier appears more than once.
    pub fn new(rooms: Vec<Room>) -> Result<Self, CoreError> {
        for (index, room) in rooms.iter().enumerate() {
            validate_room_definition(room)?;
            if rooms[..index].iter().any(|other| other.id == room.id) {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidRoomDefinition {
                        room_id: room.id.value().to_owned(),
                        reason: String::from("duplicate room id"),
                    },
                ));
            }
        }
        Ok(Self { rooms })
    }

    /// Returns the full inventory in catalog order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks up a room by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoomNotFound` if no room has the id.
    pub fn get(&self, id: &RoomId) -> Result<&Room, CoreError> {
        self.rooms
            .iter()
            .find(|room| &room.id == id)
            .ok_or_else(|| {
                CoreError::DomainViolation(DomainError::RoomNotFound {
                    room_id: id.value().to_owned(),
                })
            })
    }

    /// Returns the featured subsequence of the catalog, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<Room> {
        self.rooms
            .iter()
            .filter(|room| room.featured)
            .cloned()
            .collect()
    }

    /// Sets a room's availability flag.
    ///
    /// This is the only permitted room mutation after catalog load.
    ///
    /// # Arguments
    ///
    /// * `id` - The room to update
    /// * `available` - The new availability flag
    /// * `actor` - The actor performing this action
    /// * `cause` - The cause or reason for this action
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoomNotFound` if no room has the id.
    pub fn set_availability(
        &mut self,
        id: &RoomId,
        available: bool,
        actor: &Actor,
        cause: &Cause,
    ) -> Result<RoomTransition, CoreError> {
        let room: &mut Room = self
            .rooms
            .iter_mut()
            .find(|room| &room.id == id)
            .ok_or_else(|| {
                CoreError::DomainViolation(DomainError::RoomNotFound {
                    room_id: id.value().to_owned(),
                })
            })?;

        let before: StateSnapshot =
            StateSnapshot::new(format!("available={}", room.available));
        room.available = available;
        let after: StateSnapshot = StateSnapshot::new(format!("available={}", room.available));

        tracing::info!(room_id = %room.id, available, "room availability updated");

        let action: Action = Action::new(
            String::from("SetAvailability"),
            Some(format!(
                "Room '{}' marked {}",
                room.name,
                if available { "available" } else { "unavailable" }
            )),
        );
        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            cause.clone(),
            action,
            AuditSubject::Room(room.id.clone()),
            before,
            after,
        );

        Ok(RoomTransition {
            room: room.clone(),
            audit_event,
        })
    }
}
