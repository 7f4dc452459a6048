// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{BookingDraft, Room};
use serde::{Deserialize, Serialize};

/// A single violated field with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The draft field that failed validation.
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_owned(),
            message: message.to_owned(),
        }
    }
}

/// Validates a guest's booking draft against a room's capacity.
///
/// Every violated field is collected so the caller can surface the
/// complete list in one pass rather than failing on the first defect.
/// Date sanity is NOT checked here; it belongs to the stay calculation.
///
/// # Arguments
///
/// * `draft` - The guest-supplied draft
/// * `capacity` - The maximum occupant count of the requested room
///
/// # Returns
///
/// * `Ok(())` if every field is valid
/// * `Err(DomainError::ValidationFailed)` listing each violated field
///
/// # Errors
///
/// Returns an error if:
/// - Any guest contact field is empty
/// - The email is not syntactically valid
/// - The adult count is zero
/// - The occupant total exceeds the room's capacity
pub fn validate_draft(draft: &BookingDraft, capacity: u8) -> Result<(), DomainError> {
    let mut violations: Vec<FieldViolation> = Vec::new();

    if draft.first_name.trim().is_empty() {
        violations.push(FieldViolation::new("first_name", "cannot be empty"));
    }
    if draft.last_name.trim().is_empty() {
        violations.push(FieldViolation::new("last_name", "cannot be empty"));
    }
    if draft.email.trim().is_empty() {
        violations.push(FieldViolation::new("email", "cannot be empty"));
    } else if !email_is_well_formed(draft.email.trim()) {
        violations.push(FieldViolation::new("email", "is not a valid email address"));
    }
    if draft.phone.trim().is_empty() {
        violations.push(FieldViolation::new("phone", "cannot be empty"));
    }

    // Rule: at least one adult must occupy the room
    if draft.adults == 0 {
        violations.push(FieldViolation::new("adults", "must be at least 1"));
    }

    // Rule: occupants must fit the room
    let occupants: u16 = u16::from(draft.adults) + u16::from(draft.children);
    if occupants > u16::from(capacity) {
        violations.push(FieldViolation::new(
            "guests",
            &format!("{occupants} occupants exceed the room capacity of {capacity}"),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::ValidationFailed { violations })
    }
}

/// Validates a room definition at catalog load.
///
/// # Errors
///
/// Returns `DomainError::InvalidRoomDefinition` if the name is empty, the
/// nightly price is not positive, or the capacity is zero.
pub fn validate_room_definition(room: &Room) -> Result<(), DomainError> {
    if room.name.trim().is_empty() {
        return Err(DomainError::InvalidRoomDefinition {
            room_id: room.id.value().to_owned(),
            reason: String::from("name cannot be empty"),
        });
    }
    if !room.price.is_positive() {
        return Err(DomainError::InvalidRoomDefinition {
            room_id: room.id.value().to_owned(),
            reason: String::from("nightly price must be positive"),
        });
    }
    if room.capacity == 0 {
        return Err(DomainError::InvalidRoomDefinition {
            room_id: room.id.value().to_owned(),
            reason: String::from("capacity must be at least 1"),
        });
    }
    Ok(())
}

/// Minimal syntactic email check: one `@` separating a non-empty local
/// part from a domain containing a dot, with no whitespace anywhere.
fn email_is_well_formed(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
