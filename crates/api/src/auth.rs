// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor roles and authorization checks for the API boundary.
//!
//! Roles apply to API callers, never to domain records: a staff member is
//! an operator of the system, a guest is someone driving the public
//! booking flow.

use crate::error::AuthError;
use stay_reserve_audit::Actor;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Staff role: front-desk and back-office operators.
    ///
    /// Staff may perform:
    /// - booking status and payment status transitions
    /// - room availability changes
    /// - ledger-wide listing and dashboard queries
    /// - audit trail review
    Staff,
    /// Guest role: callers of the public booking flow.
    ///
    /// Guests may browse and search rooms, price a stay, create bookings,
    /// settle payment for them, and review bookings made under their own
    /// email address.
    Guest,
}

/// An authenticated caller with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this caller.
    pub id: String,
    /// The role assigned to this caller.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this caller
    /// * `role` - The role assigned to this caller
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        let actor_type: String = match self.role {
            Role::Staff => String::from("staff"),
            Role::Guest => String::from("guest"),
        };
        Actor::new(self.id.clone(), actor_type)
    }
}

/// Stub authentication function.
///
/// This is a minimal placeholder: real credential handling belongs to the
/// presentation layer and is out of scope here. The stub only rejects
/// anonymous callers.
///
/// # Arguments
///
/// * `actor_id` - The identifier of the caller to authenticate
/// * `role` - The role to assign
///
/// # Errors
///
/// Returns an error if the actor id is empty.
pub fn authenticate_stub(actor_id: String, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}

/// Per-action authorization checks.
///
/// Checks are enforced at the top of every handler before any state is
/// touched.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_staff(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        if actor.role == Role::Staff {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_owned(),
                required_role: String::from("Staff"),
            })
        }
    }

    /// Authorizes listing every booking in the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not staff.
    pub fn authorize_list_bookings(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_staff(actor, "list_bookings")
    }

    /// Authorizes a booking status transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not staff.
    pub fn authorize_update_booking_status(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_staff(actor, "update_booking_status")
    }

    /// Authorizes a payment status transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not staff.
    pub fn authorize_update_payment_status(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_staff(actor, "update_payment_status")
    }

    /// Authorizes toggling a room's availability flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not staff.
    pub fn authorize_set_room_availability(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_staff(actor, "set_room_availability")
    }

    /// Authorizes the dashboard summary query.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not staff.
    pub fn authorize_view_dashboard(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_staff(actor, "view_dashboard")
    }

    /// Authorizes reading the audit trail.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not staff.
    pub fn authorize_view_audit_trail(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_staff(actor, "view_audit_trail")
    }
}
