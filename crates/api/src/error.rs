// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use stay_reserve::CoreError;
use stay_reserve_domain::DomainError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Every member is recoverable at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the caller does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::ValidationFailed { violations } => {
            let message: String = violations
                .iter()
                .map(|v| format!("{}: {}", v.field, v.message))
                .collect::<Vec<String>>()
                .join("; ");
            ApiError::InvalidInput {
                field: violations
                    .first()
                    .map_or_else(|| String::from("draft"), |v| v.field.clone()),
                message,
            }
        }
        DomainError::RoomNotFound { room_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room '{room_id}' does not exist"),
        },
        DomainError::BookingNotFound { booking_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {booking_id} does not exist"),
        },
        DomainError::RoomUnavailable { room_id } => ApiError::DomainRuleViolation {
            rule: String::from("room_available"),
            message: format!("Room '{room_id}' is not available for booking"),
        },
        DomainError::InvalidDateRange {
            check_in,
            check_out,
        } => ApiError::InvalidInput {
            field: String::from("check_out"),
            message: format!(
                "Check-out '{check_out}' must fall strictly after check-in '{check_in}'"
            ),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => {
            ApiError::DomainRuleViolation {
                rule: String::from("booking_status_lifecycle"),
                message: format!("Cannot transition booking from '{from}' to '{to}': {reason}"),
            }
        }
        DomainError::InvalidPaymentTransition { from, to, reason } => {
            ApiError::DomainRuleViolation {
                rule: String::from("payment_status_lifecycle"),
                message: format!("Cannot transition payment from '{from}' to '{to}': {reason}"),
            }
        }
        DomainError::InvalidBookingStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown booking status: {status}"),
        },
        DomainError::InvalidPaymentStatus { status } => ApiError::InvalidInput {
            field: String::from("payment_status"),
            message: format!("Unknown payment status: {status}"),
        },
        DomainError::PriceOverflow { nights } => ApiError::InvalidInput {
            field: String::from("check_out"),
            message: format!("Total price overflowed for a stay of {nights} nights"),
        },
        DomainError::InvalidRoomDefinition { room_id, reason } => ApiError::InvalidInput {
            field: String::from("room"),
            message: format!("Invalid definition for room '{room_id}': {reason}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal {
            message: format!("Internal error: {msg}"),
        },
    }
}
