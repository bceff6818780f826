//! Authenticated principal passed from the transport layer into services

use booking_core::{Role, Snowflake};

use super::error::{ServiceError, ServiceResult};

/// Identity of the caller, extracted from a validated access token.
///
/// For admins and students `id` is an account ID; for teachers it is the
/// teacher profile ID. Role checks belong in the services, not in route
/// prefixes, so every operation takes a `Principal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: Snowflake,
    pub role: Role,
}

impl Principal {
    pub fn new(id: Snowflake, role: Role) -> Self {
        Self { id, role }
    }

    /// Require the admin role
    pub fn require_admin(&self) -> ServiceResult<()> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::forbidden("admin role required"))
        }
    }

    /// Require the teacher role
    pub fn require_teacher(&self) -> ServiceResult<()> {
        if self.role.is_teacher() {
            Ok(())
        } else {
            Err(ServiceError::forbidden("teacher role required"))
        }
    }

    /// Require the student role
    pub fn require_student(&self) -> ServiceResult<()> {
        if self.role.is_student() {
            Ok(())
        } else {
            Err(ServiceError::forbidden("student role required"))
        }
    }
}
