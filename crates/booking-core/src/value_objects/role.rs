//! Principal roles
//!
//! One claims model for the whole portal: the role travels inside the JWT
//! instead of being inferred from which token storage key happens to hold a
//! value on the client.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Role of an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// Stable string form used in the database and inside JWT claims.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }

    /// Parse from the stable string form.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "admin" => Ok(Self::Admin),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            other => Err(DomainError::ValidationError(format!(
                "unknown role: {other}"
            ))),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    #[inline]
    #[must_use]
    pub fn is_teacher(self) -> bool {
        matches!(self, Self::Teacher)
    }

    #[inline]
    #[must_use]
    pub fn is_student(self) -> bool {
        matches!(self, Self::Student)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
