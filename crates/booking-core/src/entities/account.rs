//! Account entity - an admin or student login account

use chrono::{DateTime, Utc};

use crate::value_objects::{Role, Snowflake};

/// Login account for admins and students.
///
/// Teachers authenticate through their [`super::Teacher`] profile instead,
/// which only gains credentials once activated with a setup token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Create a new Account with required fields
    pub fn new(
        id: Snowflake,
        name: String,
        email: String,
        password_hash: String,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the account has been soft-deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Mark the account as soft-deleted
    pub fn mark_deleted(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }
}
