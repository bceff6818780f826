//! Account database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for accounts table
#[derive(Debug, Clone, FromRow)]
pub struct AccountModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl AccountModel {
    /// Check if the account is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
