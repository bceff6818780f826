//! Setup token database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for setup_tokens table
#[derive(Debug, Clone, FromRow)]
pub struct SetupTokenModel {
    pub code: String,
    pub teacher_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}
