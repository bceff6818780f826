//! Setup token entity - one-time teacher credential activation

use chrono::{DateTime, Duration, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// One-time token an admin issues so a teacher can set their password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupToken {
    pub code: String,
    pub teacher_id: Snowflake,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl SetupToken {
    /// Create a new SetupToken valid for `ttl_seconds`
    pub fn new(code: String, teacher_id: Snowflake, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            code,
            teacher_id,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
            used_at: None,
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Check if the token has already been redeemed
    #[inline]
    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    /// Validate the token for redemption, consuming it on success
    pub fn redeem(&mut self) -> Result<(), DomainError> {
        if self.is_used() {
            return Err(DomainError::SetupTokenUsed);
        }
        if self.is_expired() {
            return Err(DomainError::SetupTokenExpired);
        }
        self.used_at = Some(Utc::now());
        Ok(())
    }
}

/// Generate a random setup token code
pub fn generate_setup_code() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const CODE_LEN: usize = 32;

    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
