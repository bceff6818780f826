//! Teacher entity - a bookable teacher profile

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Teacher profile created by an admin.
///
/// A profile starts without credentials (`has_account == false`); the
/// teacher gains the ability to log in by redeeming a setup token, which
/// stores `password_hash` and flips `has_account`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub department: String,
    pub subject: String,
    pub experience_years: i32,
    pub qualification: String,
    pub bio: Option<String>,
    /// Time slots the teacher offers, e.g. `"10:00 AM"`.
    pub availability: Vec<String>,
    pub password_hash: Option<String>,
    pub has_account: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Teacher {
    /// Create a new Teacher profile with required fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Snowflake,
        name: String,
        email: String,
        department: String,
        subject: String,
        experience_years: i32,
        qualification: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            department,
            subject,
            experience_years,
            qualification,
            bio: None,
            availability: Vec::new(),
            password_hash: None,
            has_account: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the availability slots
    pub fn with_availability(mut self, availability: Vec<String>) -> Self {
        self.availability = availability;
        self
    }

    /// Set the bio
    pub fn with_bio(mut self, bio: Option<String>) -> Self {
        self.bio = bio;
        self
    }

    /// Whether the teacher offers the given time slot.
    ///
    /// An empty availability list means the teacher has not restricted
    /// their slots yet, so any slot is accepted.
    pub fn offers_slot(&self, slot: &str) -> bool {
        self.availability.is_empty() || self.availability.iter().any(|s| s == slot)
    }

    /// Check if the teacher can log in
    #[inline]
    pub fn can_login(&self) -> bool {
        self.has_account && self.is_active && self.password_hash.is_some()
    }

    /// Store credentials after a setup token is redeemed
    pub fn activate(&mut self, password_hash: String) {
        self.password_hash = Some(password_hash);
        self.has_account = true;
        self.updated_at = Utc::now();
    }

    /// Soft-delete the profile
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
