//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{AppointmentStatus, Snowflake};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Account not found: {0}")]
    AccountNotFound(Snowflake),

    #[error("Teacher not found: {0}")]
    TeacherNotFound(Snowflake),

    #[error("Appointment not found: {0}")]
    AppointmentNotFound(Snowflake),

    #[error("Setup token not found")]
    SetupTokenNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Time slot \"{slot}\" is not offered by this teacher")]
    SlotNotOffered { slot: String },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not a participant of this appointment")]
    NotParticipant,

    #[error("Not the owner of this teacher profile")]
    NotProfileOwner,

    #[error("Action requires the {0} role")]
    RoleRequired(&'static str),

    // =========================================================================
    // Conflict / Business Rule Violations
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Time slot already booked for this teacher")]
    SlotTaken,

    #[error("Cannot move appointment from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    #[error("Appointment changed concurrently, re-fetch and retry")]
    ConcurrentUpdate,

    #[error("Teacher account already activated")]
    AlreadyActivated,

    #[error("Teacher is no longer active")]
    TeacherInactive,

    #[error("Setup token has expired")]
    SetupTokenExpired,

    #[error("Setup token already used")]
    SetupTokenUsed,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::AccountNotFound(_) => "UNKNOWN_ACCOUNT",
            Self::TeacherNotFound(_) => "UNKNOWN_TEACHER",
            Self::AppointmentNotFound(_) => "UNKNOWN_APPOINTMENT",
            Self::SetupTokenNotFound => "UNKNOWN_SETUP_TOKEN",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::SlotNotOffered { .. } => "SLOT_NOT_OFFERED",

            // Authorization
            Self::NotParticipant => "NOT_PARTICIPANT",
            Self::NotProfileOwner => "NOT_PROFILE_OWNER",
            Self::RoleRequired(_) => "ROLE_REQUIRED",

            // Conflict / Business Rules
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::SlotTaken => "SLOT_TAKEN",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::ConcurrentUpdate => "CONCURRENT_UPDATE",
            Self::AlreadyActivated => "ALREADY_ACTIVATED",
            Self::TeacherInactive => "TEACHER_INACTIVE",
            Self::SetupTokenExpired => "SETUP_TOKEN_EXPIRED",
            Self::SetupTokenUsed => "SETUP_TOKEN_USED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_)
                | Self::TeacherNotFound(_)
                | Self::AppointmentNotFound(_)
                | Self::SetupTokenNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::WeakPassword(_)
                | Self::SlotNotOffered { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotParticipant | Self::NotProfileOwner | Self::RoleRequired(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::SlotTaken
                | Self::InvalidTransition { .. }
                | Self::ConcurrentUpdate
                | Self::AlreadyActivated
                | Self::TeacherInactive
                | Self::SetupTokenExpired
                | Self::SetupTokenUsed
        )
    }
}
