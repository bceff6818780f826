//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{Account, Appointment, SetupToken, Teacher};
use crate::error::DomainError;
use crate::value_objects::{AppointmentStatus, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID (live rows only)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Account>>;

    /// Find account by email (live rows only)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new account
    async fn create(&self, account: &Account) -> RepoResult<()>;

    /// Update name and email
    async fn update(&self, account: &Account) -> RepoResult<()>;

    /// Soft delete an account
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Teacher Repository
// ============================================================================

/// Filters for teacher listings
#[derive(Debug, Clone, Default)]
pub struct TeacherFilter {
    pub department: Option<String>,
    pub subject: Option<String>,
    /// Case-insensitive substring match on name, department, or subject
    pub search: Option<String>,
}

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Find teacher by ID (active only)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Teacher>>;

    /// Find teacher by email (active only)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Teacher>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// List active teachers matching the filter
    async fn list(&self, filter: &TeacherFilter) -> RepoResult<Vec<Teacher>>;

    /// Create a new teacher profile
    async fn create(&self, teacher: &Teacher) -> RepoResult<()>;

    /// Update profile fields (name, department, availability, ...)
    async fn update(&self, teacher: &Teacher) -> RepoResult<()>;

    /// Soft delete a teacher profile
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Store credentials after setup-token redemption
    async fn set_credentials(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Appointment Repository
// ============================================================================

/// Filters for appointment listings
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub teacher_id: Option<Snowflake>,
    pub student_account_id: Option<Snowflake>,
    pub status: Option<AppointmentStatus>,
    pub date: Option<NaiveDate>,
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Find appointment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Appointment>>;

    /// List appointments matching the filter, newest first
    async fn list(&self, filter: &AppointmentFilter) -> RepoResult<Vec<Appointment>>;

    /// Create a new appointment.
    ///
    /// Returns [`DomainError::SlotTaken`] when a live (`pending` or
    /// `confirmed`) appointment already occupies the same
    /// (teacher, date, time) slot.
    async fn create(&self, appointment: &Appointment) -> RepoResult<()>;

    /// Apply a status transition with compare-and-set semantics.
    ///
    /// The update only applies while the stored status still equals
    /// `expected`; a concurrent writer winning the race surfaces as
    /// [`DomainError::ConcurrentUpdate`].
    async fn transition(
        &self,
        id: Snowflake,
        expected: AppointmentStatus,
        next: AppointmentStatus,
        response_message: Option<&str>,
    ) -> RepoResult<()>;
}

// ============================================================================
// Setup Token Repository
// ============================================================================

#[async_trait]
pub trait SetupTokenRepository: Send + Sync {
    /// Find token by code
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<SetupToken>>;

    /// Create a new token
    async fn create(&self, token: &SetupToken) -> RepoResult<()>;

    /// Mark a token as used; fails if it was already consumed
    async fn mark_used(&self, code: &str) -> RepoResult<()>;

    /// Delete expired tokens, returning how many were removed
    async fn delete_expired(&self) -> RepoResult<u64>;
}
