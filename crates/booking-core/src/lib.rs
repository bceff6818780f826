//! # booking-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    generate_setup_code, Account, Appointment, CreatedBy, SetupToken, StudentInfo, Teacher,
};
pub use error::DomainError;
pub use traits::{
    AccountRepository, AppointmentFilter, AppointmentRepository, RepoResult, SetupTokenRepository,
    TeacherFilter, TeacherRepository,
};
pub use value_objects::{
    AppointmentStatus, Role, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
