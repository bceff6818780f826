//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod appointment;
pub mod auth;
pub mod context;
pub mod error;
pub mod principal;
pub mod teacher;

// Re-export all services for convenience
pub use appointment::AppointmentService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use principal::Principal;
pub use teacher::TeacherService;
