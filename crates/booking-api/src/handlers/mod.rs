//! Request handlers
//!
//! Handler functions organized by resource.

pub mod appointments;
pub mod auth;
pub mod health;
pub mod teachers;
