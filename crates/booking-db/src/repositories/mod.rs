//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in booking-core.
//! Each repository handles database operations for a specific domain entity.

mod account;
mod appointment;
mod error;
mod setup_token;
mod teacher;

pub use account::PgAccountRepository;
pub use appointment::PgAppointmentRepository;
pub use setup_token::PgSetupTokenRepository;
pub use teacher::PgTeacherRepository;
