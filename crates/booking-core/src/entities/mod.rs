//! Domain entities

mod account;
mod appointment;
mod setup_token;
mod teacher;

pub use account::Account;
pub use appointment::{weekday_name, Appointment, CreatedBy, StudentInfo};
pub use setup_token::{generate_setup_code, SetupToken};
pub use teacher::Teacher;
