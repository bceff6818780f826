//! Database models (SQLx `FromRow` structs)

mod account;
mod appointment;
mod setup_token;
mod teacher;

pub use account::AccountModel;
pub use appointment::AppointmentModel;
pub use setup_token::SetupTokenModel;
pub use teacher::TeacherModel;
