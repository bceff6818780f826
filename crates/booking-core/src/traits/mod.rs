//! Domain traits (ports)

mod repositories;

pub use repositories::{
    AccountRepository, AppointmentFilter, AppointmentRepository, RepoResult,
    SetupTokenRepository, TeacherFilter, TeacherRepository,
};
