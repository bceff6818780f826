//! Value objects shared across the domain

mod role;
mod snowflake;
mod status;

pub use role::Role;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use status::AppointmentStatus;
