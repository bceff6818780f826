//! Entity <-> model mappers

mod account;
mod appointment;
mod setup_token;
mod teacher;
