//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{appointments, auth, health, teachers};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(teacher_routes())
        .merge(appointment_routes())
}

/// Authentication routes for the three portals
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/register", post(auth::register_admin))
        .route("/admin/login", post(auth::login_admin))
        .route("/students/register", post(auth::register_student))
        .route("/students/login", post(auth::login_student))
        .route("/teachers/login", post(auth::login_teacher))
        .route("/teachers/activate", post(auth::activate_teacher))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// Teacher directory and profile routes
fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/teachers", get(teachers::list_teachers))
        .route("/teachers", post(teachers::create_teacher))
        .route("/teachers/:teacher_id", get(teachers::get_teacher))
        .route("/teachers/:teacher_id", put(teachers::update_teacher))
        .route("/teachers/:teacher_id", delete(teachers::delete_teacher))
        .route(
            "/teachers/:teacher_id/setup-token",
            post(teachers::issue_setup_token),
        )
}

/// Appointment lifecycle routes
fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(appointments::list_appointments))
        .route("/appointments", post(appointments::book_appointment))
        .route("/appointments/request", post(appointments::request_appointment))
        .route(
            "/appointments/:appointment_id",
            get(appointments::get_appointment),
        )
        .route(
            "/appointments/:appointment_id/accept",
            put(appointments::accept_appointment),
        )
        .route(
            "/appointments/:appointment_id/reject",
            put(appointments::reject_appointment),
        )
        .route(
            "/appointments/:appointment_id/cancel",
            put(appointments::cancel_appointment),
        )
        .route(
            "/appointments/:appointment_id/complete",
            put(appointments::complete_appointment),
        )
}
