//! Appointment handlers
//!
//! Endpoints for requesting, booking, listing, and transitioning
//! appointments through their lifecycle.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use booking_service::{
    AppointmentListQuery, AppointmentResponse, AppointmentService, BookAppointmentRequest,
    RequestAppointmentRequest, RespondRequest,
};

use crate::extractors::{AppointmentIdPath, AuthUser, OptionalValidatedJson, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Student requests an appointment
///
/// POST /appointments/request
pub async fn request_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<RequestAppointmentRequest>,
) -> ApiResult<Created<Json<AppointmentResponse>>> {
    let service = AppointmentService::new(state.service_context());
    let response = service.request(auth.principal(), request).await?;
    Ok(Created(Json(response)))
}

/// Teacher books an appointment directly on their own calendar
///
/// POST /appointments
pub async fn book_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BookAppointmentRequest>,
) -> ApiResult<Created<Json<AppointmentResponse>>> {
    let service = AppointmentService::new(state.service_context());
    let response = service.book(auth.principal(), request).await?;
    Ok(Created(Json(response)))
}

/// List appointments visible to the caller
///
/// GET /appointments
pub async fn list_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AppointmentListQuery>,
) -> ApiResult<Json<Vec<AppointmentResponse>>> {
    let service = AppointmentService::new(state.service_context());
    let appointments = service.list(auth.principal(), query).await?;
    Ok(Json(appointments))
}

/// Get an appointment
///
/// GET /appointments/{appointment_id}
pub async fn get_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<AppointmentIdPath>,
) -> ApiResult<Json<AppointmentResponse>> {
    let appointment_id = path.appointment_id()?;

    let service = AppointmentService::new(state.service_context());
    let response = service.get(auth.principal(), appointment_id).await?;
    Ok(Json(response))
}

/// Accept a pending appointment (owning teacher only)
///
/// PUT /appointments/{appointment_id}/accept
pub async fn accept_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<AppointmentIdPath>,
    OptionalValidatedJson(body): OptionalValidatedJson<RespondRequest>,
) -> ApiResult<Json<AppointmentResponse>> {
    let appointment_id = path.appointment_id()?;
    let message = body.and_then(|b| b.message);

    let service = AppointmentService::new(state.service_context());
    let response = service
        .accept(auth.principal(), appointment_id, message)
        .await?;
    Ok(Json(response))
}

/// Reject a pending appointment (owning teacher only)
///
/// PUT /appointments/{appointment_id}/reject
pub async fn reject_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<AppointmentIdPath>,
    OptionalValidatedJson(body): OptionalValidatedJson<RespondRequest>,
) -> ApiResult<Json<AppointmentResponse>> {
    let appointment_id = path.appointment_id()?;
    let message = body.and_then(|b| b.message);

    let service = AppointmentService::new(state.service_context());
    let response = service
        .reject(auth.principal(), appointment_id, message)
        .await?;
    Ok(Json(response))
}

/// Cancel a pending or confirmed appointment
///
/// PUT /appointments/{appointment_id}/cancel
pub async fn cancel_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<AppointmentIdPath>,
    OptionalValidatedJson(body): OptionalValidatedJson<RespondRequest>,
) -> ApiResult<Json<AppointmentResponse>> {
    let appointment_id = path.appointment_id()?;
    let message = body.and_then(|b| b.message);

    let service = AppointmentService::new(state.service_context());
    let response = service
        .cancel(auth.principal(), appointment_id, message)
        .await?;
    Ok(Json(response))
}

/// Complete a confirmed appointment (owning teacher only)
///
/// PUT /appointments/{appointment_id}/complete
pub async fn complete_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<AppointmentIdPath>,
    OptionalValidatedJson(body): OptionalValidatedJson<RespondRequest>,
) -> ApiResult<Json<AppointmentResponse>> {
    let appointment_id = path.appointment_id()?;
    let message = body.and_then(|b| b.message);

    let service = AppointmentService::new(state.service_context());
    let response = service
        .complete(auth.principal(), appointment_id, message)
        .await?;
    Ok(Json(response))
}
