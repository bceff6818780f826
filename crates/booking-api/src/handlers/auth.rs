//! Authentication handlers
//!
//! Endpoints for the three login portals, account registration,
//! teacher activation, and token refresh.

use axum::{extract::State, Json};
use booking_service::{
    ActivateTeacherRequest, AuthResponse, AuthService, LoginRequest, RefreshTokenRequest,
    RegisterRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new admin account
///
/// POST /admin/register
pub async fn register_admin(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register_admin(request).await?;
    Ok(Created(Json(response)))
}

/// Login through the admin portal
///
/// POST /admin/login
pub async fn login_admin(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login_admin(request).await?;
    Ok(Json(response))
}

/// Register a new student account
///
/// POST /students/register
pub async fn register_student(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register_student(request).await?;
    Ok(Created(Json(response)))
}

/// Login through the student portal
///
/// POST /students/login
pub async fn login_student(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login_student(request).await?;
    Ok(Json(response))
}

/// Login through the teacher portal
///
/// POST /teachers/login
pub async fn login_teacher(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login_teacher(request).await?;
    Ok(Json(response))
}

/// Activate a teacher profile by redeeming a setup token
///
/// POST /teachers/activate
pub async fn activate_teacher(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ActivateTeacherRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.activate_teacher(request).await?;
    Ok(Json(response))
}

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_tokens(request).await?;
    Ok(Json(response))
}
