//! # booking-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AccountResponse, ActivateTeacherRequest, ApiResponse, AppointmentListQuery,
    AppointmentResponse, AuthResponse, BookAppointmentRequest, CreateTeacherRequest,
    HealthResponse, LoginRequest, PrincipalResponse, ReadinessResponse, RefreshTokenRequest,
    RegisterRequest, RequestAppointmentRequest, RespondRequest, SetupTokenResponse,
    TeacherListQuery, TeacherResponse, UpdateTeacherRequest,
};
pub use services::{
    AppointmentService, AuthService, Principal, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TeacherService,
};
