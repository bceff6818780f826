//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Setup helpers
// ============================================================================

/// Register an admin and return the auth response
async fn register_admin(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/admin/register", &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Register a student and return the auth response
async fn register_student(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/students/register", &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Create a teacher profile as admin
async fn create_teacher(server: &TestServer, admin_token: &str) -> TeacherResponse {
    let request = CreateTeacherRequest::unique();
    let response = server
        .post_auth("/api/v1/teachers", admin_token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Create a teacher profile and activate it, returning the profile and
/// the teacher's auth response
async fn create_activated_teacher(
    server: &TestServer,
    admin_token: &str,
) -> (TeacherResponse, AuthResponse) {
    let teacher = create_teacher(server, admin_token).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/teachers/{}/setup-token", teacher.id),
            admin_token,
        )
        .await
        .unwrap();
    let setup_token: SetupTokenResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let activate = ActivateTeacherRequest {
        token: setup_token.token,
        password: "TeacherPass123".to_string(),
    };
    let response = server
        .post("/api/v1/teachers/activate", &activate)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (teacher, auth)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_student() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server
        .post("/api/v1/students/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.principal.name, request.name);
    assert_eq!(auth.principal.role.as_deref(), Some("student"));
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server
        .post("/api/v1/students/register", &request)
        .await
        .unwrap();

    // Second registration with same email
    let response = server
        .post("/api/v1/students/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "onlyletters".to_string();

    let response = server
        .post("/api/v1/students/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_student_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server
        .post("/api/v1/students/register", &register_req)
        .await
        .unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server
        .post("/api/v1/students/login", &login_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.principal.name, register_req.name);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass1".to_string(),
    };

    let response = server
        .post("/api/v1/students/login", &login_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_wrong_portal() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register a student, then try the admin portal with the same credentials.
    // The response must be indistinguishable from a bad password.
    let register_req = RegisterRequest::unique();
    server
        .post("/api/v1/students/register", &register_req)
        .await
        .unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server
        .post("/api/v1/admin/login", &login_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_student(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server
        .post("/api/v1/auth/refresh", &refresh_req)
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!refreshed.access_token.is_empty());
    assert!(!refreshed.refresh_token.is_empty());
    assert_eq!(refreshed.principal.id, auth.principal.id);
}

#[tokio::test]
async fn test_refresh_with_access_token_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_student(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.access_token,
    };
    let response = server
        .post("/api/v1/auth/refresh", &refresh_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Teacher Tests
// ============================================================================

#[tokio::test]
async fn test_create_teacher() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;

    let request = CreateTeacherRequest::unique();
    let response = server
        .post_auth("/api/v1/teachers", &admin.access_token, &request)
        .await
        .unwrap();
    let teacher: TeacherResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(teacher.name, request.name);
    assert_eq!(teacher.department, request.department);
    assert!(!teacher.has_account);
}

#[tokio::test]
async fn test_create_teacher_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let student = register_student(&server).await;

    let request = CreateTeacherRequest::unique();
    let response = server
        .post_auth("/api/v1/teachers", &student.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_list_and_get_teachers() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let created = create_teacher(&server, &admin.access_token).await;

    // List
    let response = server
        .get_auth("/api/v1/teachers", &admin.access_token)
        .await
        .unwrap();
    let teachers: Vec<TeacherResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(teachers.iter().any(|t| t.id == created.id));

    // Get by id
    let response = server
        .get_auth(&format!("/api/v1/teachers/{}", created.id), &admin.access_token)
        .await
        .unwrap();
    let fetched: TeacherResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, created.email);
}

#[tokio::test]
async fn test_list_teachers_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/teachers").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_teacher() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;

    let update = UpdateTeacherRequest {
        department: Some("Physics".to_string()),
        bio: Some("Updated bio".to_string()),
        ..Default::default()
    };
    let response = server
        .put_auth(
            &format!("/api/v1/teachers/{}", teacher.id),
            &admin.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: TeacherResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.department, "Physics");
    assert_eq!(updated.bio.as_deref(), Some("Updated bio"));
    // Untouched fields survive
    assert_eq!(updated.subject, teacher.subject);
}

#[tokio::test]
async fn test_delete_teacher() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;

    let response = server
        .delete_auth(&format!("/api/v1/teachers/{}", teacher.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();

    // Verify deactivated
    let response = server
        .get_auth(&format!("/api/v1/teachers/{}", teacher.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Setup Token and Activation Tests
// ============================================================================

#[tokio::test]
async fn test_teacher_activation_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;

    let (teacher, auth) = create_activated_teacher(&server, &admin.access_token).await;

    assert_eq!(auth.principal.id, teacher.id);
    assert_eq!(auth.principal.department.as_deref(), Some("Mathematics"));
    assert!(!auth.access_token.is_empty());

    // Activated teacher can now use the teacher portal
    let login_req = LoginRequest {
        email: teacher.email.clone(),
        password: "TeacherPass123".to_string(),
    };
    let response = server
        .post("/api/v1/teachers/login", &login_req)
        .await
        .unwrap();
    let login: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.principal.id, teacher.id);
}

#[tokio::test]
async fn test_teacher_login_before_activation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;

    let login_req = LoginRequest {
        email: teacher.email,
        password: "TeacherPass123".to_string(),
    };
    let response = server
        .post("/api/v1/teachers/login", &login_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_setup_token_single_use() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/teachers/{}/setup-token", teacher.id),
            &admin.access_token,
        )
        .await
        .unwrap();
    let setup_token: SetupTokenResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // First redemption succeeds
    let activate = ActivateTeacherRequest {
        token: setup_token.token.clone(),
        password: "TeacherPass123".to_string(),
    };
    let response = server
        .post("/api/v1/teachers/activate", &activate)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Second redemption is rejected
    let response = server
        .post("/api/v1/teachers/activate", &activate)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_setup_token_for_activated_teacher_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (teacher, _) = create_activated_teacher(&server, &admin.access_token).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/teachers/{}/setup-token", teacher.id),
            &admin.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_activate_with_unknown_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let activate = ActivateTeacherRequest {
        token: "definitely-not-a-real-token".to_string(),
        password: "TeacherPass123".to_string(),
    };
    let response = server
        .post("/api/v1/teachers/activate", &activate)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Appointment Tests
// ============================================================================

#[tokio::test]
async fn test_request_appointment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;
    let student = register_student(&server).await;

    let request = RequestAppointmentRequest::for_teacher(&teacher.id);
    let response = server
        .post_auth("/api/v1/appointments/request", &student.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(appointment.teacher_id, teacher.id);
    assert_eq!(appointment.status, "pending");
    assert_eq!(appointment.created_by, "student");
    assert_eq!(appointment.day, "Monday");
    assert_eq!(
        appointment.student_account_id.as_deref(),
        Some(student.principal.id.as_str())
    );
}

#[tokio::test]
async fn test_request_appointment_slot_not_offered() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;
    let student = register_student(&server).await;

    let mut request = RequestAppointmentRequest::for_teacher(&teacher.id);
    request.time = "03:00 AM".to_string();
    let response = server
        .post_auth("/api/v1/appointments/request", &student.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_double_booking_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;
    let student = register_student(&server).await;
    let other_student = register_student(&server).await;

    let request = RequestAppointmentRequest::for_teacher(&teacher.id);
    let response = server
        .post_auth("/api/v1/appointments/request", &student.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same teacher, date, and time from another student
    let mut duplicate = RequestAppointmentRequest::for_teacher(&teacher.id);
    duplicate.date = request.date.clone();
    duplicate.time = request.time.clone();
    let response = server
        .post_auth(
            "/api/v1/appointments/request",
            &other_student.access_token,
            &duplicate,
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "SLOT_TAKEN");
}

#[tokio::test]
async fn test_request_appointment_requires_student() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;

    let request = RequestAppointmentRequest::for_teacher(&teacher.id);
    let response = server
        .post_auth("/api/v1/appointments/request", &admin.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_teacher_books_directly() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (teacher, teacher_auth) = create_activated_teacher(&server, &admin.access_token).await;

    let request = BookAppointmentRequest::unique();
    let response = server
        .post_auth("/api/v1/appointments", &teacher_auth.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // Direct bookings skip the pending stage
    assert_eq!(appointment.status, "confirmed");
    assert_eq!(appointment.created_by, "teacher");
    assert_eq!(appointment.teacher_id, teacher.id);
    assert!(appointment.student_account_id.is_none());
}

#[tokio::test]
async fn test_accept_and_complete_appointment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (teacher, teacher_auth) = create_activated_teacher(&server, &admin.access_token).await;
    let student = register_student(&server).await;

    let request = RequestAppointmentRequest::for_teacher(&teacher.id);
    let response = server
        .post_auth("/api/v1/appointments/request", &student.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // Accept with a message
    let respond = RespondRequest::with_message("See you then");
    let response = server
        .put_auth(
            &format!("/api/v1/appointments/{}/accept", appointment.id),
            &teacher_auth.access_token,
            &respond,
        )
        .await
        .unwrap();
    let accepted: AppointmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(accepted.status, "confirmed");
    assert_eq!(accepted.response_message.as_deref(), Some("See you then"));

    // Complete without a body
    let response = server
        .put_auth_empty(
            &format!("/api/v1/appointments/{}/complete", appointment.id),
            &teacher_auth.access_token,
        )
        .await
        .unwrap();
    let completed: AppointmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(completed.status, "completed");
}

#[tokio::test]
async fn test_reject_appointment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (teacher, teacher_auth) = create_activated_teacher(&server, &admin.access_token).await;
    let student = register_student(&server).await;

    let request = RequestAppointmentRequest::for_teacher(&teacher.id);
    let response = server
        .post_auth("/api/v1/appointments/request", &student.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let respond = RespondRequest::with_message("Out of office that week");
    let response = server
        .put_auth(
            &format!("/api/v1/appointments/{}/reject", appointment.id),
            &teacher_auth.access_token,
            &respond,
        )
        .await
        .unwrap();
    let rejected: AppointmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rejected.status, "rejected");

    // Rejected is terminal; accepting now is an invalid transition
    let response = server
        .put_auth_empty(
            &format!("/api/v1/appointments/{}/accept", appointment.id),
            &teacher_auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_student_cancels_pending_appointment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;
    let student = register_student(&server).await;

    let request = RequestAppointmentRequest::for_teacher(&teacher.id);
    let response = server
        .post_auth("/api/v1/appointments/request", &student.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth_empty(
            &format!("/api/v1/appointments/{}/cancel", appointment.id),
            &student.access_token,
        )
        .await
        .unwrap();
    let cancelled: AppointmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cancelled.status, "cancelled");
}

#[tokio::test]
async fn test_only_owning_teacher_can_accept() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (teacher, _) = create_activated_teacher(&server, &admin.access_token).await;
    let (_, other_teacher_auth) = create_activated_teacher(&server, &admin.access_token).await;
    let student = register_student(&server).await;

    let request = RequestAppointmentRequest::for_teacher(&teacher.id);
    let response = server
        .post_auth("/api/v1/appointments/request", &student.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth_empty(
            &format!("/api/v1/appointments/{}/accept", appointment.id),
            &other_teacher_auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_student_cannot_see_others_appointment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;
    let student = register_student(&server).await;
    let other_student = register_student(&server).await;

    let request = RequestAppointmentRequest::for_teacher(&teacher.id);
    let response = server
        .post_auth("/api/v1/appointments/request", &student.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/appointments/{}", appointment.id),
            &other_student.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_list_appointments_scoped_to_student() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;
    let student = register_student(&server).await;
    let other_student = register_student(&server).await;

    let request = RequestAppointmentRequest::for_teacher(&teacher.id);
    let response = server
        .post_auth("/api/v1/appointments/request", &student.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // The requesting student sees it
    let response = server
        .get_auth("/api/v1/appointments", &student.access_token)
        .await
        .unwrap();
    let appointments: Vec<AppointmentResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(appointments.iter().any(|a| a.id == appointment.id));

    // Another student does not
    let response = server
        .get_auth("/api/v1/appointments", &other_student.access_token)
        .await
        .unwrap();
    let appointments: Vec<AppointmentResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(appointments.iter().all(|a| a.id != appointment.id));
}

#[tokio::test]
async fn test_list_appointments_status_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let teacher = create_teacher(&server, &admin.access_token).await;
    let student = register_student(&server).await;

    let request = RequestAppointmentRequest::for_teacher(&teacher.id);
    server
        .post_auth("/api/v1/appointments/request", &student.access_token, &request)
        .await
        .unwrap();

    let response = server
        .get_auth(
            "/api/v1/appointments?status=pending",
            &student.access_token,
        )
        .await
        .unwrap();
    let appointments: Vec<AppointmentResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(appointments.iter().all(|a| a.status == "pending"));

    // Unknown status values are rejected
    let response = server
        .get_auth(
            "/api/v1/appointments?status=nonsense",
            &student.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_appointments_require_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/appointments").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}
