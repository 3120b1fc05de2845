//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use estate_core::traits::UserRepository;
use estate_core::value_objects::{Role, Snowflake};
use estate_db::{create_pool, PgUserRepository};
use integration_tests::{
    assert_json, assert_status, check_test_env, cookie_value, fixtures::*, test_config, TestServer,
};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

// ============================================================================
// Helpers
// ============================================================================

/// Signup + login; returns the signup fixture, the session, and the raw
/// refresh cookie value
async fn login_fresh_user(server: &TestServer) -> (SignupRequest, SessionBody, String) {
    let signup = SignupRequest::unique();
    let response = server.post("/api/v1/users/signup", &signup).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/users/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();
    let refresh_cookie = cookie_value(&response, "refreshToken").expect("refresh cookie missing");
    let session: Data<SessionBody> = assert_json(response, StatusCode::OK).await.unwrap();

    (signup, session.data, refresh_cookie)
}

/// Promote a user to admin directly through the repository (bootstrap path)
async fn promote_to_admin(user_id: &str) {
    let config = test_config().unwrap();
    let pool = create_pool(&config.database).await.unwrap();
    let repo = PgUserRepository::new(pool);
    let id = Snowflake::new(user_id.parse::<i64>().unwrap());
    repo.set_role(id, Role::Admin).await.unwrap();
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
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
async fn test_signup_creates_user_role() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();

    let response = server.post("/api/v1/users/signup", &signup).await.unwrap();
    let user: Data<UserBody> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.data.username, signup.username);
    assert_eq!(user.data.role, "user");
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();

    let response = server.post("/api/v1/users/signup", &signup).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/users/signup", &signup).await.unwrap();
    let envelope: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.status_code, 409);
}

#[tokio::test]
async fn test_signup_weak_password_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut signup = SignupRequest::unique();
    signup.password = "letters-only".to_string();

    let response = server.post("/api/v1/users/signup", &signup).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_unknown_identifier_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        email: format!("ghost{}@example.com", unique_suffix()),
        password: "TestPass123".to_string(),
    };

    let response = server.post("/api/v1/users/login", &login).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();
    let response = server.post("/api/v1/users/signup", &signup).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login = LoginRequest {
        email: signup.email.clone(),
        password: "WrongPass123".to_string(),
    };
    let response = server.post("/api/v1/users/login", &login).await.unwrap();
    let envelope: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(envelope.message, "Invalid credentials");
}

#[tokio::test]
async fn test_login_sets_cookies_and_keeps_refresh_out_of_body() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();
    let response = server.post("/api/v1/users/signup", &signup).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/users/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();

    let access_cookie = cookie_value(&response, "accessToken");
    let refresh_cookie = cookie_value(&response, "refreshToken");
    assert!(access_cookie.is_some());
    assert!(refresh_cookie.is_some());

    assert_eq!(response.status(), StatusCode::OK);
    let raw = response.text().await.unwrap();
    assert!(!raw.contains(refresh_cookie.unwrap().as_str()));

    let session: Data<SessionBody> = serde_json::from_str(&raw).unwrap();
    assert_eq!(session.data.token_type, "Bearer");
    assert!(!session.data.access_token.is_empty());
    assert!(session.data.expires_in > 0);
}

#[tokio::test]
async fn test_me_with_bearer_token_matches_identity() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (signup, session, _) = login_fresh_user(&server).await;

    let response = server
        .get_auth("/api/v1/users/me", &session.access_token)
        .await
        .unwrap();
    let user: Data<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.data.email, signup.email);
}

#[tokio::test]
async fn test_me_with_access_cookie() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();
    let response = server.post("/api/v1/users/signup", &signup).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/users/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();
    let access_cookie = cookie_value(&response, "accessToken").unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_with_cookie("/api/v1/users/me", &format!("accessToken={access_cookie}"))
        .await
        .unwrap();
    let user: Data<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.data.email, signup.email);
}

#[tokio::test]
async fn test_me_without_token_is_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/me").await.unwrap();
    let envelope: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(envelope.message, "No token provided");
    assert!(envelope.errors.is_empty());
}

#[tokio::test]
async fn test_refresh_rotates_and_rejects_replay() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session, original_refresh) = login_fresh_user(&server).await;

    // Rotate via the cookie
    let response = server
        .post_with_cookie(
            "/api/v1/users/refresh-token",
            &format!("refreshToken={original_refresh}"),
        )
        .await
        .unwrap();
    let new_refresh = cookie_value(&response, "refreshToken").unwrap();
    let rotated: Data<SessionBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_ne!(new_refresh, original_refresh);
    assert_ne!(rotated.data.access_token, session.access_token);

    // Replaying the pre-rotation token must fail
    let response = server
        .post_with_cookie(
            "/api/v1/users/refresh-token",
            &format!("refreshToken={original_refresh}"),
        )
        .await
        .unwrap();
    let envelope: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(envelope.message, "Refresh token expired or used");
}

#[tokio::test]
async fn test_refresh_without_token_is_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_with_cookie("/api/v1/users/refresh-token", "other=1")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session, refresh_cookie) = login_fresh_user(&server).await;

    let response = server
        .post_auth_empty("/api/v1/users/logout", &session.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_with_cookie(
            "/api/v1/users/refresh-token",
            &format!("refreshToken={refresh_cookie}"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_route_rejects_non_admin_with_403() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session, _) = login_fresh_user(&server).await;

    let response = server
        .get_auth("/api/v1/contacts", &session.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_route_rejects_anonymous_with_401() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/contacts").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_make_admin_promotes_by_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Bootstrap the first admin directly through the repository
    let (_, admin_session, _) = login_fresh_user(&server).await;
    promote_to_admin(&admin_session.user.id).await;
    let (target_signup, _, _) = login_fresh_user(&server).await;

    let response = server
        .post_auth(
            "/api/v1/admin/make-admin",
            &admin_session.access_token,
            &serde_json::json!({ "email": target_signup.email }),
        )
        .await
        .unwrap();
    let promoted: Data<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(promoted.data.role, "admin");

    // Idempotent on the second call
    let response = server
        .post_auth(
            "/api/v1/admin/make-admin",
            &admin_session.access_token,
            &serde_json::json!({ "email": target_signup.email }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_make_admin_unknown_email_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_session, _) = login_fresh_user(&server).await;
    promote_to_admin(&admin_session.user.id).await;

    let response = server
        .post_auth(
            "/api/v1/admin/make-admin",
            &admin_session.access_token,
            &serde_json::json!({ "email": format!("ghost{}@example.com", unique_suffix()) }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Property Tests
// ============================================================================

fn property_form(name: &str) -> Form {
    Form::new()
        .text("data", property_json(name).to_string())
        .part(
            "images",
            Part::bytes(b"fake png bytes".to_vec()).file_name("photo.png"),
        )
}

#[tokio::test]
async fn test_property_create_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .client
        .post(format!("{}/api/v1/properties", server.base_url()))
        .multipart(property_form("Unauthorized Flat"))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_property_create_and_public_read() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session, _) = login_fresh_user(&server).await;

    let name = format!("Sea View {}", unique_suffix());
    let response = server
        .post_multipart_auth("/api/v1/properties", &session.access_token, property_form(&name))
        .await
        .unwrap();
    let created: Data<PropertyBody> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.data.listing_type, "rent");
    assert_eq!(created.data.created_by, session.user.id);
    assert_eq!(created.data.images.len(), 1);
    assert!(created.data.images[0].starts_with("/uploads/"));

    // Detail read is public
    let response = server
        .get(&format!("/api/v1/properties/{}", created.data.id))
        .await
        .unwrap();
    let fetched: Data<PropertyBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.data.name, name);

    // The stored image is served under /uploads
    let response = server.get(&created.data.images[0]).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_property_upload_honors_configured_file_size() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session, _) = login_fresh_user(&server).await;

    // Well above the framework's stock 2 MB body cap, under the 10 MB file cap
    let form = Form::new()
        .text("data", property_json("Large Photo Flat").to_string())
        .part(
            "images",
            Part::bytes(vec![0_u8; 3 * 1024 * 1024]).file_name("large.png"),
        );
    let response = server
        .post_multipart_auth("/api/v1/properties", &session.access_token, form)
        .await
        .unwrap();
    let created: Data<PropertyBody> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.data.images.len(), 1);

    // Over the configured per-file cap gets a clean 400, not a transport error
    let form = Form::new()
        .text("data", property_json("Oversized Photo Flat").to_string())
        .part(
            "images",
            Part::bytes(vec![0_u8; 11 * 1024 * 1024]).file_name("huge.png"),
        );
    let response = server
        .post_multipart_auth("/api/v1/properties", &session.access_token, form)
        .await
        .unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error.message.contains("File too large"));
}

#[tokio::test]
async fn test_rejected_property_upload_leaves_no_stored_files() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session, _) = login_fresh_user(&server).await;

    // Image parts but no data field: the request fails and the files written
    // for it must not stay behind
    let form = Form::new().part(
        "images",
        Part::bytes(b"fake png bytes".to_vec()).file_name("orphan.png"),
    );
    let response = server
        .post_multipart_auth("/api/v1/properties", &session.access_token, form)
        .await
        .unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error.message.contains("Missing data field"));

    let stored: Vec<_> = std::fs::read_dir(&server.upload_dir)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(stored.is_empty(), "rejected upload left files: {stored:?}");
}

#[tokio::test]
async fn test_property_unknown_id_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/properties/424242").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_property_delete_owner_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner, _) = login_fresh_user(&server).await;
    let (_, other, _) = login_fresh_user(&server).await;

    let response = server
        .post_multipart_auth(
            "/api/v1/properties",
            &owner.access_token,
            Form::new().text("data", property_json("Owner Only Flat").to_string()),
        )
        .await
        .unwrap();
    let created: Data<PropertyBody> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/properties/{}", created.data.id);

    // A different non-admin account is forbidden
    let response = server.delete_auth(&path, &other.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner may delete
    let response = server.delete_auth(&path, &owner.access_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Contact Tests
// ============================================================================

#[tokio::test]
async fn test_contact_form_public_create_and_admin_read() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let subject = format!("Question {}", unique_suffix());
    let response = server
        .post(
            "/api/v1/contacts",
            &serde_json::json!({
                "name": "Visitor",
                "email": "visitor@example.com",
                "subject": subject,
                "message": "Is the flat still available?"
            }),
        )
        .await
        .unwrap();
    let created: Data<ContactBody> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.data.subject, subject);

    let (_, admin_session, _) = login_fresh_user(&server).await;
    promote_to_admin(&admin_session.user.id).await;

    let response = server
        .get_auth("/api/v1/contacts", &admin_session.access_token)
        .await
        .unwrap();
    let listed: Data<Vec<ContactBody>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.data.iter().any(|c| c.id == created.data.id));

    let response = server
        .delete_auth(
            &format!("/api/v1/contacts/{}", created.data.id),
            &admin_session.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Booking Tests
// ============================================================================

#[tokio::test]
async fn test_booking_payment_records_completed() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session, _) = login_fresh_user(&server).await;

    let response = server
        .post_multipart_auth(
            "/api/v1/properties",
            &session.access_token,
            Form::new().text("data", property_json("Bookable Flat").to_string()),
        )
        .await
        .unwrap();
    let property: Data<PropertyBody> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            "/api/v1/bookings/payment",
            &serde_json::json!({
                "user_id": session.user.id,
                "property_id": property.data.id,
                "amount": 1500.0
            }),
        )
        .await
        .unwrap();
    let booking: Data<BookingBody> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(booking.data.payment_status, "completed");
    assert_eq!(booking.data.property_id, property.data.id);
}

#[tokio::test]
async fn test_booking_unknown_property_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session, _) = login_fresh_user(&server).await;

    let response = server
        .post(
            "/api/v1/bookings/payment",
            &serde_json::json!({
                "user_id": session.user.id,
                "property_id": "424242",
                "amount": 100.0
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
