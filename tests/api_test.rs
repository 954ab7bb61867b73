//! API contract tests: response envelopes, error wire shapes and admin
//! authentication.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;

use lynck_api::domain::{LeadStatus, Password, Timeline};
use lynck_api::errors::AppError;
use lynck_api::services::{AuthService, Authenticator};
use lynck_api::types::ApiResponse;
use lynck_api::Config;

use common::{MemoryStore, MemoryUnitOfWork};

// =============================================================================
// Response envelope
// =============================================================================

#[tokio::test]
async fn test_api_response_structure() {
    let response: ApiResponse<String> = ApiResponse::success("test data".to_string());
    assert!(response.success);
    assert_eq!(response.data.unwrap(), "test data");
    assert!(response.message.is_none());
}

#[tokio::test]
async fn test_message_only_response() {
    let response: ApiResponse<()> = ApiResponse::message("Done");
    assert!(response.success);
    assert!(response.data.is_none());
    assert_eq!(response.message.unwrap(), "Done");
}

// =============================================================================
// Error wire shapes
// =============================================================================

#[tokio::test]
async fn test_app_error_status_codes() {
    assert_eq!(
        AppError::NotFound.into_response().status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::Unauthorized.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::Forbidden.into_response().status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        AppError::validation("bad").into_response().status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::internal("boom").into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

/// The intake endpoint promises `{error: "Validation failed", details: [..]}`
/// so the form can render one message per violated field.
#[tokio::test]
async fn test_rejected_lead_error_uses_the_details_shape() {
    let error = AppError::RejectedLead(vec![
        "Name is required".to_string(),
        "PLZ must be a 5-digit number".to_string(),
    ]);

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0], "Name is required");
    assert_eq!(body["details"][1], "PLZ must be a 5-digit number");
}

#[tokio::test]
async fn test_generic_errors_use_the_code_message_envelope() {
    let response = AppError::NotFound.into_response();
    let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Resource not found");
}

// =============================================================================
// Wire tokens
// =============================================================================

#[tokio::test]
async fn test_status_and_timeline_wire_tokens() {
    assert_eq!(
        serde_json::to_string(&LeadStatus::Contacted).unwrap(),
        "\"contacted\""
    );
    assert_eq!(
        serde_json::to_string(&Timeline::DieseWoche).unwrap(),
        "\"diese_woche\""
    );

    let status: LeadStatus = serde_json::from_str("\"converted\"").unwrap();
    assert_eq!(status, LeadStatus::Converted);

    assert!(serde_json::from_str::<Timeline>("\"next_year\"").is_err());
}

// =============================================================================
// Admin authentication
// =============================================================================

async fn seeded_authenticator() -> Authenticator<MemoryUnitOfWork> {
    let store = MemoryStore::new();
    let password_hash = Password::new("SecurePass123!").unwrap().into_string();
    store.users.lock().unwrap().push(lynck_api::domain::User {
        id: uuid::Uuid::new_v4(),
        email: "staff@lynck-services.de".to_string(),
        password_hash,
        name: "Staff".to_string(),
        role: lynck_api::domain::UserRole::Admin,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    });

    Authenticator::new(
        Arc::new(MemoryUnitOfWork::new(store)),
        Config::from_env(),
    )
}

#[tokio::test]
async fn test_login_roundtrip_carries_the_admin_role() {
    let auth = seeded_authenticator().await;

    let token = auth
        .login(
            "staff@lynck-services.de".to_string(),
            "SecurePass123!".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(token.token_type, "Bearer");

    let claims = auth.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.email, "staff@lynck-services.de");
    assert_eq!(claims.role, "admin");
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_both_fail_the_same_way() {
    let auth = seeded_authenticator().await;

    let wrong_password = auth
        .login(
            "staff@lynck-services.de".to_string(),
            "nope-nope-nope".to_string(),
        )
        .await;
    assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));

    let unknown_email = auth
        .login("ghost@lynck-services.de".to_string(), "whatever1".to_string())
        .await;
    assert!(matches!(unknown_email, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let auth = seeded_authenticator().await;
    assert!(auth.verify_token("not-a-jwt").is_err());
}
