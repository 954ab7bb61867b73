//! JWT authentication middleware for the admin API.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::{BEARER_TOKEN_PREFIX, ROLE_ADMIN};
use crate::errors::AppError;

/// Authenticated staff member extracted from the JWT token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

impl CurrentUser {
    /// Check if the account has the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Admin authentication middleware.
///
/// Extracts and validates the JWT token from the Authorization header,
/// requires the admin role, then injects the CurrentUser into the request
/// extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(token)?;

    let current_user = CurrentUser {
        id: claims.sub,
        email: claims.email,
        role: claims.role,
    };

    // Every gated route is an admin route; a valid token without the admin
    // role is a forbidden account, not an anonymous one.
    if !current_user.is_admin() {
        return Err(AppError::Forbidden);
    }

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_check() {
        let admin = CurrentUser {
            id: Uuid::new_v4(),
            email: "staff@lynck-services.de".to_string(),
            role: "admin".to_string(),
        };
        assert!(admin.is_admin());

        let user = CurrentUser {
            role: "user".to_string(),
            ..admin
        };
        assert!(!user.is_admin());
    }
}
