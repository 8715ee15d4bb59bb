// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User endpoints.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{CurrentUser, Role, SessionIdentity};

/// Response for GET /v1/users/me
#[derive(Debug, Serialize, ToSchema)]
pub struct UserMeResponse {
    /// User's opaque stable identifier
    pub user_id: String,
    /// Email supplied at issuance
    pub email: String,
    /// User's role
    pub role: Role,
}

impl From<SessionIdentity> for UserMeResponse {
    fn from(identity: SessionIdentity) -> Self {
        Self {
            user_id: identity.user_id,
            email: identity.email,
            role: identity.role,
        }
    }
}

/// Get the current authenticated user's information.
///
/// Returns the identity the session gate verified for this request.
#[utoipa::path(
    get,
    path = "/v1/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "User information", body = UserMeResponse),
        (status = 401, description = "Unauthorized - invalid or missing session token"),
    )
)]
pub async fn get_current_user(CurrentUser(identity): CurrentUser) -> Json<UserMeResponse> {
    Json(identity.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_me_response_from_session_identity() {
        let identity = SessionIdentity {
            user_id: "u1".to_string(),
            email: "a@b.com".to_string(),
            role: Role::new("user"),
        };

        let response: UserMeResponse = identity.into();
        assert_eq!(response.user_id, "u1");
        assert_eq!(response.email, "a@b.com");
        assert_eq!(response.role, Role::new("user"));
    }
}
