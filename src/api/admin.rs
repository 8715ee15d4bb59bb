// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Admin-only API endpoints.
//!
//! These routes sit behind the session gate plus a role gate requiring the
//! "admin" role.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::CurrentUser;
use crate::state::AppState;

/// System statistics response.
#[derive(Debug, Serialize, ToSchema)]
pub struct SystemStatsResponse {
    /// Server uptime in seconds.
    pub uptime_seconds: u64,
    /// Current timestamp.
    pub timestamp: String,
    /// User ID of the requesting admin.
    pub requested_by: String,
}

/// Get system statistics.
#[utoipa::path(
    get,
    path = "/v1/admin/stats",
    tag = "Admin",
    responses(
        (status = 200, description = "System statistics", body = SystemStatsResponse),
        (status = 401, description = "Unauthorized - invalid or missing session token"),
        (status = 403, description = "Forbidden - session role is not admin"),
    )
)]
pub async fn system_stats(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Json<SystemStatsResponse> {
    Json(SystemStatsResponse {
        uptime_seconds: state.started_at.elapsed().as_secs(),
        timestamp: Utc::now().to_rfc3339(),
        requested_by: identity.user_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Role, SessionIdentity, TokenVerifier};
    use axum::extract::State;

    #[tokio::test]
    async fn system_stats_reports_requesting_admin() {
        let state = AppState::new(TokenVerifier::new(b"test-secret"));
        let identity = SessionIdentity {
            user_id: "admin_1".to_string(),
            email: "ops@relational.network".to_string(),
            role: Role::new("admin"),
        };

        let Json(response) = system_stats(State(state), CurrentUser(identity)).await;
        assert_eq!(response.requested_by, "admin_1");
        assert!(!response.timestamp.is_empty());
    }
}
