// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP API surface and router assembly.
//!
//! This is where the gates are installed in front of handlers. Health
//! probes and the docs UI are public; everything under `/v1` sits behind a
//! gate:
//!
//! - `/v1/users/me`: session gate
//! - `/v1/admin/*`: session gate, then role gate requiring "admin"
//! - `/v1/wallet/*`: wallet gate (independent of the session path)

use axum::{
    extract::Request,
    middleware::{self, Next},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{role_gate, session_gate, wallet_gate, Role};
use crate::state::AppState;

pub mod admin;
pub mod health;
pub mod users;
pub mod wallet;

pub fn router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin/stats", get(admin::system_stats))
        .layer(middleware::from_fn(|request: Request, next: Next| {
            role_gate(Role::new("admin"), request, next)
        }));

    // Session gate layered last so it runs before the role gate.
    let session_routes = Router::new()
        .route("/users/me", get(users::get_current_user))
        .merge(admin_routes)
        .layer(middleware::from_fn_with_state(state.clone(), session_gate));

    let wallet_routes = Router::new()
        .route("/wallet/status", get(wallet::wallet_status))
        .layer(middleware::from_fn_with_state(state.clone(), wallet_gate));

    let v1_routes = session_routes.merge(wallet_routes).with_state(state);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .nest("/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::liveness,
        health::readiness,
        users::get_current_user,
        admin::system_stats,
        wallet::wallet_status
    ),
    components(
        schemas(
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse,
            users::UserMeResponse,
            admin::SystemStatsResponse,
            wallet::WalletStatusResponse,
            Role
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Users", description = "Authenticated user information"),
        (name = "Admin", description = "Admin-only operational endpoints"),
        (name = "Wallet", description = "Linked-wallet status")
    )
)]
struct ApiDoc;
