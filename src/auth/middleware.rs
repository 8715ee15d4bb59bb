// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The request gates.
//!
//! Three middleware stages guard downstream handlers:
//!
//! - [`session_gate`] requires a valid session token in the `accessToken`
//!   cookie and propagates [`SessionIdentity`].
//! - [`role_gate`] requires the propagated identity to carry an exact role.
//!   It must be layered inside a [`session_gate`]; if it is not, there is no
//!   identity to read and every request is denied (fail closed).
//! - [`wallet_gate`] is a parallel, independent path for the `walletToken`
//!   cookie, propagating [`WalletLink`].
//!
//! Each request performs exactly one verification attempt per gate; failures
//! are never cached or retried. Rejections log their specific kind but the
//! client only ever sees the generic 401/403 body.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::claims::{SessionClaims, SessionIdentity, WalletClaims, WalletLink};
use super::cookie::{get_cookie, ACCESS_TOKEN_COOKIE, WALLET_TOKEN_COOKIE};
use super::error::AuthError;
use super::roles::Role;
use crate::state::AppState;

/// Authentication gate: require a valid session token.
///
/// A missing cookie takes the same rejection path as a failed verification;
/// the client cannot distinguish the two.
pub async fn session_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match get_cookie(request.headers(), ACCESS_TOKEN_COOKIE) {
        Some(token) => token.to_owned(),
        None => return reject(AuthError::MissingCookie),
    };

    match state.verifier.verify::<SessionClaims>(&token) {
        Ok(claims) => {
            request
                .extensions_mut()
                .insert(SessionIdentity::from(claims));
            next.run(request).await
        }
        Err(err) => reject(err),
    }
}

/// Authorization gate: require the session role to equal `required`.
///
/// Reads the identity the authentication gate propagated; does not
/// re-verify the token. Matching is exact and case-sensitive, with no role
/// hierarchy.
pub async fn role_gate(required: Role, request: Request, next: Next) -> Response {
    match request.extensions().get::<SessionIdentity>() {
        Some(identity) if identity.role == required => next.run(request).await,
        Some(identity) => {
            tracing::debug!(
                role = %identity.role,
                required = %required,
                "session role does not match required role"
            );
            AuthError::InsufficientRole.into_response()
        }
        None => reject_forbidden_no_identity(),
    }
}

/// Wallet gate: require a valid linked-wallet token.
///
/// Surfaces `wallet_verified` for downstream logic without enforcing it.
pub async fn wallet_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match get_cookie(request.headers(), WALLET_TOKEN_COOKIE) {
        Some(token) => token.to_owned(),
        None => return reject(AuthError::MissingCookie),
    };

    match state.verifier.verify::<WalletClaims>(&token) {
        Ok(claims) => {
            request.extensions_mut().insert(WalletLink::from(claims));
            next.run(request).await
        }
        Err(err) => reject(err),
    }
}

fn reject(err: AuthError) -> Response {
    tracing::debug!(error_code = err.error_code(), "token rejected: {err}");
    err.into_response()
}

fn reject_forbidden_no_identity() -> Response {
    // The authentication gate did not run ahead of the role gate. That is a
    // router composition bug; deny rather than guess.
    tracing::warn!("role gate evaluated without a session identity");
    AuthError::InsufficientRole.into_response()
}
