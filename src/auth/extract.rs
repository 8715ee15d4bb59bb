// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractors for the gate-propagated request context.
//!
//! Handlers behind the gates take these as parameters instead of reaching
//! into request extensions, so the dependency on a verified identity is
//! visible in the handler signature:
//!
//! ```rust,ignore
//! async fn my_handler(CurrentUser(identity): CurrentUser) -> impl IntoResponse {
//!     // identity passed full verification in the session gate
//! }
//! ```
//!
//! The extractors never verify tokens themselves; that is the gates' job.
//! On a route where the corresponding gate did not run there is nothing to
//! extract and the request is rejected, fail closed.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::claims::{SessionIdentity, WalletLink};
use super::error::AuthError;

/// Extracts the verified session identity propagated by the session gate.
pub struct CurrentUser(pub SessionIdentity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionIdentity>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AuthError::MissingCookie)
    }
}

/// Extracts the verified wallet-link state propagated by the wallet gate.
pub struct LinkedWallet(pub WalletLink);

impl<S> FromRequestParts<S> for LinkedWallet
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<WalletLink>()
            .copied()
            .map(LinkedWallet)
            .ok_or(AuthError::MissingCookie)
    }
}
