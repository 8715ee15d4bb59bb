// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;
use std::time::Instant;

use crate::auth::TokenVerifier;

/// Shared application state, cloned into every request handler.
///
/// The verifier is the only process-wide shared resource. It is read-only
/// for the lifetime of the service, so it is shared behind an `Arc` with no
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<TokenVerifier>,
    /// Process start time, reported by the admin stats endpoint.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self {
            verifier: Arc::new(verifier),
            started_at: Instant::now(),
        }
    }
}
