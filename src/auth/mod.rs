// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Cookie-based JWT authentication and role gating.
//!
//! ## Auth Flow
//!
//! 1. The login flow (external to this service) sets the `accessToken`
//!    cookie with an HMAC-signed JWT; wallet linking sets `walletToken`.
//! 2. On each request the session gate:
//!    - Reads the token from the cookie
//!    - Verifies algorithm, signature, and temporal claims against the
//!      shared `JWT_KEY` secret
//!    - Propagates `userId`, `email`, and `role` as a typed
//!      [`SessionIdentity`] in the request extensions
//! 3. Routes that require a role add the role gate, an exact case-sensitive
//!    match against the propagated identity.
//! 4. Wallet routes use the independent wallet gate, which propagates
//!    [`WalletLink`] without enforcing `walletVerified`.
//!
//! ## Security
//!
//! - Only HMAC-family algorithms are accepted; tokens declaring anything
//!   else (including `none`) are rejected before signature comparison
//! - Rejection responses carry the generic status text only; failure
//!   kinds are logged, never disclosed to the client
//! - Clock skew tolerance is 60 seconds

pub mod claims;
pub mod cookie;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod roles;
pub mod verifier;

pub use claims::{SessionClaims, SessionIdentity, WalletClaims, WalletLink};
pub use cookie::{ACCESS_TOKEN_COOKIE, WALLET_TOKEN_COOKIE};
pub use error::AuthError;
pub use extract::{CurrentUser, LinkedWallet};
pub use middleware::{role_gate, session_gate, wallet_gate};
pub use roles::Role;
pub use verifier::TokenVerifier;
