// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication and authorization errors.
//!
//! Internally every rejection is classified so it can be logged with its
//! specific kind. At the HTTP boundary all of them collapse into exactly two
//! client-visible outcomes: 401 for authentication failures and 403 for the
//! role mismatch, each with the bare status text as the body. The response
//! never discloses which check failed, so a caller probing with forged
//! tokens learns nothing about how far a token got through verification.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Classified failure from token verification or gate evaluation.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The expected cookie was not present on the request
    MissingCookie,
    /// Token could not be parsed into header/claims/signature segments
    MalformedToken,
    /// Token header declares a non-HMAC signing algorithm
    UnexpectedSigningMethod,
    /// Token signature does not match the shared secret
    InvalidSignature,
    /// Token has expired
    TokenExpired,
    /// Token is not yet valid (`nbf` in the future)
    TokenNotYetValid,
    /// Claims payload is missing required fields or mis-shaped
    ClaimsDecode,
    /// Session role does not match the role required by the route
    InsufficientRole,
}

impl AuthError {
    /// Stable label for this error, used in logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingCookie => "missing_cookie",
            AuthError::MalformedToken => "malformed_token",
            AuthError::UnexpectedSigningMethod => "unexpected_signing_method",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::TokenExpired => "token_expired",
            AuthError::TokenNotYetValid => "token_not_yet_valid",
            AuthError::ClaimsDecode => "claims_decode",
            AuthError::InsufficientRole => "insufficient_role",
        }
    }

    /// The HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCookie
            | AuthError::MalformedToken
            | AuthError::UnexpectedSigningMethod
            | AuthError::InvalidSignature
            | AuthError::TokenExpired
            | AuthError::TokenNotYetValid
            | AuthError::ClaimsDecode => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientRole => StatusCode::FORBIDDEN,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingCookie => write!(f, "Required token cookie is missing"),
            AuthError::MalformedToken => write!(f, "Token is malformed"),
            AuthError::UnexpectedSigningMethod => {
                write!(f, "Token declares an unexpected signing method")
            }
            AuthError::InvalidSignature => write!(f, "Token signature is invalid"),
            AuthError::TokenExpired => write!(f, "Token has expired"),
            AuthError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            AuthError::ClaimsDecode => write!(f, "Token claims could not be decoded"),
            AuthError::InsufficientRole => {
                write!(f, "Session role does not satisfy the required role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    /// Collapse to the generic status-text body.
    ///
    /// The body is intentionally identical for every failure behind the same
    /// status code.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = status.canonical_reason().unwrap_or("Error").to_string();
        (status, body).into_response()
    }
}
