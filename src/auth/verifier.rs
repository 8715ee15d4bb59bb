// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token verification against the shared HMAC secret.
//!
//! One generic verifier serves both token paths: `verify::<SessionClaims>`
//! for the session cookie and `verify::<WalletClaims>` for the wallet
//! cookie. Verification is pure computation: the secret is injected at
//! construction and nothing here touches the environment, network, or disk.
//!
//! Checks run in order:
//!
//! 1. Parse the declared signing algorithm from the token header; reject
//!    anything outside the symmetric-HMAC family before any signature work.
//!    This closes algorithm-substitution attacks ("none", RS256, ...).
//! 2. Recompute and compare the signature with the shared secret.
//! 3. Validate temporal claims (`exp` required, `nbf` honored when present)
//!    with clock-skew leeway.
//! 4. Deserialize the payload into the caller's claims type.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{de::DeserializeOwned, Deserialize};

use super::error::AuthError;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Minimal header shape used to inspect the declared algorithm.
///
/// Deliberately more lenient than `jsonwebtoken::Header`: a header that
/// parses but declares an algorithm we do not provision (including `none`)
/// must classify as an unexpected signing method, not as malformed.
#[derive(Debug, Deserialize)]
struct RawHeader {
    alg: String,
}

/// Verifies signed tokens with a process-wide shared secret.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
}

impl TokenVerifier {
    /// Build a verifier around the shared secret.
    ///
    /// The secret is configured once at startup and read-only thereafter;
    /// key rotation is not supported.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Verify a token and decode its claims into `T`.
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, AuthError> {
        let algorithm = declared_algorithm(token)?;

        let mut validation = Validation::new(algorithm);
        validation.leeway = CLOCK_SKEW_LEEWAY;
        validation.validate_nbf = true;
        validation.validate_aud = false;

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid,
                ErrorKind::MissingRequiredClaim(_) => AuthError::ClaimsDecode,
                ErrorKind::Json(_) => AuthError::ClaimsDecode,
                _ => AuthError::MalformedToken,
            })?;

        Ok(token_data.claims)
    }
}

/// Parse the header segment and require an HMAC-family algorithm.
fn declared_algorithm(token: &str) -> Result<Algorithm, AuthError> {
    let header_segment = token
        .split('.')
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or(AuthError::MalformedToken)?;

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header_segment)
        .map_err(|_| AuthError::MalformedToken)?;
    let header: RawHeader =
        serde_json::from_slice(&header_bytes).map_err(|_| AuthError::MalformedToken)?;

    match header.alg.as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(AuthError::UnexpectedSigningMethod),
    }
}
