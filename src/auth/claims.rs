// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token claims and the typed request context derived from them.
//!
//! Two claim shapes exist: [`SessionClaims`] from the session token and
//! [`WalletClaims`] from the linked-wallet token. Both are produced only by
//! successful verification in [`super::TokenVerifier`] and live for a single
//! request.
//!
//! The gates do not hand raw claims to downstream handlers. They convert
//! them into the narrower context types [`SessionIdentity`] and
//! [`WalletLink`] and insert those into the request extensions, so handlers
//! read exactly the fields the gates vouch for and nothing else.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::roles::Role;

/// Claims carried by a session token.
///
/// Custom fields use camelCase wire names (`userId`); registered JWT claims
/// keep their standard short names. `exp` is required; a token without an
/// expiry fails verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// Email the user supplied at issuance. Not re-validated here.
    pub email: String,

    /// Opaque stable user identifier.
    pub user_id: String,

    /// Role granted at issuance, opaque to this layer.
    pub role: Role,

    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,

    /// Issued-at timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Not-before timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}

/// Claims carried by a linked-wallet token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletClaims {
    /// Blockchain account identifier, opaque to this layer.
    pub wallet_address: String,

    /// Anti-replay value minted at issuance. Not checked against a store
    /// here.
    pub wallet_nonce: String,

    /// Whether the wallet ownership proof succeeded at issuance time.
    pub wallet_verified: bool,

    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,

    /// Issued-at timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Not-before timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}

/// Verified session identity propagated to downstream handlers.
///
/// Constructed only from [`SessionClaims`] that passed full verification;
/// inserted into request extensions by the authentication gate.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionIdentity {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl From<SessionClaims> for SessionIdentity {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Verified wallet-link state propagated to downstream handlers.
///
/// The wallet gate surfaces `wallet_verified` without enforcing it; whether
/// an unverified wallet may proceed is a downstream decision.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct WalletLink {
    pub wallet_verified: bool,
}

impl From<WalletClaims> for WalletLink {
    fn from(claims: WalletClaims) -> Self {
        Self {
            wallet_verified: claims.wallet_verified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_claims_deserialize_camel_case() {
        let json = r#"{
            "email": "a@b.com",
            "userId": "u1",
            "role": "admin",
            "iss": "relational",
            "exp": 4102444800,
            "iat": 1700000000
        }"#;

        let claims: SessionClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.user_id, "u1");
        assert_eq!(claims.role, Role::new("admin"));
        assert_eq!(claims.iss.as_deref(), Some("relational"));
        assert_eq!(claims.exp, 4102444800);
        assert_eq!(claims.nbf, None);
    }

    #[test]
    fn session_claims_require_role() {
        let json = r#"{"email": "a@b.com", "userId": "u1", "exp": 4102444800}"#;
        assert!(serde_json::from_str::<SessionClaims>(json).is_err());
    }

    #[test]
    fn wallet_claims_deserialize_camel_case() {
        let json = r#"{
            "walletAddress": "0xabc",
            "walletNonce": "n-1",
            "walletVerified": false,
            "exp": 4102444800
        }"#;

        let claims: WalletClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.wallet_address, "0xabc");
        assert_eq!(claims.wallet_nonce, "n-1");
        assert!(!claims.wallet_verified);
    }

    #[test]
    fn session_identity_keeps_identity_fields_only() {
        let claims = SessionClaims {
            email: "a@b.com".to_string(),
            user_id: "u1".to_string(),
            role: Role::new("user"),
            iss: Some("relational".to_string()),
            sub: Some("u1".to_string()),
            exp: 4102444800,
            iat: Some(1700000000),
            nbf: None,
        };

        let identity = SessionIdentity::from(claims);
        assert_eq!(identity.user_id, "u1");
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.role, Role::new("user"));
    }

    #[test]
    fn wallet_link_carries_verified_flag() {
        let claims = WalletClaims {
            wallet_address: "0xabc".to_string(),
            wallet_nonce: "n-1".to_string(),
            wallet_verified: true,
            iss: None,
            sub: None,
            exp: 4102444800,
            iat: None,
            nbf: None,
        };

        assert!(WalletLink::from(claims).wallet_verified);
    }
}
