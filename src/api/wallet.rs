// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Linked-wallet endpoints.
//!
//! These routes sit behind the wallet gate, which verifies the wallet token
//! and surfaces the link state. Whether an unverified wallet may use a
//! feature is decided here, per route; the gate does not enforce it.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{LinkedWallet, WalletLink};

/// Response for GET /v1/wallet/status
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletStatusResponse {
    /// Whether the wallet ownership proof succeeded at link time.
    pub wallet_verified: bool,
}

impl From<WalletLink> for WalletStatusResponse {
    fn from(link: WalletLink) -> Self {
        Self {
            wallet_verified: link.wallet_verified,
        }
    }
}

/// Get the linked-wallet status for the current request.
#[utoipa::path(
    get,
    path = "/v1/wallet/status",
    tag = "Wallet",
    responses(
        (status = 200, description = "Wallet link status", body = WalletStatusResponse),
        (status = 401, description = "Unauthorized - invalid or missing wallet token"),
    )
)]
pub async fn wallet_status(LinkedWallet(link): LinkedWallet) -> Json<WalletStatusResponse> {
    Json(link.into())
}
