//! The gasless transfer orchestrator.
//!
//! Drives [`SponsoredGroup`] through discovery, params, build, group, sign,
//! and relay, strictly in that order. Each call owns its own params and its
//! own group; concurrent transfers share only the relayer client's
//! connection pool.

use super::error::GaslessError;
use super::pipeline::{PaymentRequest, SponsoredGroup};
use crate::config::GaslessConfig;
use crate::network::ParamsSource;
use crate::relayer::{RelayerClient, RelayerReceipt};
use crate::wallet::TransactionSigner;

/// Sends payments whose network fees are paid by a sponsor.
#[derive(Debug, Clone)]
pub struct GaslessOrchestrator {
    relayer: RelayerClient,
}

impl GaslessOrchestrator {
    pub fn new(config: GaslessConfig) -> Result<Self, GaslessError> {
        Ok(Self {
            relayer: RelayerClient::new(config)?,
        })
    }

    pub fn with_relayer(relayer: RelayerClient) -> Self {
        Self { relayer }
    }

    pub fn relayer(&self) -> &RelayerClient {
        &self.relayer
    }

    pub fn config(&self) -> &GaslessConfig {
        self.relayer.config()
    }

    /// Whether the relayer advertises sponsorship. Never errors; an
    /// unreachable relayer reads as disabled. Callers decide what to do
    /// when it is off; this crate never falls back to a fee-paying transfer.
    pub async fn is_gasless_enabled(&self) -> bool {
        self.relayer.gasless_enabled().await
    }

    /// Send `request.amount` from `request.sender` to `request.receiver`
    /// with the sponsor paying every fee.
    ///
    /// 1. Discover the sponsor address. Missing → [`GaslessError::SponsorUnavailable`].
    /// 2. Fetch params once, shared by both members.
    /// 3. Build user (fee 0) and sponsor (fee 2 × min) payments and group them.
    /// 4. Ask `signer` to sign index 0 only.
    /// 5. Relay the signed user and unsigned sponsor transactions.
    ///
    /// Any failure aborts the transfer. Nothing is retried.
    pub async fn send_gasless_payment(
        &self,
        request: PaymentRequest,
        params_source: &dyn ParamsSource,
        signer: &dyn TransactionSigner,
    ) -> Result<RelayerReceipt, GaslessError> {
        let sponsor = self
            .relayer
            .sponsor_address()
            .await?
            .ok_or(GaslessError::SponsorUnavailable)?;

        let params = params_source.suggested_params().await?;
        let group = SponsoredGroup::build(&request, &sponsor, &params)?;

        tracing::info!(
            group = %group.group_id(),
            sender = %request.sender,
            receiver = %request.receiver,
            amount = request.amount,
            "requesting user signature for sponsored group"
        );
        let signed = signer
            .sign_transactions(&group.sign_requests())
            .await
            .map_err(|e| GaslessError::UserDeclinedOrSigningFailed {
                reason: e.to_string(),
            })?;
        let signed_user = SponsoredGroup::user_signature(signed)?;

        let group_id = group.group_id();
        let submission = group.into_submission(&signed_user)?;

        tracing::info!(group = %group_id, "submitting sponsored group to relayer");
        let response = self.relayer.sign_and_submit(&submission).await?;

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| "Sponsorship failed".to_string());
            tracing::warn!(group = %group_id, error = %message, "relayer rejected sponsored group");
            return Err(GaslessError::SponsorshipFailed(message));
        }

        tracing::info!(
            group = %group_id,
            tx_id = response.tx_id.as_deref().unwrap_or("-"),
            "sponsored group accepted"
        );
        Ok(RelayerReceipt::from(response))
    }
}
