//! The sponsored group as an explicit, I/O-free pipeline.
//!
//! ```text
//! SponsoredGroup::build      user (fee 0) + sponsor (fee 2 × min_fee), grouped
//!        │
//! sign_requests              [{user, [sender]}, {sponsor, []}]
//!        │
//! user_signature             index 0 must come back non-empty
//!        │
//! into_submission            base64(signed user), base64(unsigned sponsor)
//! ```
//!
//! Member order is fixed at [user, sponsor]. The group id is computed over
//! that order and the relayer appends its signed sponsor transaction after
//! the user's, so neither side may reorder.

use super::error::GaslessError;
use crate::relayer::SignAndSubmitRequest;
use crate::transaction::builder::{PaymentBuilder, PaymentTransaction};
use crate::transaction::encoding::{encode_unsigned, to_base64};
use crate::transaction::group::assign_group_id;
use crate::transaction::types::{GroupId, SuggestedParams};
use crate::wallet::SignRequest;

/// Index of the user's transaction in the group.
pub const USER_INDEX: usize = 0;

/// Index of the sponsor's transaction in the group.
pub const SPONSOR_INDEX: usize = 1;

/// What the caller wants to pay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub sender: String,
    pub receiver: String,
    /// Amount in microunits.
    pub amount: u64,
    pub note: Option<Vec<u8>>,
}

impl PaymentRequest {
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>, amount: u64) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<Vec<u8>>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A user payment and a sponsor fee payment bound into one atomic group.
#[derive(Debug, Clone)]
pub struct SponsoredGroup {
    signer: String,
    txns: [PaymentTransaction; 2],
    group_id: GroupId,
}

impl SponsoredGroup {
    /// Build and group both members from one set of params.
    ///
    /// The user transaction carries a flat fee of zero. The sponsor
    /// transaction is a zero-amount self-payment with a flat fee of exactly
    /// [`SuggestedParams::pooled_sponsor_fee`], covering both members.
    pub fn build(
        request: &PaymentRequest,
        sponsor: &str,
        params: &SuggestedParams,
    ) -> Result<Self, GaslessError> {
        let user = PaymentBuilder::new(params)
            .sender(&request.sender)
            .receiver(&request.receiver)
            .amount(request.amount)
            .note(request.note.clone())
            .flat_fee(0)
            .build();
        user.validate()?;

        let sponsor_txn = PaymentBuilder::new(params)
            .sender(sponsor)
            .receiver(sponsor)
            .amount(0)
            .flat_fee(params.pooled_sponsor_fee())
            .build();

        let mut txns = [user, sponsor_txn];
        let group_id = assign_group_id(&mut txns)?;

        tracing::debug!(
            group = %group_id,
            amount = request.amount,
            sponsor_fee = txns[SPONSOR_INDEX].fee,
            "built sponsored group"
        );

        Ok(Self {
            signer: request.sender.clone(),
            txns,
            group_id,
        })
    }

    pub fn user(&self) -> &PaymentTransaction {
        &self.txns[USER_INDEX]
    }

    pub fn sponsor(&self) -> &PaymentTransaction {
        &self.txns[SPONSOR_INDEX]
    }

    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Both members in group order.
    pub fn transactions(&self) -> &[PaymentTransaction] {
        &self.txns
    }

    /// The wallet request: the user signs index 0, nobody signs index 1.
    pub fn sign_requests(&self) -> Vec<SignRequest> {
        vec![
            SignRequest::signed_by(self.user().clone(), self.signer.clone()),
            SignRequest::unsigned(self.sponsor().clone()),
        ]
    }

    /// Take the user's signed bytes out of a wallet response.
    pub fn user_signature(signed: Vec<Option<Vec<u8>>>) -> Result<Vec<u8>, GaslessError> {
        signed
            .into_iter()
            .nth(USER_INDEX)
            .flatten()
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| GaslessError::UserDeclinedOrSigningFailed {
                reason: "wallet returned no signature for the user transaction".to_string(),
            })
    }

    /// Relayer body: the signed user transaction and the still-unsigned
    /// sponsor transaction, both base64.
    pub fn into_submission(
        self,
        signed_user: &[u8],
    ) -> Result<SignAndSubmitRequest, GaslessError> {
        let unsigned_sponsor = encode_unsigned(self.sponsor())?;
        Ok(SignAndSubmitRequest {
            signed_user_txns: vec![to_base64(signed_user)],
            unsigned_sponsor_txn: to_base64(&unsigned_sponsor),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::transaction::encoding::{decode_unsigned, from_base64};
    use crate::transaction::group::{compute_group_id, verify_group};

    fn params(min_fee: u64) -> SuggestedParams {
        SuggestedParams::from_round(40_000_000, min_fee, "testnet-v1.0", "genesis").unwrap()
    }

    fn group() -> SponsoredGroup {
        SponsoredGroup::build(
            &PaymentRequest::new("ALICE", "BOB", 1_000_000),
            "SPONSOR1",
            &params(1_000),
        )
        .unwrap()
    }

    #[test]
    fn user_transaction_shape() {
        let g = group();
        let user = g.user();
        assert_eq!(user.sender, "ALICE");
        assert_eq!(user.receiver, "BOB");
        assert_eq!(user.amount, 1_000_000);
        assert_eq!(user.fee, 0);
        assert!(user.flat_fee);
        assert!(user.note.is_none());
    }

    #[test]
    fn sponsor_transaction_shape() {
        let g = group();
        let sponsor = g.sponsor();
        assert_eq!(sponsor.sender, "SPONSOR1");
        assert_eq!(sponsor.receiver, "SPONSOR1");
        assert_eq!(sponsor.amount, 0);
        assert_eq!(sponsor.fee, 2_000);
        assert!(sponsor.flat_fee);
    }

    #[test]
    fn sponsor_fee_independent_of_amount() {
        for amount in [0, 1, 1_000_000, u64::MAX] {
            let g = SponsoredGroup::build(
                &PaymentRequest::new("ALICE", "BOB", amount),
                "SPONSOR1",
                &params(1_000),
            )
            .unwrap();
            assert_eq!(g.sponsor().fee, 2 * 1_000);
            assert_eq!(g.user().fee, 0);
        }
    }

    #[test]
    fn sponsor_fee_tracks_network_min_fee() {
        let g = SponsoredGroup::build(
            &PaymentRequest::new("ALICE", "BOB", 5),
            "SPONSOR1",
            &params(1_750),
        )
        .unwrap();
        assert_eq!(g.sponsor().fee, 3_500);
    }

    #[test]
    fn members_share_one_recomputable_group_id() {
        let g = group();
        assert_eq!(g.user().group, Some(g.group_id()));
        assert_eq!(g.sponsor().group, Some(g.group_id()));
        assert_eq!(verify_group(g.transactions()).unwrap(), g.group_id());

        let reversed = [g.sponsor().clone(), g.user().clone()];
        assert_ne!(compute_group_id(&reversed).unwrap(), g.group_id());
    }

    #[test]
    fn both_members_share_validity_window() {
        let g = group();
        assert_eq!(g.user().first_valid, g.sponsor().first_valid);
        assert_eq!(g.user().last_valid, g.sponsor().last_valid);
        assert_eq!(g.user().genesis_hash, g.sponsor().genesis_hash);
    }

    #[test]
    fn sign_requests_only_name_the_user() {
        let requests = group().sign_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[USER_INDEX].signers, vec!["ALICE".to_string()]);
        assert!(requests[SPONSOR_INDEX].signers.is_empty());
        assert_eq!(requests[SPONSOR_INDEX].txn.sender, "SPONSOR1");
    }

    #[test]
    fn user_signature_requires_non_empty_first_slot() {
        assert_eq!(
            SponsoredGroup::user_signature(vec![Some(vec![1, 2, 3]), None]).unwrap(),
            vec![1, 2, 3]
        );
        for bad in [vec![], vec![None, Some(vec![9])], vec![Some(vec![]), None]] {
            assert!(matches!(
                SponsoredGroup::user_signature(bad),
                Err(GaslessError::UserDeclinedOrSigningFailed { .. })
            ));
        }
    }

    #[test]
    fn submission_carries_one_signed_and_one_unsigned() {
        let g = group();
        let sponsor = g.sponsor().clone();
        let body = g.into_submission(b"signed-user-bytes").unwrap();

        assert_eq!(body.signed_user_txns.len(), 1);
        assert_eq!(
            from_base64(&body.signed_user_txns[0]).unwrap(),
            b"signed-user-bytes".to_vec()
        );
        let decoded = decode_unsigned(&from_base64(&body.unsigned_sponsor_txn).unwrap()).unwrap();
        assert_eq!(decoded, sponsor);
    }

    #[test]
    fn oversized_note_rejected_before_grouping() {
        let request = PaymentRequest::new("ALICE", "BOB", 1)
            .with_note(vec![0u8; config::MAX_NOTE_LENGTH + 1]);
        assert!(matches!(
            SponsoredGroup::build(&request, "SPONSOR1", &params(1_000)),
            Err(GaslessError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn note_lands_on_user_transaction_only() {
        let request = PaymentRequest::new("ALICE", "BOB", 1).with_note(b"CS101 lab fee".to_vec());
        let g = SponsoredGroup::build(&request, "SPONSOR1", &params(1_000)).unwrap();
        assert_eq!(g.user().note.as_deref(), Some(&b"CS101 lab fee"[..]));
        assert!(g.sponsor().note.is_none());
    }
}
