//! Atomic grouping.
//!
//! A group id is `SHA-512/256("TG" ‖ id₀ ‖ id₁ ‖ …)` over the *ungrouped*
//! ids of the members, in order. Every member then carries that id, and the
//! network commits all of them or none. Swapping two members changes the id,
//! so a relayer that recomputes over a reordered list gets a mismatch.

use thiserror::Error;

use super::builder::PaymentTransaction;
use super::types::GroupId;
use crate::config;
use crate::crypto::hash::hash_with_prefix;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    #[error("cannot group an empty transaction list")]
    Empty,

    #[error("group of {0} transactions exceeds the limit of {max}", max = config::MAX_GROUP_SIZE)]
    TooLarge(usize),

    #[error("transaction {index} carries no group id")]
    MissingGroup { index: usize },

    #[error("transaction {index} group id does not match the recomputed id")]
    Mismatch { index: usize },
}

fn check_size(len: usize) -> Result<(), GroupError> {
    if len == 0 {
        return Err(GroupError::Empty);
    }
    if len > config::MAX_GROUP_SIZE {
        return Err(GroupError::TooLarge(len));
    }
    Ok(())
}

/// Compute the group id for `txns` in the given order. Existing group
/// fields are ignored.
pub fn compute_group_id(txns: &[PaymentTransaction]) -> Result<GroupId, GroupError> {
    check_size(txns.len())?;

    let mut concatenated = Vec::with_capacity(txns.len() * 32);
    for txn in txns {
        concatenated.extend_from_slice(&txn.ungrouped_id());
    }
    Ok(GroupId(hash_with_prefix(
        config::GROUP_HASH_PREFIX,
        &concatenated,
    )))
}

/// Compute the group id and write it into every member.
pub fn assign_group_id(txns: &mut [PaymentTransaction]) -> Result<GroupId, GroupError> {
    let gid = compute_group_id(txns)?;
    for txn in txns.iter_mut() {
        txn.group = Some(gid);
    }
    tracing::debug!(group = %gid, size = txns.len(), "assigned group id");
    Ok(gid)
}

/// Check that every member carries the id recomputed over this exact order.
pub fn verify_group(txns: &[PaymentTransaction]) -> Result<GroupId, GroupError> {
    let expected = compute_group_id(txns)?;
    for (index, txn) in txns.iter().enumerate() {
        match txn.group {
            None => return Err(GroupError::MissingGroup { index }),
            Some(gid) if gid != expected => return Err(GroupError::Mismatch { index }),
            Some(_) => {}
        }
    }
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::builder::PaymentBuilder;
    use crate::transaction::types::SuggestedParams;

    fn pair() -> Vec<PaymentTransaction> {
        let params = SuggestedParams::from_round(100, 1_000, "testnet-v1.0", "genesis").unwrap();
        let user = PaymentBuilder::new(&params)
            .sender("ALICE")
            .receiver("BOB")
            .amount(1_000_000)
            .flat_fee(0)
            .build();
        let sponsor = PaymentBuilder::new(&params)
            .sender("SPONSOR")
            .receiver("SPONSOR")
            .flat_fee(2_000)
            .build();
        vec![user, sponsor]
    }

    #[test]
    fn assign_sets_identical_id_on_all_members() {
        let mut txns = pair();
        let gid = assign_group_id(&mut txns).unwrap();
        assert_eq!(txns[0].group, Some(gid));
        assert_eq!(txns[1].group, Some(gid));
    }

    #[test]
    fn recomputation_is_stable_after_assignment() {
        let mut txns = pair();
        let gid = assign_group_id(&mut txns).unwrap();
        assert_eq!(compute_group_id(&txns).unwrap(), gid);
        assert_eq!(verify_group(&txns).unwrap(), gid);
    }

    #[test]
    fn order_matters() {
        let txns = pair();
        let forward = compute_group_id(&txns).unwrap();
        let reversed: Vec<_> = txns.iter().rev().cloned().collect();
        assert_ne!(forward, compute_group_id(&reversed).unwrap());
    }

    #[test]
    fn reordered_group_fails_verification() {
        let mut txns = pair();
        assign_group_id(&mut txns).unwrap();
        txns.swap(0, 1);
        assert_eq!(
            verify_group(&txns).unwrap_err(),
            GroupError::Mismatch { index: 0 }
        );
    }

    #[test]
    fn missing_member_changes_id() {
        let mut txns = pair();
        let gid = assign_group_id(&mut txns).unwrap();
        assert_ne!(compute_group_id(&txns[..1]).unwrap(), gid);
        assert!(verify_group(&txns[..1]).is_err());
    }

    #[test]
    fn tampered_member_fails_verification() {
        let mut txns = pair();
        assign_group_id(&mut txns).unwrap();
        txns[1].fee = 1_000;
        assert_eq!(
            verify_group(&txns).unwrap_err(),
            GroupError::Mismatch { index: 0 }
        );
    }

    #[test]
    fn ungrouped_member_reported() {
        let mut txns = pair();
        assign_group_id(&mut txns).unwrap();
        txns[1].group = None;
        assert_eq!(
            verify_group(&txns).unwrap_err(),
            GroupError::MissingGroup { index: 1 }
        );
    }

    #[test]
    fn size_limits() {
        assert_eq!(compute_group_id(&[]).unwrap_err(), GroupError::Empty);
        let many: Vec<_> = std::iter::repeat(pair()[0].clone())
            .take(config::MAX_GROUP_SIZE + 1)
            .collect();
        assert_eq!(
            compute_group_id(&many).unwrap_err(),
            GroupError::TooLarge(config::MAX_GROUP_SIZE + 1)
        );
    }
}
