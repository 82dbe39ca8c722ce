use anchor_lang::prelude::Pubkey;

use super::error_code;
use crate::error::MerkleAirdropError;
use crate::state::Airdrop;
use crate::utils::hash;

fn new_airdrop(operator: Pubkey) -> Airdrop {
    Airdrop {
        operator,
        token_mint: Pubkey::new_unique(),
        ..Default::default()
    }
}

#[test]
fn test_new_airdrop_has_no_root() {
    let airdrop = new_airdrop(Pubkey::new_unique());

    assert!(!airdrop.is_root_committed());
    assert_eq!(
        error_code(airdrop.committed_root().unwrap_err()),
        u32::from(MerkleAirdropError::NoRootCommitted)
    );
}

#[test]
fn test_operator_commits_root() {
    let operator = Pubkey::new_unique();
    let mut airdrop = new_airdrop(operator);
    let root = hash(b"root");

    airdrop.commit_root(&operator, root).unwrap();

    assert!(airdrop.is_root_committed());
    assert_eq!(airdrop.committed_root().unwrap(), root);
}

#[test]
fn test_root_is_set_once() {
    let operator = Pubkey::new_unique();
    let mut airdrop = new_airdrop(operator);
    let root = hash(b"root");
    airdrop.commit_root(&operator, root).unwrap();

    for replacement in [hash(b"other root"), root] {
        let err = airdrop.commit_root(&operator, replacement).unwrap_err();
        assert_eq!(
            error_code(err),
            u32::from(MerkleAirdropError::RootAlreadyCommitted)
        );
        assert_eq!(airdrop.committed_root().unwrap(), root);
    }
}

#[test]
fn test_only_operator_commits_root() {
    let operator = Pubkey::new_unique();
    let mut airdrop = new_airdrop(operator);

    let err = airdrop
        .commit_root(&Pubkey::new_unique(), hash(b"root"))
        .unwrap_err();

    assert_eq!(error_code(err), u32::from(MerkleAirdropError::OnlyOperator));
    assert!(!airdrop.is_root_committed());
}

#[test]
fn test_authorization_checked_before_state() {
    let operator = Pubkey::new_unique();
    let mut airdrop = new_airdrop(operator);
    let root = hash(b"root");
    airdrop.commit_root(&operator, root).unwrap();

    let err = airdrop
        .commit_root(&Pubkey::new_unique(), hash(b"other root"))
        .unwrap_err();

    assert_eq!(error_code(err), u32::from(MerkleAirdropError::OnlyOperator));
    assert_eq!(airdrop.committed_root().unwrap(), root);
}
