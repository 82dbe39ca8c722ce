//! Address derivation shared with off-chain clients.

use anchor_lang::prelude::Pubkey;

use crate::constants::{AIRDROP_SEED, CLAIM_SEED, VAULT_SEED};

pub fn find_airdrop_address(
    program_id: &Pubkey,
    token_mint: &Pubkey,
    operator: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            AIRDROP_SEED.as_bytes(),
            token_mint.as_ref(),
            operator.as_ref(),
        ],
        program_id,
    )
}

pub fn find_vault_address(program_id: &Pubkey, airdrop: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED.as_bytes(), airdrop.as_ref()], program_id)
}

pub fn find_claim_status_address(
    program_id: &Pubkey,
    airdrop: &Pubkey,
    claimant: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CLAIM_SEED.as_bytes(), airdrop.as_ref(), claimant.as_ref()],
        program_id,
    )
}
