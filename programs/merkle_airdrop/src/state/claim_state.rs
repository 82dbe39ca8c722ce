use anchor_lang::prelude::*;

use crate::error::MerkleAirdropError;

/**
 * Individual claim status account
 *
 * Records that a claimant has received its allocation from an airdrop.
 *
 * Derivation: ["claim", airdrop_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created empty on the first claim attempt (using init_if_needed)
 * 2. Filled in once the payout succeeds
 * 3. Never modified or closed afterwards
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Whether the allocation has been paid out
    pub claimed: bool,
    /// Account that claimed
    pub claimant: Pubkey,
    /// Amount paid out
    pub amount: u64,
    /// Unix timestamp of the claim
    pub claimed_at: i64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    pub fn has_claimed(&self) -> bool {
        self.claimed
    }

    /// Marks the allocation as paid out. Fails if it already was.
    pub fn record_claim(&mut self, claimant: Pubkey, amount: u64, claimed_at: i64) -> Result<()> {
        require!(!self.has_claimed(), MerkleAirdropError::AlreadyClaimed);

        self.claimed = true;
        self.claimant = claimant;
        self.amount = amount;
        self.claimed_at = claimed_at;
        Ok(())
    }
}
