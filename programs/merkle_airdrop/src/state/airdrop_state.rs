use anchor_lang::prelude::*;

use crate::error::MerkleAirdropError;

/**
 * Airdrop state account
 *
 * Holds the deployment configuration (operator, mint, vault) and the
 * one-time merkle root commitment.
 *
 * Derivation: ["airdrop", token_mint, operator]
 *
 * Lifecycle:
 * 1. Created during create_airdrop with no root
 * 2. Root committed exactly once by the operator
 * 3. Counters updated on every successful claim
 * 4. Never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct Airdrop {
    /// Bump seed for PDA derivation
    /// - Needed to sign vault transfers as the airdrop PDA
    pub bump: u8,

    /// Operator allowed to commit the merkle root
    pub operator: Pubkey,

    /// Token mint address
    /// - The only denomination claims are accepted in
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - Derived from: ["vault", airdrop_key]
    pub token_vault: Pubkey,

    /// Committed merkle root
    /// - None until commit_root, then fixed for the life of the airdrop
    pub merkle_root: Option<[u8; 32]>,

    /// Number of successful claims
    pub num_claims: u64,

    /// Total amount of tokens claimed by all users
    pub total_claimed: u64,
}

impl Airdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Airdrop>();

    pub fn is_root_committed(&self) -> bool {
        self.merkle_root.is_some()
    }

    /// Returns the committed root, or `NoRootCommitted` before commit_root.
    pub fn committed_root(&self) -> Result<[u8; 32]> {
        self.merkle_root
            .ok_or_else(|| error!(MerkleAirdropError::NoRootCommitted))
    }

    /// Commits `merkle_root` on behalf of `caller`.
    ///
    /// Only the configured operator may commit, and only once. A rejected
    /// call leaves the state untouched.
    pub fn commit_root(&mut self, caller: &Pubkey, merkle_root: [u8; 32]) -> Result<()> {
        require_keys_eq!(*caller, self.operator, MerkleAirdropError::OnlyOperator);
        require!(
            !self.is_root_committed(),
            MerkleAirdropError::RootAlreadyCommitted
        );

        self.merkle_root = Some(merkle_root);
        Ok(())
    }

    /// Adds a successful payout to the running totals.
    pub fn add_claim(&mut self, amount: u64) -> Result<()> {
        let num_claims = self
            .num_claims
            .checked_add(1)
            .ok_or(MerkleAirdropError::ArithmeticOverflow)?;
        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(MerkleAirdropError::ArithmeticOverflow)?;

        self.num_claims = num_claims;
        self.total_claimed = total_claimed;
        Ok(())
    }
}
