use anchor_lang::prelude::*;

declare_id!("5pD3mCtTkvKtQWmrnxY7ZYEbv2Aa9uiiMRhA5tFQ7xVd");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Merkle Airdrop Program
 *
 * Distributes a fixed list of (account, amount) entitlements. The operator
 * commits a single merkle root over the list, after which every listed
 * account can claim its amount once by presenting an inclusion proof.
 *
 * Architecture:
 * - Airdrop PDA: operator, token mint, vault and the committed root
 * - Token Vault PDA: holds the tokens to be distributed
 * - Claim Status PDAs: one per claimant, set once on a successful claim
 *
 * Workflow:
 * 1. Payer creates the airdrop and funds the vault
 * 2. Operator commits the merkle root, once
 * 3. Each entitled account claims with its merkle proof, once
 */
#[program]
pub mod merkle_airdrop {
    use super::*;

    /**
     * Creates a new airdrop
     *
     * @param ctx - Account context containing airdrop, vault, mint, payer and operator accounts
     * @param initial_total_amount - Amount of tokens deposited into the vault now
     *
     * Access Control: Anyone; the operator is fixed here
     */
    pub fn create_airdrop(ctx: Context<CreateAirdrop>, initial_total_amount: u64) -> Result<()> {
        handle_create_airdrop(ctx, initial_total_amount)
    }

    /**
     * Commits the merkle root for claim verification
     *
     * @param ctx - Account context containing airdrop and operator accounts
     * @param merkle_root - 32-byte root of the entitlement tree
     *
     * Access Control: Operator only
     * Note: The root can be committed once and never changed
     */
    pub fn commit_root(ctx: Context<CommitRoot>, merkle_root: [u8; 32]) -> Result<()> {
        handle_commit_root(ctx, merkle_root)
    }

    /**
     * Claims an entitlement with merkle proof verification
     *
     * @param ctx - Account context containing airdrop, claim status, and token accounts
     * @param account - Entitled account, must sign
     * @param amount - Entitled amount and its mint
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: The entitled account itself, once
     */
    pub fn claim(
        ctx: Context<Claim>,
        account: Pubkey,
        amount: TokenAmount,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, account, amount, proof)
    }
}
