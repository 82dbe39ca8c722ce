use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds and fixed values shared by the instructions and by off-chain
 * clients deriving the same addresses.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for airdrop PDA derivation
/// - Used in: ["airdrop", token_mint, operator]
/// - One airdrop per (token, operator) pair
/// - The airdrop PDA is the program's own identity: it owns the vault
#[constant]
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", airdrop_key]
/// - Holds the tokens paid out to claimants
#[constant]
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", airdrop_key, claimant_key]
/// - One record per (airdrop, claimant) pair, which is what makes a claim
///   possible at most once
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// ===== TRANSFER CONSTANTS =====

/// Memo attached (as a program log) to every payout
#[constant]
pub const TRANSFER_MEMO: &str = "airdrop";
