use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::utils::{leaf, transfer_token, verify};
use crate::constants::*;
use crate::event::*;

/// Quantity of a token, tagged with the mint it is denominated in
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAmount {
    pub mint: Pubkey,
    pub amount: u64,
}

/**
 * Account context for claiming tokens
 *
 * The claimant proves its (account, amount) entitlement against the
 * committed merkle root and receives the amount from the vault. Each
 * claimant can succeed once per airdrop.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The airdrop account holding the committed root
    /// - Will be modified to update the claim counters
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// Claim record for this claimant
    /// - Derived from: ["claim", airdrop_key, claimant_key]
    /// - Created empty on the first attempt, filled in on success
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint, needed for transfer_checked
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ MerkleAirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The claimant, signing for its own account
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Runs every claim precondition, in order, without touching state:
/// 1. the signer claims for its own account
/// 2. a root is committed
/// 3. the amount is denominated in the airdrop's mint
/// 4. the account has not claimed yet
/// 5. the proof places `"<account> <amount>"` under the committed root
///
/// Returns the amount to pay out.
pub fn check_claim(
    airdrop: &Airdrop,
    claim_status: &ClaimStatus,
    signer: &Pubkey,
    account: &Pubkey,
    amount: &TokenAmount,
    proof: &[[u8; 32]],
) -> Result<u64> {
    require_keys_eq!(*signer, *account, MerkleAirdropError::ClaimantMismatch);

    let root = airdrop.committed_root()?;

    require_keys_eq!(
        amount.mint,
        airdrop.token_mint,
        MerkleAirdropError::TokenMintMismatch
    );
    require!(
        !claim_status.has_claimed(),
        MerkleAirdropError::AlreadyClaimed
    );

    require!(
        verify(leaf(account, amount.amount), proof, root),
        MerkleAirdropError::InvalidProof
    );

    Ok(amount.amount)
}

/**
 * Processes a claim
 *
 * @param ctx - The account context containing all required accounts
 * @param account - The entitled account; must be the signer
 * @param amount - The entitled amount and its mint, exactly as in the tree
 * @param proof - Sibling hashes from the leaf up to the root
 *
 * The payout and the claim record are written in the same transaction, so
 * a failed transfer leaves the claimant free to retry.
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    account: Pubkey,
    amount: TokenAmount,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let payout = check_claim(
        &ctx.accounts.airdrop,
        &ctx.accounts.claim_status,
        &ctx.accounts.claimant.key(),
        &account,
        &amount,
        &proof,
    )?;

    require!(
        ctx.accounts.token_vault.amount >= payout,
        MerkleAirdropError::InsufficientVaultBalance
    );

    let airdrop_key = ctx.accounts.airdrop.key();
    let token_mint_key = ctx.accounts.airdrop.token_mint;
    let operator_key = ctx.accounts.airdrop.operator;
    let airdrop_bump = ctx.accounts.airdrop.bump;

    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        token_mint_key.as_ref(),
        operator_key.as_ref(),
        &[airdrop_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.airdrop.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        payout,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;
    msg!("{}: {} sent to {}", TRANSFER_MEMO, payout, account);

    let claimed_at = Clock::get()?.unix_timestamp;
    ctx.accounts
        .claim_status
        .record_claim(account, payout, claimed_at)?;

    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.add_claim(payout)?;

    emit_cpi!(TokensClaimed {
        airdrop: airdrop_key,
        claimant: account,
        amount: payout,
        num_claims: airdrop.num_claims,
        total_claimed: airdrop.total_claimed,
    });

    Ok(())
}
