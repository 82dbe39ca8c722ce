use anchor_lang::prelude::*;
use crate::state::*;
use crate::event::*;

/**
 * Account context for committing the merkle root
 *
 * The root commits to every (account, amount) entitlement of the airdrop.
 * It can be committed once; there is no update or reset.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CommitRoot<'info> {
    /// The airdrop account to update
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// Must be the operator stored in the airdrop state
    pub operator: Signer<'info>,
}

/**
 * Commits the merkle root of the airdrop
 *
 * Merkle Tree Structure:
 * - Each leaf: sha256("<claimant_base58> <amount>")
 * - Intermediate nodes: sha256(min(a, b) || max(a, b))
 *
 * Validation Rules:
 * - Only the designated operator can commit
 * - A root that is already committed cannot be replaced
 */
pub fn handle_commit_root(ctx: Context<CommitRoot>, merkle_root: [u8; 32]) -> Result<()> {
    let operator = ctx.accounts.operator.key();
    let airdrop = &mut ctx.accounts.airdrop;

    airdrop.commit_root(&operator, merkle_root)?;

    msg!("merkle root committed by {}", operator);

    emit_cpi!(RootCommitted {
        airdrop: airdrop.key(),
        operator,
        merkle_root,
    });

    Ok(())
}
