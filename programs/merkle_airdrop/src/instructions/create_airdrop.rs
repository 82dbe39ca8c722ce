use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new airdrop
 *
 * This instruction configures an airdrop deployment:
 * - Creates the airdrop PDA recording the operator and token mint
 * - Creates the token vault PDA owned by the airdrop PDA
 * - Optionally deposits an initial amount from the payer into the vault
 *
 * The merkle root is not part of creation; the operator commits it later
 * with commit_root.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateAirdrop<'info> {
    /// The airdrop account (PDA)
    /// - Derived from: ["airdrop", token_mint, operator]
    #[account(
        init,
        payer = payer,
        space = Airdrop::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            token_mint.key().as_ref(),
            operator.key().as_ref()
        ],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Controlled by the airdrop PDA as token authority
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = payer,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Payer's token account the initial deposit is taken from
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = payer,
        token::token_program = token_program,
    )]
    pub payer_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Pays for account creation and the initial deposit
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The operator account allowed to commit the merkle root
    /// CHECK: This account is validated by storing its key in the airdrop state
    pub operator: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new airdrop
 *
 * @param ctx - The account context containing all required accounts
 * @param initial_total_amount - Tokens moved into the vault now; may be zero
 *   when the vault is funded by a later plain transfer
 */
pub fn handle_create_airdrop(
    ctx: Context<CreateAirdrop>,
    initial_total_amount: u64,
) -> Result<()> {
    require!(
        ctx.accounts.operator.key() != Pubkey::default(),
        MerkleAirdropError::InvalidOperator
    );

    let airdrop = &mut ctx.accounts.airdrop;

    airdrop.bump = ctx.bumps.airdrop;
    airdrop.operator = ctx.accounts.operator.key();
    airdrop.token_mint = ctx.accounts.token_mint.key();
    airdrop.token_vault = ctx.accounts.token_vault.key();
    // merkle_root stays None until commit_root; counters start at 0

    if initial_total_amount > 0 {
        transfer_token(
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.payer_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            initial_total_amount,
            ctx.accounts.token_mint.decimals,
            None,
        )?;
    }

    msg!(
        "airdrop created: operator={} mint={} vault={} deposit={}",
        airdrop.operator,
        airdrop.token_mint,
        airdrop.token_vault,
        initial_total_amount
    );

    emit_cpi!(AirdropCreated {
        airdrop: airdrop.key(),
        operator: airdrop.operator,
        token_mint: airdrop.token_mint,
        token_vault: airdrop.token_vault,
        initial_total_amount,
    });

    Ok(())
}
