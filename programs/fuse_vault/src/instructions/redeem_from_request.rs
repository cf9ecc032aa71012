use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    helpers::{access, ledger, math},
    state::{ShareAccount, Vault},
};

/// Privileged redemption for the scheduled-withdrawal collaborator. The
/// request authority vouches for a previously recorded window, so the normal
/// max-redeem bound is skipped; fee settlement and conversion math are
/// identical to the instant path.
pub fn handler(ctx: Context<RedeemFromRequest>, shares: u128, _owner: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let owner_shares = ctx.accounts.share_account.shares;
    let vault = &mut ctx.accounts.vault;
    access::require_request_authority(vault, &ctx.accounts.request_authority.key())?;
    access::acquire_guard(vault)?;
    let assets = ledger::redeem_core(vault, shares, owner_shares, now)?;
    access::release_guard(vault);

    let share_account = &mut ctx.accounts.share_account;
    share_account.shares = math::checked_sub(share_account.shares, shares)?;

    let amount = u64::try_from(assets).map_err(|_| error!(ErrorCode::MathOverflow))?;
    let liquidity_auth_bump = ctx.bumps.liquidity_auth;
    let vault_key = ctx.accounts.vault.key();
    let signer_seed_group: &[&[u8]] = &[
        b"liquidity-auth",
        vault_key.as_ref(),
        &[liquidity_auth_bump],
    ];
    let signer_seeds = &[signer_seed_group];
    let cpi_accounts = Transfer {
        from: ctx.accounts.liquidity_vault.to_account_info(),
        to: ctx.accounts.receiver_token_account.to_account_info(),
        authority: ctx.accounts.liquidity_auth.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount,
    )?;

    Ok(())
}

#[derive(Accounts)]
#[instruction(shares: u128, owner: Pubkey)]
pub struct RedeemFromRequest<'info> {
    #[account(mut)]
    pub request_authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"vault", vault.underlying_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
    #[account(
        mut,
        seeds = [b"share-account", vault.key().as_ref(), owner.as_ref()],
        bump = share_account.bump,
    )]
    pub share_account: Account<'info, ShareAccount>,
    /// CHECK: liquidity auth PDA.
    #[account(seeds = [b"liquidity-auth", vault.key().as_ref()], bump)]
    pub liquidity_auth: UncheckedAccount<'info>,
    #[account(mut, address = vault.liquidity_vault)]
    pub liquidity_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = receiver_token_account.mint == vault.underlying_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub receiver_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
