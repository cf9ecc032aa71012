use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    helpers::{access, convert, ledger, math},
    state::{ShareAccount, Vault},
};

pub fn handler(ctx: Context<Redeem>, shares: u128) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    require_keys_eq!(
        ctx.accounts.share_account.owner,
        ctx.accounts.user.key(),
        ErrorCode::Unauthorized
    );

    let owner_shares = ctx.accounts.share_account.shares;
    let vault = &mut ctx.accounts.vault;
    access::acquire_guard(vault)?;
    require!(
        shares <= convert::max_redeem(vault, owner_shares)?,
        ErrorCode::InsufficientLiquidity
    );
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
        to: ctx.accounts.user_token_account.to_account_info(),
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
pub struct Redeem<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        mut,
        seeds = [b"vault", vault.underlying_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
    #[account(
        mut,
        seeds = [b"share-account", vault.key().as_ref(), user.key().as_ref()],
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
        constraint = user_token_account.mint == vault.underlying_mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
