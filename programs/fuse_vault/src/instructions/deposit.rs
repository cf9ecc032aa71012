use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    helpers::{access, convert, ledger, math},
    state::{ShareAccount, Vault},
};

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    require_keys_eq!(
        ctx.accounts.share_account.owner,
        ctx.accounts.user.key(),
        ErrorCode::Unauthorized
    );

    let vault = &mut ctx.accounts.vault;
    access::acquire_guard(vault)?;
    require!(
        amount as u128 <= convert::max_deposit(vault)?,
        ErrorCode::SupplyCapExceeded
    );
    let shares = ledger::deposit_core(vault, amount as u128, now)?;
    access::release_guard(vault);

    token::transfer(ctx.accounts.deposit_ctx(), amount)?;

    let share_account = &mut ctx.accounts.share_account;
    share_account.shares = math::checked_add(share_account.shares, shares)?;

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
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
    #[account(
        mut,
        constraint = user_token_account.mint == vault.underlying_mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_account: Account<'info, TokenAccount>,
    #[account(mut, address = vault.liquidity_vault)]
    pub liquidity_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

impl<'info> Deposit<'info> {
    fn deposit_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.user_token_account.to_account_info(),
            to: self.liquidity_vault.to_account_info(),
            authority: self.user.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
