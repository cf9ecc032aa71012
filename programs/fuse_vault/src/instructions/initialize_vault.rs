use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::PPS_SCALE,
    state::{Vault, VaultInitParams},
};

pub fn handler(ctx: Context<InitializeVault>, params: VaultInitParams) -> Result<()> {
    params.validate()?;

    let vault = &mut ctx.accounts.vault;
    vault.governor = ctx.accounts.governor.key();
    vault.allocator = params.allocator;
    vault.request_authority = params.request_authority;
    vault.fee_recipient = params.fee_recipient;
    vault.underlying_mint = ctx.accounts.underlying_mint.key();
    vault.liquidity_vault = ctx.accounts.liquidity_vault.key();
    vault.idle_balance = 0;
    vault.total_shares = 0;
    vault.pending_fee_shares = 0;
    vault.supply_cap = params.supply_cap;
    vault.management_fee_bps = params.management_fee_bps;
    vault.performance_fee_bps = params.performance_fee_bps;
    vault.withdrawal_fee_bps = params.withdrawal_fee_bps;
    vault.high_water_mark = PPS_SCALE;
    vault.last_accrual_ts = Clock::get()?.unix_timestamp;
    vault.decimals_offset = params.decimals_offset;
    vault.locked = false;
    vault.markets = Vec::new();
    vault.withdrawal_order = Vec::new();
    vault.bump = ctx.bumps.vault;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub governor: Signer<'info>,
    pub underlying_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = governor,
        seeds = [b"vault", underlying_mint.key().as_ref()],
        bump,
        space = 8 + Vault::INIT_SPACE,
    )]
    pub vault: Account<'info, Vault>,
    /// CHECK: PDA authority for liquidity vault transfer signing.
    #[account(seeds = [b"liquidity-auth", vault.key().as_ref()], bump)]
    pub liquidity_auth: UncheckedAccount<'info>,
    #[account(
        init,
        payer = governor,
        seeds = [b"liquidity-vault", vault.key().as_ref()],
        bump,
        token::mint = underlying_mint,
        token::authority = liquidity_auth,
    )]
    pub liquidity_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
