use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    helpers::math,
    state::Vault,
};

/// Settles externally earned yield into a market: real tokens move into the
/// liquidity vault and the market's live value grows by the same amount. The
/// cached view, and therefore the share price, picks it up on the next
/// refresh.
pub fn handler(ctx: Context<AccrueMarketYield>, market_id: u16, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let vault = &mut ctx.accounts.vault;
    let market = vault.market_mut(market_id)?;
    market.live_balance = math::checked_add(market.live_balance, amount as u128)?;

    token::transfer(ctx.accounts.deposit_ctx(), amount)?;

    Ok(())
}

#[derive(Accounts)]
pub struct AccrueMarketYield<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        mut,
        seeds = [b"vault", vault.underlying_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
    #[account(
        mut,
        constraint = payer_token_account.mint == vault.underlying_mint @ ErrorCode::InvalidTokenAccount,
        constraint = payer_token_account.owner == payer.key() @ ErrorCode::Unauthorized,
    )]
    pub payer_token_account: Account<'info, TokenAccount>,
    #[account(mut, address = vault.liquidity_vault)]
    pub liquidity_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

impl<'info> AccrueMarketYield<'info> {
    fn deposit_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.payer_token_account.to_account_info(),
            to: self.liquidity_vault.to_account_info(),
            authority: self.payer.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
