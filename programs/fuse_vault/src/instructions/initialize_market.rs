use anchor_lang::prelude::*;

use crate::{
    constants::MAX_MARKETS,
    error::ErrorCode,
    helpers::access,
    state::{MarketState, Vault},
};

pub fn handler(ctx: Context<GovernMarkets>, market_id: u16, exposure_cap: u128) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    access::require_governor(vault, &ctx.accounts.governor.key())?;
    require!(
        vault.market(market_id).is_err(),
        ErrorCode::DuplicateMarket
    );
    require!(
        vault.markets.len() < MAX_MARKETS,
        ErrorCode::MarketLimitReached
    );

    vault.markets.push(MarketState::new(market_id, exposure_cap));
    Ok(())
}

#[derive(Accounts)]
pub struct GovernMarkets<'info> {
    pub governor: Signer<'info>,
    #[account(
        mut,
        seeds = [b"vault", vault.underlying_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
}
