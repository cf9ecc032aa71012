use anchor_lang::prelude::*;

use crate::{helpers::access, instructions::GovernMarkets, state::MarketStatus};

pub fn handler(ctx: Context<GovernMarkets>, market_id: u16, status: MarketStatus) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    access::require_governor(vault, &ctx.accounts.governor.key())?;
    let market = vault.market_mut(market_id)?;

    market.status = status;
    Ok(())
}
