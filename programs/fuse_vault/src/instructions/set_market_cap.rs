use anchor_lang::prelude::*;

use crate::{helpers::access, instructions::GovernMarkets};

/// Lowering a cap below the current deployed balance is allowed; the market
/// becomes exit-only until its balance falls back under the limit.
pub fn handler(ctx: Context<GovernMarkets>, market_id: u16, exposure_cap: u128) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    access::require_governor(vault, &ctx.accounts.governor.key())?;
    let market = vault.market_mut(market_id)?;

    market.exposure_cap = exposure_cap;
    Ok(())
}
