use anchor_lang::prelude::*;

use crate::{error::ErrorCode, helpers::access, instructions::GovernMarkets};

/// Revoking an asset that still backs a nonzero balance is allowed: the
/// position stays counted and exitable, the market just cannot be entered
/// with that asset any more.
pub fn handler(ctx: Context<GovernMarkets>, market_id: u16, asset: Pubkey) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    access::require_governor(vault, &ctx.accounts.governor.key())?;
    let market = vault.market_mut(market_id)?;
    let position = market
        .granted_assets
        .iter()
        .position(|a| *a == asset)
        .ok_or_else(|| error!(ErrorCode::AssetNotGranted))?;

    market.granted_assets.remove(position);
    Ok(())
}
