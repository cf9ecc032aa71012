use anchor_lang::prelude::*;

use crate::{
    constants::MAX_GRANTED_ASSETS,
    error::ErrorCode,
    helpers::access,
    instructions::GovernMarkets,
};

pub fn handler(ctx: Context<GovernMarkets>, market_id: u16, asset: Pubkey) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    access::require_governor(vault, &ctx.accounts.governor.key())?;
    let market = vault.market_mut(market_id)?;
    require!(
        !market.is_asset_granted(&asset),
        ErrorCode::AssetAlreadyGranted
    );
    require!(
        market.granted_assets.len() < MAX_GRANTED_ASSETS,
        ErrorCode::AssetLimitReached
    );

    market.granted_assets.push(asset);
    Ok(())
}
