use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::access,
    instructions::GovernMarkets,
    state::FuseKind,
};

/// Assigns the market's adapter. With no granted assets the fuse is inert:
/// enters refuse to deploy until the substrate whitelist is populated.
pub fn handler(ctx: Context<GovernMarkets>, market_id: u16, kind: FuseKind) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    access::require_governor(vault, &ctx.accounts.governor.key())?;
    require!(kind != FuseKind::None, ErrorCode::InvalidFuseKind);
    let market = vault.market_mut(market_id)?;
    require!(market.fuse == FuseKind::None, ErrorCode::FuseAlreadySet);

    market.fuse = kind;
    Ok(())
}
