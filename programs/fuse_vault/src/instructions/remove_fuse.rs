use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::access,
    instructions::GovernMarkets,
    state::FuseKind,
};

/// Deregistering does not force an unwind; a deployed balance stays counted
/// in total assets but is unreachable until a fuse is assigned again.
pub fn handler(ctx: Context<GovernMarkets>, market_id: u16) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    access::require_governor(vault, &ctx.accounts.governor.key())?;
    let market = vault.market_mut(market_id)?;
    require!(market.fuse != FuseKind::None, ErrorCode::UnregisteredFuse);

    market.fuse = FuseKind::None;
    Ok(())
}
