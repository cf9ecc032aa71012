use anchor_lang::prelude::*;

use crate::{
    constants::MAX_FEE_BPS,
    error::ErrorCode,
    helpers::{access, fees},
    instructions::GovernMarkets,
    state::FeeKind,
};

/// Management and performance fees are settled at the old rate before the
/// new one takes effect, so a rate change never applies retroactively.
pub fn handler(ctx: Context<GovernMarkets>, kind: FeeKind, bps: u16) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    access::require_governor(vault, &ctx.accounts.governor.key())?;
    require!(bps <= MAX_FEE_BPS, ErrorCode::InvalidFeeBps);

    let now = Clock::get()?.unix_timestamp;
    fees::accrue_fees(vault, now)?;

    match kind {
        FeeKind::Management => vault.management_fee_bps = bps,
        FeeKind::Performance => vault.performance_fee_bps = bps,
        FeeKind::Withdrawal => vault.withdrawal_fee_bps = bps,
    }
    Ok(())
}
