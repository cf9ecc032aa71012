use anchor_lang::prelude::*;

use crate::{helpers::access, instructions::GovernMarkets};

/// A cap below the current supply blocks new issuance without affecting
/// withdrawals.
pub fn handler(ctx: Context<GovernMarkets>, supply_cap: u128) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    access::require_governor(vault, &ctx.accounts.governor.key())?;

    vault.supply_cap = supply_cap;
    Ok(())
}
