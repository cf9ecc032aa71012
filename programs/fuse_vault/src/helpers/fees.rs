use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, PPS_SCALE, SECONDS_PER_YEAR},
    error::ErrorCode,
    helpers::{convert, math},
    state::Vault,
};

/// Price per share scaled by PPS_SCALE. An empty vault is priced at 1.0.
pub fn price_per_share(vault: &Vault) -> Result<u128> {
    if vault.total_shares == 0 {
        return Ok(PPS_SCALE);
    }
    math::mul_div_down(convert::total_assets(vault)?, PPS_SCALE, vault.total_shares)
}

/// Settles management and performance fees by minting shares to the fee
/// recipient's pending bucket. Runs before conversion math in every mutating
/// entry point; calling it twice at the same timestamp is a no-op.
///
/// Management dilution is applied first, so the performance fee is measured
/// against the already-diluted supply.
pub fn accrue_fees(vault: &mut Vault, now: i64) -> Result<()> {
    if now <= vault.last_accrual_ts {
        return Ok(());
    }
    let elapsed = now - vault.last_accrual_ts;
    accrue_management(vault, elapsed)?;
    accrue_performance(vault)?;
    vault.last_accrual_ts = now;
    Ok(())
}

fn accrue_management(vault: &mut Vault, elapsed: i64) -> Result<()> {
    if vault.management_fee_bps == 0 || vault.total_shares == 0 || elapsed <= 0 {
        return Ok(());
    }
    let numerator = (vault.management_fee_bps as u128)
        .checked_mul(elapsed as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let denominator = BPS_DENOM
        .checked_mul(SECONDS_PER_YEAR as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let fee_shares = math::mul_div_down(vault.total_shares, numerator, denominator)?;
    mint_fee_shares(vault, fee_shares)
}

fn accrue_performance(vault: &mut Vault) -> Result<()> {
    if vault.performance_fee_bps == 0 || vault.total_shares == 0 {
        return Ok(());
    }
    let pps = price_per_share(vault)?;
    if pps <= vault.high_water_mark {
        return Ok(());
    }
    let gain_per_share = pps - vault.high_water_mark;
    let gain_assets = math::mul_div_down(gain_per_share, vault.total_shares, PPS_SCALE)?;
    let fee_assets = math::mul_div_down(gain_assets, vault.performance_fee_bps as u128, BPS_DENOM)?;
    let backing = convert::total_assets(vault)?;
    let fee_shares = math::mul_div_down(
        fee_assets,
        vault.total_shares,
        math::checked_sub(backing, fee_assets)?,
    )?;
    mint_fee_shares(vault, fee_shares)?;
    // The mark only ever moves up, to the price the fee was charged against.
    vault.high_water_mark = pps;
    Ok(())
}

fn mint_fee_shares(vault: &mut Vault, shares: u128) -> Result<()> {
    if shares == 0 {
        return Ok(());
    }
    vault.total_shares = math::checked_add(vault.total_shares, shares)?;
    vault.pending_fee_shares = math::checked_add(vault.pending_fee_shares, shares)?;
    Ok(())
}
