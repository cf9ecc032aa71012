use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::{convert, fees, math, waterfall},
    state::Vault,
};

/// Deposit/mint/withdraw/redeem cores. Every one settles fees first, then
/// converts at the resulting pre-operation exchange rate. Token movement and
/// per-holder share bookkeeping stay in the instruction handlers.

pub fn deposit_core(vault: &mut Vault, assets: u128, now: i64) -> Result<u128> {
    require!(assets > 0, ErrorCode::InvalidAmount);
    fees::accrue_fees(vault, now)?;
    let shares = convert::preview_deposit(vault, assets)?;
    require!(shares > 0, ErrorCode::PrecisionLoss);
    enforce_supply_cap(vault, shares)?;
    vault.total_shares = math::checked_add(vault.total_shares, shares)?;
    vault.idle_balance = math::checked_add(vault.idle_balance, assets)?;
    Ok(shares)
}

/// Returns the assets the minter must pay for exactly `shares`.
pub fn mint_core(vault: &mut Vault, shares: u128, now: i64) -> Result<u128> {
    require!(shares > 0, ErrorCode::InvalidAmount);
    fees::accrue_fees(vault, now)?;
    let assets = convert::preview_mint(vault, shares)?;
    require!(assets > 0, ErrorCode::PrecisionLoss);
    enforce_supply_cap(vault, shares)?;
    vault.total_shares = math::checked_add(vault.total_shares, shares)?;
    vault.idle_balance = math::checked_add(vault.idle_balance, assets)?;
    Ok(assets)
}

/// Returns the gross shares charged to the owner (burned portion plus the
/// withdrawal fee moved to the pending fee bucket).
pub fn withdraw_core(vault: &mut Vault, assets: u128, owner_shares: u128, now: i64) -> Result<u128> {
    require!(assets > 0, ErrorCode::InvalidAmount);
    fees::accrue_fees(vault, now)?;
    let burned = convert::convert_to_shares_up(vault, assets)?;
    require!(burned > 0, ErrorCode::PrecisionLoss);
    let gross = convert::gross_up_withdrawal(vault, burned)?;
    require!(gross <= owner_shares, ErrorCode::InsufficientShares);

    waterfall::source_liquidity(vault, assets)?;
    require!(
        vault.idle_balance >= assets,
        ErrorCode::InsufficientLiquidity
    );

    vault.total_shares = math::checked_sub(vault.total_shares, burned)?;
    vault.pending_fee_shares = math::checked_add(vault.pending_fee_shares, gross - burned)?;
    vault.idle_balance -= assets;
    Ok(gross)
}

/// Returns the assets paid out for `shares`, withdrawal fee deducted.
pub fn redeem_core(vault: &mut Vault, shares: u128, owner_shares: u128, now: i64) -> Result<u128> {
    require!(shares > 0, ErrorCode::InvalidAmount);
    require!(shares <= owner_shares, ErrorCode::InsufficientShares);
    fees::accrue_fees(vault, now)?;
    let (burned, fee_shares) = convert::redeem_fee_split(vault, shares)?;
    let assets = convert::convert_to_assets_down(vault, burned)?;
    require!(assets > 0, ErrorCode::PrecisionLoss);

    waterfall::source_liquidity(vault, assets)?;
    require!(
        vault.idle_balance >= assets,
        ErrorCode::InsufficientLiquidity
    );

    vault.total_shares = math::checked_sub(vault.total_shares, burned)?;
    vault.pending_fee_shares = math::checked_add(vault.pending_fee_shares, fee_shares)?;
    vault.idle_balance -= assets;
    Ok(assets)
}

/// Hands the accumulated fee shares to the recipient. Supply is unchanged;
/// the shares were minted when the fees settled.
pub fn claim_fee_shares_core(vault: &mut Vault) -> Result<u128> {
    let claimed = vault.pending_fee_shares;
    require!(claimed > 0, ErrorCode::NothingToClaim);
    vault.pending_fee_shares = 0;
    Ok(claimed)
}

fn enforce_supply_cap(vault: &Vault, minted: u128) -> Result<()> {
    let new_supply = math::checked_add(vault.total_shares, minted)?;
    if new_supply > vault.supply_cap {
        msg!(
            "supply cap {} exceeded: minting {} onto {}",
            vault.supply_cap,
            minted,
            vault.total_shares
        );
        return Err(error!(ErrorCode::SupplyCapExceeded));
    }
    Ok(())
}
