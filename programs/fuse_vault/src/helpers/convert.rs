use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, UNCAPPED},
    error::ErrorCode,
    fuses::fuse_for,
    helpers::math,
    state::{FuseKind, Vault},
};

/// Idle balance plus every market's cached balance. Markets are always
/// counted, never undercounted, even when their fuse has been removed.
pub fn total_assets(vault: &Vault) -> Result<u128> {
    vault
        .markets
        .iter()
        .try_fold(vault.idle_balance, |acc, m| {
            math::checked_add(acc, m.cached_balance)
        })
}

/// Virtual shares backing the empty vault; 10^decimals_offset raises the cost
/// of a first-deposit share-inflation attack by the same factor.
fn virtual_shares(vault: &Vault) -> Result<u128> {
    10u128
        .checked_pow(vault.decimals_offset as u32)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn convert_to_shares_down(vault: &Vault, assets: u128) -> Result<u128> {
    let supply = math::checked_add(vault.total_shares, virtual_shares(vault)?)?;
    let backing = math::checked_add(total_assets(vault)?, 1)?;
    math::mul_div_down(assets, supply, backing)
}

pub fn convert_to_shares_up(vault: &Vault, assets: u128) -> Result<u128> {
    let supply = math::checked_add(vault.total_shares, virtual_shares(vault)?)?;
    let backing = math::checked_add(total_assets(vault)?, 1)?;
    math::mul_div_up(assets, supply, backing)
}

pub fn convert_to_assets_down(vault: &Vault, shares: u128) -> Result<u128> {
    let supply = math::checked_add(vault.total_shares, virtual_shares(vault)?)?;
    let backing = math::checked_add(total_assets(vault)?, 1)?;
    math::mul_div_down(shares, backing, supply)
}

pub fn convert_to_assets_up(vault: &Vault, shares: u128) -> Result<u128> {
    let supply = math::checked_add(vault.total_shares, virtual_shares(vault)?)?;
    let backing = math::checked_add(total_assets(vault)?, 1)?;
    math::mul_div_up(shares, backing, supply)
}

/// Shares minted for a deposit; rounds against the depositor.
pub fn preview_deposit(vault: &Vault, assets: u128) -> Result<u128> {
    convert_to_shares_down(vault, assets)
}

/// Assets required to mint exactly `shares`; rounds against the minter.
pub fn preview_mint(vault: &Vault, shares: u128) -> Result<u128> {
    convert_to_assets_up(vault, shares)
}

/// Inflate a share amount by 1 / (1 - withdrawal fee), rounding up.
pub fn gross_up_withdrawal(vault: &Vault, base_shares: u128) -> Result<u128> {
    let fee = vault.withdrawal_fee_bps as u128;
    if fee == 0 {
        return Ok(base_shares);
    }
    math::mul_div_up(base_shares, BPS_DENOM, BPS_DENOM - fee)
}

/// Split a redeemed share amount into the burned portion and the withdrawal
/// fee portion, deflating by (1 - fee). Algebraic inverse of
/// `gross_up_withdrawal` for the same rate.
pub fn redeem_fee_split(vault: &Vault, shares: u128) -> Result<(u128, u128)> {
    let fee = vault.withdrawal_fee_bps as u128;
    let net = math::mul_div_down(shares, BPS_DENOM - fee, BPS_DENOM)?;
    Ok((net, shares - net))
}

/// Total shares charged to withdraw exactly `assets`, withdrawal fee
/// included; rounds against the withdrawer.
pub fn preview_withdraw(vault: &Vault, assets: u128) -> Result<u128> {
    let base = convert_to_shares_up(vault, assets)?;
    gross_up_withdrawal(vault, base)
}

/// Assets returned for redeeming `shares`, withdrawal fee deducted; rounds
/// against the redeemer.
pub fn preview_redeem(vault: &Vault, shares: u128) -> Result<u128> {
    let (net, _) = redeem_fee_split(vault, shares)?;
    convert_to_assets_down(vault, net)
}

pub fn max_deposit(vault: &Vault) -> Result<u128> {
    if vault.supply_cap == UNCAPPED {
        return Ok(UNCAPPED);
    }
    let headroom = vault.supply_cap.saturating_sub(vault.total_shares);
    convert_to_assets_down(vault, headroom)
}

pub fn max_mint(vault: &Vault) -> u128 {
    vault.supply_cap.saturating_sub(vault.total_shares)
}

/// Liquidity reachable by a single redemption: the idle balance plus what the
/// configured waterfall can pull out of each market right now.
pub fn sourceable_liquidity(vault: &Vault) -> Result<u128> {
    let mut total = vault.idle_balance;
    for step in &vault.withdrawal_order {
        let Ok(market) = vault.market(step.market_id) else {
            continue;
        };
        if market.fuse == FuseKind::None {
            continue;
        }
        let fuse = fuse_for(market.fuse)?;
        total = math::checked_add(total, fuse.withdrawable(market))?;
    }
    Ok(total)
}

pub fn max_withdraw(vault: &Vault, owner_shares: u128) -> Result<u128> {
    let (net, _) = redeem_fee_split(vault, owner_shares)?;
    let by_balance = convert_to_assets_down(vault, net)?;
    Ok(by_balance.min(sourceable_liquidity(vault)?))
}

pub fn max_redeem(vault: &Vault, owner_shares: u128) -> Result<u128> {
    let sourceable = sourceable_liquidity(vault)?;
    if preview_redeem(vault, owner_shares)? <= sourceable {
        return Ok(owner_shares);
    }
    let net_cap = convert_to_shares_down(vault, sourceable)?;
    let fee = vault.withdrawal_fee_bps as u128;
    let gross_cap = if fee == 0 {
        net_cap
    } else {
        math::mul_div_down(net_cap, BPS_DENOM, BPS_DENOM - fee)?
    };
    Ok(owner_shares.min(gross_cap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{helpers::testutil::fresh_vault, state::MarketState};

    #[test]
    fn test_first_deposit_with_decimals_offset() {
        // 100 units of an 18-decimal asset into an empty vault with a
        // 2-decimal share offset mints exactly 100 * 10^20 raw shares.
        let mut vault = fresh_vault();
        vault.decimals_offset = 2;
        let assets = 100_u128 * 10_u128.pow(18);
        let shares = preview_deposit(&vault, assets).unwrap();
        assert_eq!(shares, 100 * 10_u128.pow(20));

        vault.total_shares = shares;
        vault.idle_balance = assets;
        assert_eq!(total_assets(&vault).unwrap(), assets);
        assert!(vault.markets.iter().all(|m| m.cached_balance == 0));
    }

    #[test]
    fn test_deposit_mint_round_against_depositor() {
        let mut vault = fresh_vault();
        vault.total_shares = 1_000;
        vault.idle_balance = 3_000;
        // Rate ~ 3 assets per share: 10 assets -> 3 shares (down),
        // 3 shares cost 9..10 assets (up).
        let shares = preview_deposit(&vault, 10).unwrap();
        assert_eq!(shares, 3);
        let assets = preview_mint(&vault, 3).unwrap();
        assert!(assets >= 9);
        assert!(preview_mint(&vault, shares).unwrap() <= 10);
    }

    #[test]
    fn test_dust_deposit_rounds_to_zero_shares() {
        let mut vault = fresh_vault();
        vault.total_shares = 10;
        vault.idle_balance = 1_000_000;
        assert_eq!(preview_deposit(&vault, 1).unwrap(), 0);
    }

    #[test]
    fn test_withdrawal_fee_transforms_are_inverses() {
        let mut vault = fresh_vault();
        vault.withdrawal_fee_bps = 1_000;
        vault.total_shares = 1_000_000;
        vault.idle_balance = 1_000_000;
        for shares in [1_u128, 9, 10, 999, 1_000, 123_457] {
            let assets = preview_redeem(&vault, shares).unwrap();
            if assets > 0 {
                assert!(preview_withdraw(&vault, assets).unwrap() <= shares);
            }
        }
    }

    #[test]
    fn test_ten_percent_fee_full_redeem() {
        let mut vault = fresh_vault();
        vault.withdrawal_fee_bps = 1_000;
        vault.total_shares = 10_000;
        vault.idle_balance = 10_000;
        assert_eq!(preview_redeem(&vault, 10_000).unwrap(), 9_000);
        let (net, fee) = redeem_fee_split(&vault, 10_000).unwrap();
        assert_eq!(net, 9_000);
        assert_eq!(fee, 1_000);
    }

    #[test]
    fn test_preview_withdraw_of_max_withdraw_within_balance() {
        for fee_bps in [0_u16, 50, 1_000, 2_500] {
            let mut vault = fresh_vault();
            vault.withdrawal_fee_bps = fee_bps;
            vault.total_shares = 777_777;
            vault.idle_balance = 1_234_567;
            for balance in [1_u128, 17, 1_000, 777_777] {
                let max = max_withdraw(&vault, balance).unwrap();
                if max > 0 {
                    assert!(preview_withdraw(&vault, max).unwrap() <= balance);
                }
            }
        }
    }

    #[test]
    fn test_max_redeem_bounded_by_sourceable_liquidity() {
        let mut vault = fresh_vault();
        vault.total_shares = 1_000;
        vault.idle_balance = 400;
        // 600 deployed into a market the waterfall cannot reach.
        let mut stranded = MarketState::new(7, u128::MAX);
        stranded.cached_balance = 600;
        stranded.live_balance = 600;
        vault.markets.push(stranded);

        let max = max_redeem(&vault, 1_000).unwrap();
        assert_eq!(max, 400);
        assert!(preview_redeem(&vault, max).unwrap() <= 400);
    }

    #[test]
    fn test_max_mint_tracks_supply_cap() {
        let mut vault = fresh_vault();
        vault.supply_cap = 99;
        vault.total_shares = 40;
        assert_eq!(max_mint(&vault), 59);
        vault.total_shares = 99;
        assert_eq!(max_mint(&vault), 0);
    }
}
