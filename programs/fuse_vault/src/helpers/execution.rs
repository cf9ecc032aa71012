use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    fuses::fuse_for,
    helpers::{fees, math},
    state::{FuseAction, FuseKind, FuseOp, Vault},
};

/// Runs an allocator batch against the registered fuses, sequentially and
/// all-or-nothing: any failing step aborts the whole batch, since later steps
/// may depend on capital freed or deployed by earlier ones.
///
/// Exposure caps are validated after the last step, on the net effect, not
/// per step; an enter that overshoots a cap is fine if a later exit brings
/// the market back under it.
pub fn execute_batch(vault: &mut Vault, actions: &[FuseAction], now: i64) -> Result<()> {
    require!(!actions.is_empty(), ErrorCode::EmptyBatch);
    fees::accrue_fees(vault, now)?;

    let mut touched: Vec<u16> = Vec::new();
    for action in actions {
        let idx = vault.market_index(action.market_id)?;
        let kind = vault.markets[idx].fuse;
        require!(kind != FuseKind::None, ErrorCode::UnregisteredFuse);
        let fuse = fuse_for(kind)?;

        match action.op {
            FuseOp::Enter => {
                require!(
                    action.amount <= vault.idle_balance,
                    ErrorCode::InsufficientLiquidity
                );
                let moved = fuse.enter(&mut vault.markets[idx], action.amount, &action.params)?;
                vault.idle_balance = math::checked_sub(vault.idle_balance, moved)?;
            }
            FuseOp::Exit => {
                let freed = fuse.exit(&mut vault.markets[idx], action.amount, &action.params)?;
                vault.idle_balance = math::checked_add(vault.idle_balance, freed)?;
            }
        }
        if !touched.contains(&action.market_id) {
            touched.push(action.market_id);
        }
    }

    for market_id in touched {
        let idx = vault.market_index(market_id)?;
        let fuse = fuse_for(vault.markets[idx].fuse)?;
        let market = &mut vault.markets[idx];
        market.cached_balance = fuse.current_value(market);
        if market.cached_balance > market.exposure_cap {
            msg!(
                "market {}: exposure {} exceeds cap {}",
                market.market_id,
                market.cached_balance,
                market.exposure_cap
            );
            return Err(error!(ErrorCode::MarketCapExceeded));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testutil::{add_market, assert_err_code, fresh_vault};

    fn enter(market_id: u16, amount: u128) -> FuseAction {
        FuseAction {
            market_id,
            op: FuseOp::Enter,
            amount,
            params: Vec::new(),
        }
    }

    fn exit(market_id: u16, amount: u128) -> FuseAction {
        FuseAction {
            market_id,
            op: FuseOp::Exit,
            amount,
            params: Vec::new(),
        }
    }

    #[test]
    fn test_empty_batch_rejected() {
        let mut vault = fresh_vault();
        assert_err_code(execute_batch(&mut vault, &[], 0), ErrorCode::EmptyBatch);
    }

    #[test]
    fn test_unknown_market_rejected() {
        let mut vault = fresh_vault();
        vault.idle_balance = 100;
        assert_err_code(
            execute_batch(&mut vault, &[enter(9, 50)], 0),
            ErrorCode::UnknownMarket,
        );
    }

    #[test]
    fn test_unregistered_fuse_rejected() {
        let mut vault = fresh_vault();
        vault.idle_balance = 100;
        add_market(&mut vault, 1, FuseKind::None, 0);
        assert_err_code(
            execute_batch(&mut vault, &[enter(1, 50)], 0),
            ErrorCode::UnregisteredFuse,
        );
    }

    #[test]
    fn test_enter_moves_idle_into_market() {
        let mut vault = fresh_vault();
        vault.idle_balance = 1_000;
        add_market(&mut vault, 1, FuseKind::Lending, 0);
        execute_batch(&mut vault, &[enter(1, 400)], 0).unwrap();
        assert_eq!(vault.idle_balance, 600);
        assert_eq!(vault.markets[0].live_balance, 400);
        assert_eq!(vault.markets[0].cached_balance, 400);
    }

    #[test]
    fn test_enter_beyond_idle_rejected() {
        let mut vault = fresh_vault();
        vault.idle_balance = 100;
        add_market(&mut vault, 1, FuseKind::Lending, 0);
        assert_err_code(
            execute_batch(&mut vault, &[enter(1, 101)], 0),
            ErrorCode::InsufficientLiquidity,
        );
    }

    #[test]
    fn test_cap_checked_on_net_effect() {
        let mut vault = fresh_vault();
        vault.idle_balance = 100;
        add_market(&mut vault, 1, FuseKind::Lending, 0);
        vault.markets[0].exposure_cap = 50;

        // Gross overshoot, net effect under the cap: allowed.
        execute_batch(&mut vault, &[enter(1, 100), exit(1, 60)], 0).unwrap();
        assert_eq!(vault.markets[0].cached_balance, 40);
        assert_eq!(vault.idle_balance, 60);

        // Net effect over the cap: the whole batch is rejected.
        assert_err_code(
            execute_batch(&mut vault, &[enter(1, 20)], 0),
            ErrorCode::MarketCapExceeded,
        );
    }

    #[test]
    fn test_later_steps_use_capital_freed_by_earlier_ones() {
        let mut vault = fresh_vault();
        add_market(&mut vault, 1, FuseKind::Lending, 500);
        add_market(&mut vault, 2, FuseKind::Lending, 0);
        // idle is zero; the rebalance funds market 2 out of market 1.
        execute_batch(&mut vault, &[exit(1, 300), enter(2, 300)], 0).unwrap();
        assert_eq!(vault.idle_balance, 0);
        assert_eq!(vault.markets[0].cached_balance, 200);
        assert_eq!(vault.markets[1].cached_balance, 300);
    }

    #[test]
    fn test_fees_settle_before_execution() {
        let mut vault = fresh_vault();
        vault.management_fee_bps = 200;
        vault.total_shares = 1_000_000;
        vault.idle_balance = 1_000_000;
        add_market(&mut vault, 1, FuseKind::Lending, 0);
        execute_batch(
            &mut vault,
            &[enter(1, 100)],
            crate::constants::SECONDS_PER_YEAR,
        )
        .unwrap();
        assert_eq!(vault.pending_fee_shares, 20_000);
    }
}
