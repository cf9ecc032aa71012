use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    fuses::fuse_for,
    helpers::math,
    state::{FuseKind, MarketStatus, Vault},
};

/// Pulls liquidity out of markets, in configured priority order, until the
/// idle balance can cover `requested`.
///
/// Exits are external calls into market code; all of them complete before any
/// internal state is touched. A step that fails or frees less than asked
/// contributes less and the walk continues, so one broken market cannot block
/// a withdrawal the rest can satisfy. When the order holds a single step
/// there is no "rest", and that step's failure propagates.
///
/// Returns the total amount pulled. The caller decides what an uncovered
/// shortfall means.
pub fn source_liquidity(vault: &mut Vault, requested: u128) -> Result<u128> {
    if requested <= vault.idle_balance {
        return Ok(0);
    }
    let shortfall = requested - vault.idle_balance;
    let order = vault.withdrawal_order.clone();
    let sole_path = order.len() == 1;

    let mut remaining = shortfall;
    let mut pulled_total: u128 = 0;
    let mut touched: Vec<u16> = Vec::new();

    for step in &order {
        if remaining == 0 {
            break;
        }
        let Ok(idx) = vault.market_index(step.market_id) else {
            require!(!sole_path, ErrorCode::FuseExitFailed);
            continue;
        };
        let kind = vault.markets[idx].fuse;
        if kind == FuseKind::None {
            require!(!sole_path, ErrorCode::FuseExitFailed);
            continue;
        }
        let fuse = fuse_for(kind)?;
        let want = remaining.min(fuse.withdrawable(&vault.markets[idx]));
        if want == 0 {
            // A frozen market reports nothing withdrawable; on a sole path
            // that is an adapter failure, not a liquidity shortfall.
            if sole_path && vault.markets[idx].status == MarketStatus::Frozen {
                return Err(error!(ErrorCode::FuseExitFailed));
            }
            continue;
        }
        match fuse.exit(&mut vault.markets[idx], want, &step.params) {
            Ok(freed) => {
                pulled_total = math::checked_add(pulled_total, freed)?;
                remaining = remaining.saturating_sub(freed);
                if !touched.contains(&step.market_id) {
                    touched.push(step.market_id);
                }
            }
            Err(err) => {
                if sole_path {
                    return Err(err);
                }
            }
        }
    }

    // External calls are done; fold the results into the internal view in one
    // step. Refreshing the cached balances here is also what absorbs any
    // yield the exits surfaced: the ongoing redemption was already priced at
    // the pre-operation rate.
    vault.idle_balance = math::checked_add(vault.idle_balance, pulled_total)?;
    for market_id in touched {
        let idx = vault.market_index(market_id)?;
        let fuse = fuse_for(vault.markets[idx].fuse)?;
        vault.markets[idx].cached_balance = fuse.current_value(&vault.markets[idx]);
    }
    Ok(pulled_total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fuses::PoolFuseParams,
        helpers::testutil::{add_market, assert_err_code, fresh_vault},
        state::{MarketStatus, WithdrawalStep},
    };

    #[test]
    fn test_covered_by_idle_is_a_no_op() {
        let mut vault = fresh_vault();
        vault.idle_balance = 100;
        add_market(&mut vault, 1, FuseKind::Lending, 500);
        assert_eq!(source_liquidity(&mut vault, 100).unwrap(), 0);
        assert_eq!(vault.markets[0].live_balance, 500);
    }

    #[test]
    fn test_drains_markets_in_configured_order() {
        let mut vault = fresh_vault();
        for id in 1..=3 {
            add_market(&mut vault, id, FuseKind::Lending, 100);
        }
        // k * X with k = 2: exactly the first two markets drain.
        let pulled = source_liquidity(&mut vault, 200).unwrap();
        assert_eq!(pulled, 200);
        assert_eq!(vault.idle_balance, 200);
        assert_eq!(vault.markets[0].live_balance, 0);
        assert_eq!(vault.markets[1].live_balance, 0);
        assert_eq!(vault.markets[2].live_balance, 100);
        assert_eq!(vault.markets[0].cached_balance, 0);
        assert_eq!(vault.markets[2].cached_balance, 100);
    }

    #[test]
    fn test_partial_draw_from_last_market() {
        let mut vault = fresh_vault();
        add_market(&mut vault, 1, FuseKind::Lending, 100);
        add_market(&mut vault, 2, FuseKind::Lending, 100);
        assert_eq!(source_liquidity(&mut vault, 130).unwrap(), 130);
        assert_eq!(vault.markets[0].live_balance, 0);
        assert_eq!(vault.markets[1].live_balance, 70);
    }

    #[test]
    fn test_frozen_market_is_skipped() {
        let mut vault = fresh_vault();
        add_market(&mut vault, 1, FuseKind::Lending, 100);
        add_market(&mut vault, 2, FuseKind::Lending, 100);
        vault.markets[0].status = MarketStatus::Frozen;
        assert_eq!(source_liquidity(&mut vault, 80).unwrap(), 80);
        assert_eq!(vault.markets[0].live_balance, 100);
        assert_eq!(vault.markets[1].live_balance, 20);
    }

    #[test]
    fn test_failing_step_is_skipped_when_alternatives_exist() {
        let mut vault = fresh_vault();
        add_market(&mut vault, 1, FuseKind::LiquidityPool, 100);
        add_market(&mut vault, 2, FuseKind::Lending, 100);
        // The pool demands a fill larger than the request, so its exit fails.
        vault.withdrawal_order[0].params =
            PoolFuseParams { min_out: 1_000 }.try_to_vec().unwrap();
        assert_eq!(source_liquidity(&mut vault, 50).unwrap(), 50);
        assert_eq!(vault.markets[0].live_balance, 100);
        assert_eq!(vault.markets[1].live_balance, 50);
    }

    #[test]
    fn test_sole_path_failure_propagates() {
        let mut vault = fresh_vault();
        add_market(&mut vault, 1, FuseKind::LiquidityPool, 100);
        vault.withdrawal_order[0].params =
            PoolFuseParams { min_out: 1_000 }.try_to_vec().unwrap();
        assert_err_code(source_liquidity(&mut vault, 50), ErrorCode::SlippageExceeded);
    }

    #[test]
    fn test_sole_path_frozen_market_propagates() {
        let mut vault = fresh_vault();
        add_market(&mut vault, 1, FuseKind::Lending, 100);
        vault.markets[0].status = MarketStatus::Frozen;
        assert_err_code(source_liquidity(&mut vault, 50), ErrorCode::FuseExitFailed);
    }

    #[test]
    fn test_sole_path_unregistered_fuse_propagates() {
        let mut vault = fresh_vault();
        add_market(&mut vault, 1, FuseKind::Lending, 100);
        vault.markets[0].fuse = FuseKind::None;
        assert_err_code(source_liquidity(&mut vault, 50), ErrorCode::FuseExitFailed);
    }

    #[test]
    fn test_stale_order_entry_is_skipped() {
        let mut vault = fresh_vault();
        add_market(&mut vault, 1, FuseKind::Lending, 100);
        vault.withdrawal_order.insert(
            0,
            WithdrawalStep {
                market_id: 99,
                params: Vec::new(),
            },
        );
        assert_eq!(source_liquidity(&mut vault, 60).unwrap(), 60);
    }

    #[test]
    fn test_exhausted_order_returns_what_it_pulled() {
        let mut vault = fresh_vault();
        add_market(&mut vault, 1, FuseKind::Lending, 40);
        let pulled = source_liquidity(&mut vault, 100).unwrap();
        assert_eq!(pulled, 40);
        assert_eq!(vault.idle_balance, 40);
    }

    #[test]
    fn test_surfaced_yield_lands_in_cached_view_only() {
        let mut vault = fresh_vault();
        add_market(&mut vault, 1, FuseKind::Lending, 100);
        // External yield not yet reflected in the cached balance.
        vault.markets[0].live_balance = 150;

        let pulled = source_liquidity(&mut vault, 30).unwrap();
        assert_eq!(pulled, 30);
        assert_eq!(vault.idle_balance, 30);
        // The refresh picks up the surprise; it was not spent on this call.
        assert_eq!(vault.markets[0].cached_balance, 120);
        assert_eq!(vault.markets[0].live_balance, 120);
    }
}
