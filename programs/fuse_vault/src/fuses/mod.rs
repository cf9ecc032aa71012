pub mod lending;
pub mod liquidity_pool;

pub use lending::*;
pub use liquidity_pool::*;

use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{FuseKind, MarketState},
};

/// Capability set shared by every market adapter. Capital only moves through
/// these three operations plus the `withdrawable` bound the waterfall uses to
/// size its exit requests; the engines never inspect the market kind.
pub trait Fuse {
    /// Deploy `amount` of idle capital into the market. Returns the amount
    /// actually taken from the idle balance.
    fn enter(&self, market: &mut MarketState, amount: u128, params: &[u8]) -> Result<u128>;

    /// Free `amount` of deployed capital back toward the idle balance.
    /// Returns the amount actually freed.
    fn exit(&self, market: &mut MarketState, amount: u128, params: &[u8]) -> Result<u128>;

    /// The market's current value as the external side reports it.
    fn current_value(&self, market: &MarketState) -> u128;

    /// Upper bound on what an exit can free right now.
    fn withdrawable(&self, market: &MarketState) -> u128;
}

pub fn fuse_for(kind: FuseKind) -> Result<&'static dyn Fuse> {
    match kind {
        FuseKind::None => Err(error!(ErrorCode::UnregisteredFuse)),
        FuseKind::Lending => Ok(&LendingFuse),
        FuseKind::LiquidityPool => Ok(&LiquidityPoolFuse),
    }
}
