use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    fuses::Fuse,
    helpers::math,
    state::{MarketState, MarketStatus},
};

/// Extra knobs for pool markets, borsh-encoded into the opaque params slot.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default)]
pub struct PoolFuseParams {
    /// Minimum acceptable amount credited (enter) or freed (exit).
    pub min_out: u128,
}

impl PoolFuseParams {
    fn decode(params: &[u8]) -> Result<Self> {
        if params.is_empty() {
            return Ok(Self::default());
        }
        Self::try_from_slice(params).map_err(|_| error!(ErrorCode::InvalidFuseParams))
    }
}

/// Adapter for pooled liquidity markets. Same flow shape as lending, but the
/// caller can demand a minimum fill, mirroring a slippage bound on the pool
/// side.
pub struct LiquidityPoolFuse;

impl Fuse for LiquidityPoolFuse {
    fn enter(&self, market: &mut MarketState, amount: u128, params: &[u8]) -> Result<u128> {
        require!(market.status == MarketStatus::Active, ErrorCode::MarketFrozen);
        require!(!market.granted_assets.is_empty(), ErrorCode::AssetNotGranted);
        require!(amount > 0, ErrorCode::InvalidAmount);
        let p = PoolFuseParams::decode(params)?;
        require!(amount >= p.min_out, ErrorCode::SlippageExceeded);
        market.live_balance = math::checked_add(market.live_balance, amount)?;
        Ok(amount)
    }

    fn exit(&self, market: &mut MarketState, amount: u128, params: &[u8]) -> Result<u128> {
        require!(market.status == MarketStatus::Active, ErrorCode::MarketFrozen);
        require!(amount > 0, ErrorCode::InvalidAmount);
        require!(
            amount <= market.live_balance,
            ErrorCode::InsufficientLiquidity
        );
        let p = PoolFuseParams::decode(params)?;
        require!(amount >= p.min_out, ErrorCode::SlippageExceeded);
        market.live_balance -= amount;
        Ok(amount)
    }

    fn current_value(&self, market: &MarketState) -> u128 {
        market.live_balance
    }

    fn withdrawable(&self, market: &MarketState) -> u128 {
        if market.status == MarketStatus::Frozen {
            0
        } else {
            market.live_balance
        }
    }
}
