use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    fuses::Fuse,
    helpers::math,
    state::{MarketState, MarketStatus},
};

/// Adapter for supply-only lending markets. Takes no extra parameters; the
/// deployed position is redeemable one to one up to the market's live value.
pub struct LendingFuse;

impl Fuse for LendingFuse {
    fn enter(&self, market: &mut MarketState, amount: u128, _params: &[u8]) -> Result<u128> {
        require!(market.status == MarketStatus::Active, ErrorCode::MarketFrozen);
        require!(!market.granted_assets.is_empty(), ErrorCode::AssetNotGranted);
        require!(amount > 0, ErrorCode::InvalidAmount);
        market.live_balance = math::checked_add(market.live_balance, amount)?;
        Ok(amount)
    }

    fn exit(&self, market: &mut MarketState, amount: u128, _params: &[u8]) -> Result<u128> {
        require!(market.status == MarketStatus::Active, ErrorCode::MarketFrozen);
        require!(amount > 0, ErrorCode::InvalidAmount);
        require!(
            amount <= market.live_balance,
            ErrorCode::InsufficientLiquidity
        );
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
