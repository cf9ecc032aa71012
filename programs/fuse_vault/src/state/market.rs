use anchor_lang::prelude::*;

use crate::{constants::MAX_GRANTED_ASSETS, state::FuseKind};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq)]
pub enum MarketStatus {
    Active,
    Frozen,
}

/// Per-market allocation record embedded in the vault.
///
/// `cached_balance` is the vault's own view of deployed value and is the term
/// that enters `total_assets()`. `live_balance` is what the external market
/// actually holds; only fuses and yield accrual touch it, and the cached view
/// catches up on the refresh that follows a batch or a waterfall run.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace)]
pub struct MarketState {
    pub market_id: u16,
    pub fuse: FuseKind,
    pub status: MarketStatus,
    pub exposure_cap: u128,
    pub cached_balance: u128,
    pub live_balance: u128,
    #[max_len(MAX_GRANTED_ASSETS)]
    pub granted_assets: Vec<Pubkey>,
}

impl MarketState {
    pub fn new(market_id: u16, exposure_cap: u128) -> Self {
        Self {
            market_id,
            fuse: FuseKind::None,
            status: MarketStatus::Active,
            exposure_cap,
            cached_balance: 0,
            live_balance: 0,
            granted_assets: Vec::new(),
        }
    }

    pub fn is_asset_granted(&self, asset: &Pubkey) -> bool {
        self.granted_assets.contains(asset)
    }
}
