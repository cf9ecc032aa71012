use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_MARKETS, MAX_WITHDRAWAL_STEPS},
    error::ErrorCode,
    state::{MarketState, WithdrawalStep},
};

/// The single mutable aggregate of the vault. Owned by the share ledger and
/// passed by reference into the fee, execution, and waterfall engines.
#[account]
#[derive(InitSpace)]
pub struct Vault {
    pub governor: Pubkey,
    pub allocator: Pubkey,
    pub request_authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub underlying_mint: Pubkey,
    pub liquidity_vault: Pubkey,
    pub idle_balance: u128,
    pub total_shares: u128,
    /// Fee shares already minted into `total_shares`, awaiting claim by the
    /// fee recipient.
    pub pending_fee_shares: u128,
    pub supply_cap: u128,
    pub management_fee_bps: u16,
    pub performance_fee_bps: u16,
    pub withdrawal_fee_bps: u16,
    /// Highest observed price per share, scaled by PPS_SCALE.
    pub high_water_mark: u128,
    pub last_accrual_ts: i64,
    pub decimals_offset: u8,
    pub locked: bool,
    #[max_len(MAX_MARKETS)]
    pub markets: Vec<MarketState>,
    #[max_len(MAX_WITHDRAWAL_STEPS)]
    pub withdrawal_order: Vec<WithdrawalStep>,
    pub bump: u8,
}

impl Vault {
    pub fn market(&self, market_id: u16) -> Result<&MarketState> {
        self.markets
            .iter()
            .find(|m| m.market_id == market_id)
            .ok_or_else(|| error!(ErrorCode::UnknownMarket))
    }

    pub fn market_mut(&mut self, market_id: u16) -> Result<&mut MarketState> {
        self.markets
            .iter_mut()
            .find(|m| m.market_id == market_id)
            .ok_or_else(|| error!(ErrorCode::UnknownMarket))
    }

    pub fn market_index(&self, market_id: u16) -> Result<usize> {
        self.markets
            .iter()
            .position(|m| m.market_id == market_id)
            .ok_or_else(|| error!(ErrorCode::UnknownMarket))
    }

    pub fn total_assets_in_market(&self, market_id: u16) -> Result<u128> {
        Ok(self.market(market_id)?.cached_balance)
    }

    pub fn is_asset_granted(&self, market_id: u16, asset: &Pubkey) -> bool {
        self.market(market_id)
            .map(|m| m.is_asset_granted(asset))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        helpers::testutil::{add_market, assert_err_code, fresh_vault},
        state::FuseKind,
    };

    #[test]
    fn test_market_lookup() {
        let mut vault = fresh_vault();
        add_market(&mut vault, 7, FuseKind::Lending, 500);

        assert_eq!(vault.market(7).unwrap().market_id, 7);
        assert_eq!(vault.market_index(7).unwrap(), 0);
        assert_eq!(vault.total_assets_in_market(7).unwrap(), 500);
        assert_err_code(vault.market_index(8), ErrorCode::UnknownMarket);

        let asset = vault.markets[0].granted_assets[0];
        assert!(vault.is_asset_granted(7, &asset));
        assert!(!vault.is_asset_granted(7, &Pubkey::new_unique()));
        assert!(!vault.is_asset_granted(8, &asset));
    }
}
