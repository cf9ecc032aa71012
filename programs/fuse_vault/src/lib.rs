use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod fuses;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod fuse_vault {
    use super::*;

    pub fn initialize_vault(ctx: Context<InitializeVault>, params: VaultInitParams) -> Result<()> {
        instructions::initialize_vault::handler(ctx, params)
    }

    pub fn create_share_account(ctx: Context<CreateShareAccount>) -> Result<()> {
        instructions::create_share_account::handler(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    pub fn mint_shares(ctx: Context<MintShares>, shares: u128) -> Result<()> {
        instructions::mint_shares::handler(ctx, shares)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    pub fn redeem(ctx: Context<Redeem>, shares: u128) -> Result<()> {
        instructions::redeem::handler(ctx, shares)
    }

    pub fn redeem_from_request(
        ctx: Context<RedeemFromRequest>,
        shares: u128,
        owner: Pubkey,
    ) -> Result<()> {
        instructions::redeem_from_request::handler(ctx, shares, owner)
    }

    pub fn execute(ctx: Context<Execute>, actions: Vec<FuseAction>) -> Result<()> {
        instructions::execute::handler(ctx, actions)
    }

    pub fn claim_fee_shares(ctx: Context<ClaimFeeShares>) -> Result<()> {
        instructions::claim_fee_shares::handler(ctx)
    }

    pub fn accrue_market_yield(
        ctx: Context<AccrueMarketYield>,
        market_id: u16,
        amount: u64,
    ) -> Result<()> {
        instructions::accrue_market_yield::handler(ctx, market_id, amount)
    }

    pub fn initialize_market(
        ctx: Context<GovernMarkets>,
        market_id: u16,
        exposure_cap: u128,
    ) -> Result<()> {
        instructions::initialize_market::handler(ctx, market_id, exposure_cap)
    }

    pub fn grant_market_asset(
        ctx: Context<GovernMarkets>,
        market_id: u16,
        asset: Pubkey,
    ) -> Result<()> {
        instructions::grant_market_asset::handler(ctx, market_id, asset)
    }

    pub fn revoke_market_asset(
        ctx: Context<GovernMarkets>,
        market_id: u16,
        asset: Pubkey,
    ) -> Result<()> {
        instructions::revoke_market_asset::handler(ctx, market_id, asset)
    }

    pub fn add_fuse(ctx: Context<GovernMarkets>, market_id: u16, kind: FuseKind) -> Result<()> {
        instructions::add_fuse::handler(ctx, market_id, kind)
    }

    pub fn remove_fuse(ctx: Context<GovernMarkets>, market_id: u16) -> Result<()> {
        instructions::remove_fuse::handler(ctx, market_id)
    }

    pub fn set_market_cap(
        ctx: Context<GovernMarkets>,
        market_id: u16,
        exposure_cap: u128,
    ) -> Result<()> {
        instructions::set_market_cap::handler(ctx, market_id, exposure_cap)
    }

    pub fn set_market_status(
        ctx: Context<GovernMarkets>,
        market_id: u16,
        status: MarketStatus,
    ) -> Result<()> {
        instructions::set_market_status::handler(ctx, market_id, status)
    }

    pub fn set_fee(ctx: Context<GovernMarkets>, kind: FeeKind, bps: u16) -> Result<()> {
        instructions::set_fee::handler(ctx, kind, bps)
    }

    pub fn set_supply_cap(ctx: Context<GovernMarkets>, supply_cap: u128) -> Result<()> {
        instructions::set_supply_cap::handler(ctx, supply_cap)
    }

    pub fn set_authority(
        ctx: Context<GovernMarkets>,
        kind: AuthorityKind,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::set_authority::handler(ctx, kind, new_authority)
    }

    pub fn configure_withdrawal_order(
        ctx: Context<GovernMarkets>,
        order: Vec<WithdrawalStep>,
    ) -> Result<()> {
        instructions::configure_withdrawal_order::handler(ctx, order)
    }
}
