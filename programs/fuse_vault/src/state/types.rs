use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, MAX_FEE_BPS, MAX_STEP_PARAMS},
    error::ErrorCode,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq)]
pub enum FuseKind {
    None,
    Lending,
    LiquidityPool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum FuseOp {
    Enter,
    Exit,
}

/// One step of an allocator batch: which market to touch, whether capital
/// moves in or out, how much, and fuse-specific extras decoded by the fuse
/// itself.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct FuseAction {
    pub market_id: u16,
    pub op: FuseOp,
    pub amount: u128,
    pub params: Vec<u8>,
}

/// One step of the instant withdrawal waterfall. The amount is decided by the
/// waterfall at run time; params carry fuse-specific knobs only.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace)]
pub struct WithdrawalStep {
    pub market_id: u16,
    #[max_len(MAX_STEP_PARAMS)]
    pub params: Vec<u8>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum FeeKind {
    Management,
    Performance,
    Withdrawal,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityKind {
    Governor,
    Allocator,
    RequestAuthority,
    FeeRecipient,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct VaultInitParams {
    pub allocator: Pubkey,
    pub request_authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub management_fee_bps: u16,
    pub performance_fee_bps: u16,
    pub withdrawal_fee_bps: u16,
    pub supply_cap: u128,
    pub decimals_offset: u8,
}

impl VaultInitParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.management_fee_bps <= MAX_FEE_BPS, ErrorCode::InvalidFeeBps);
        require!(self.performance_fee_bps <= MAX_FEE_BPS, ErrorCode::InvalidFeeBps);
        require!(self.withdrawal_fee_bps <= MAX_FEE_BPS, ErrorCode::InvalidFeeBps);
        require!((self.withdrawal_fee_bps as u128) < BPS_DENOM, ErrorCode::InvalidFeeBps);
        require!(self.supply_cap > 0, ErrorCode::InvalidAmount);
        require!(self.decimals_offset <= 18, ErrorCode::InvalidAmount);
        Ok(())
    }
}
