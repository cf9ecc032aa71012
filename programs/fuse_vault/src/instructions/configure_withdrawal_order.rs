use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_STEP_PARAMS, MAX_WITHDRAWAL_STEPS},
    error::ErrorCode,
    helpers::access,
    instructions::GovernMarkets,
    state::WithdrawalStep,
};

/// Replaces the instant withdrawal path wholesale. Every step must name a
/// known market and no market may appear twice; an empty order is valid and
/// restricts instant redemptions to idle liquidity.
pub fn handler(ctx: Context<GovernMarkets>, order: Vec<WithdrawalStep>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    access::require_governor(vault, &ctx.accounts.governor.key())?;
    require!(
        order.len() <= MAX_WITHDRAWAL_STEPS,
        ErrorCode::InvalidWithdrawalOrder
    );

    for (i, step) in order.iter().enumerate() {
        vault.market(step.market_id)?;
        require!(
            step.params.len() <= MAX_STEP_PARAMS,
            ErrorCode::InvalidWithdrawalOrder
        );
        let duplicate = order[..i].iter().any(|s| s.market_id == step.market_id);
        require!(!duplicate, ErrorCode::InvalidWithdrawalOrder);
    }

    vault.withdrawal_order = order;
    Ok(())
}
