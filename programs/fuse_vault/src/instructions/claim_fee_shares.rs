use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::{ledger, math},
    state::{ShareAccount, Vault},
};

pub fn handler(ctx: Context<ClaimFeeShares>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.recipient.key(),
        ctx.accounts.vault.fee_recipient,
        ErrorCode::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.share_account.owner,
        ctx.accounts.recipient.key(),
        ErrorCode::Unauthorized
    );

    let vault = &mut ctx.accounts.vault;
    let claimed = ledger::claim_fee_shares_core(vault)?;

    let share_account = &mut ctx.accounts.share_account;
    share_account.shares = math::checked_add(share_account.shares, claimed)?;

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimFeeShares<'info> {
    #[account(mut)]
    pub recipient: Signer<'info>,
    #[account(
        mut,
        seeds = [b"vault", vault.underlying_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
    #[account(
        mut,
        seeds = [b"share-account", vault.key().as_ref(), recipient.key().as_ref()],
        bump = share_account.bump,
    )]
    pub share_account: Account<'info, ShareAccount>,
}
