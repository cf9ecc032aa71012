use anchor_lang::prelude::*;

use crate::state::{ShareAccount, Vault};

pub fn handler(ctx: Context<CreateShareAccount>) -> Result<()> {
    let share_account = &mut ctx.accounts.share_account;
    share_account.owner = ctx.accounts.user.key();
    share_account.vault = ctx.accounts.vault.key();
    share_account.shares = 0;
    share_account.bump = ctx.bumps.share_account;
    Ok(())
}

#[derive(Accounts)]
pub struct CreateShareAccount<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        seeds = [b"vault", vault.underlying_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
    #[account(
        init,
        payer = user,
        seeds = [b"share-account", vault.key().as_ref(), user.key().as_ref()],
        bump,
        space = 8 + ShareAccount::INIT_SPACE,
    )]
    pub share_account: Account<'info, ShareAccount>,
    pub system_program: Program<'info, System>,
}
