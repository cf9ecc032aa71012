use anchor_lang::prelude::*;

use crate::{
    helpers::{access, execution},
    state::{FuseAction, Vault},
};

pub fn handler(ctx: Context<Execute>, actions: Vec<FuseAction>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let vault = &mut ctx.accounts.vault;
    access::require_allocator(vault, &ctx.accounts.allocator.key())?;
    access::acquire_guard(vault)?;
    execution::execute_batch(vault, &actions, now)?;
    access::release_guard(vault);

    Ok(())
}

#[derive(Accounts)]
pub struct Execute<'info> {
    pub allocator: Signer<'info>,
    #[account(
        mut,
        seeds = [b"vault", vault.underlying_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
}
