use anchor_lang::prelude::*;

use crate::{helpers::access, instructions::GovernMarkets, state::AuthorityKind};

pub fn handler(ctx: Context<GovernMarkets>, kind: AuthorityKind, new_authority: Pubkey) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    access::require_governor(vault, &ctx.accounts.governor.key())?;

    match kind {
        AuthorityKind::Governor => vault.governor = new_authority,
        AuthorityKind::Allocator => vault.allocator = new_authority,
        AuthorityKind::RequestAuthority => vault.request_authority = new_authority,
        AuthorityKind::FeeRecipient => vault.fee_recipient = new_authority,
    }
    Ok(())
}
