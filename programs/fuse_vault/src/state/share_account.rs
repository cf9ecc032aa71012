use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct ShareAccount {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub shares: u128,
    pub bump: u8,
}
