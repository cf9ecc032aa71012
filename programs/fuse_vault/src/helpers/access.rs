use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::Vault};

pub fn require_governor(vault: &Vault, signer: &Pubkey) -> Result<()> {
    require_keys_eq!(*signer, vault.governor, ErrorCode::Unauthorized);
    Ok(())
}

pub fn require_allocator(vault: &Vault, signer: &Pubkey) -> Result<()> {
    require_keys_eq!(*signer, vault.allocator, ErrorCode::Unauthorized);
    Ok(())
}

pub fn require_request_authority(vault: &Vault, signer: &Pubkey) -> Result<()> {
    require_keys_eq!(*signer, vault.request_authority, ErrorCode::Unauthorized);
    Ok(())
}

/// Reentrancy flag. Adapters call external market code; no entry point may
/// run while another one is mid-flight.
pub fn acquire_guard(vault: &mut Vault) -> Result<()> {
    require!(!vault.locked, ErrorCode::ReentrantCall);
    vault.locked = true;
    Ok(())
}

pub fn release_guard(vault: &mut Vault) {
    vault.locked = false;
}
