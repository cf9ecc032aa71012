pub mod accrue_market_yield;
pub mod add_fuse;
pub mod claim_fee_shares;
pub mod configure_withdrawal_order;
pub mod create_share_account;
pub mod deposit;
pub mod execute;
pub mod grant_market_asset;
pub mod initialize_market;
pub mod initialize_vault;
pub mod mint_shares;
pub mod redeem;
pub mod redeem_from_request;
pub mod remove_fuse;
pub mod revoke_market_asset;
pub mod set_authority;
pub mod set_fee;
pub mod set_market_cap;
pub mod set_market_status;
pub mod set_supply_cap;
pub mod withdraw;

pub use accrue_market_yield::*;
pub use add_fuse::*;
pub use claim_fee_shares::*;
pub use configure_withdrawal_order::*;
pub use create_share_account::*;
pub use deposit::*;
pub use execute::*;
pub use grant_market_asset::*;
pub use initialize_market::*;
pub use initialize_vault::*;
pub use mint_shares::*;
pub use redeem::*;
pub use redeem_from_request::*;
pub use remove_fuse::*;
pub use revoke_market_asset::*;
pub use set_authority::*;
pub use set_fee::*;
pub use set_market_cap::*;
pub use set_market_status::*;
pub use set_supply_cap::*;
pub use withdraw::*;
