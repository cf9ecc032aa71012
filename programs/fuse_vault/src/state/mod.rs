pub mod market;
pub mod share_account;
pub mod types;
pub mod vault;

pub use market::*;
pub use share_account::*;
pub use types::*;
pub use vault::*;
