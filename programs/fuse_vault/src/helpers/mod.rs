pub mod access;
pub mod convert;
pub mod execution;
pub mod fees;
pub mod ledger;
pub mod math;
pub mod waterfall;

pub use access::*;
pub use convert::*;
pub use execution::*;
pub use fees::*;
pub use ledger::*;
pub use math::*;
pub use waterfall::*;
