pub const BPS_DENOM: u128 = 10_000;
pub const PPS_SCALE: u128 = 1_000_000_000_000_000_000;
pub const SECONDS_PER_YEAR: i64 = 31_536_000;

pub const MAX_MARKETS: usize = 16;
pub const MAX_GRANTED_ASSETS: usize = 8;
pub const MAX_WITHDRAWAL_STEPS: usize = 16;
pub const MAX_STEP_PARAMS: usize = 64;

// Upper bound on any single fee rate; a vault charging more than half is misconfigured.
pub const MAX_FEE_BPS: u16 = 5_000;

pub const UNCAPPED: u128 = u128::MAX;
