use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid fee bps")]
    InvalidFeeBps,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Unknown market")]
    UnknownMarket,
    #[msg("Market already exists")]
    DuplicateMarket,
    #[msg("Market limit reached")]
    MarketLimitReached,
    #[msg("No fuse registered for market")]
    UnregisteredFuse,
    #[msg("Market already has a fuse")]
    FuseAlreadySet,
    #[msg("Invalid fuse kind")]
    InvalidFuseKind,
    #[msg("Invalid fuse params")]
    InvalidFuseParams,
    #[msg("Asset not granted for market")]
    AssetNotGranted,
    #[msg("Asset already granted for market")]
    AssetAlreadyGranted,
    #[msg("Granted asset limit reached")]
    AssetLimitReached,
    #[msg("Market is frozen")]
    MarketFrozen,
    #[msg("Market exposure cap exceeded")]
    MarketCapExceeded,
    #[msg("Share supply cap exceeded")]
    SupplyCapExceeded,
    #[msg("Insufficient liquidity to cover withdrawal")]
    InsufficientLiquidity,
    #[msg("Operation rounds to zero value")]
    PrecisionLoss,
    #[msg("Fuse exit failed")]
    FuseExitFailed,
    #[msg("Exit returned less than the minimum acceptable amount")]
    SlippageExceeded,
    #[msg("Insufficient shares")]
    InsufficientShares,
    #[msg("Reentrant call")]
    ReentrantCall,
    #[msg("Invalid withdrawal order")]
    InvalidWithdrawalOrder,
    #[msg("Empty fuse batch")]
    EmptyBatch,
    #[msg("Nothing to claim")]
    NothingToClaim,
}
