use anchor_lang::prelude::*;

/// Holder Pool Error Codes
///
/// The lock/withdraw reason strings are part of the external surface and
/// must stay byte-identical; clients match on them.
#[error_code]
pub enum ErrorCode {
    #[msg("Not enough for participate")]
    InsufficientDeposit,

    #[msg("Only whole pool")]
    PoolNotSealed,

    #[msg("Pool is empty")]
    PoolEmpty,

    #[msg("User not found")]
    PositionOwnerMismatch,

    #[msg("Reward already received")]
    AlreadyPaid,

    #[msg("Unauthorized")]
    UnauthorizedAccess,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Pool capacity exceeded")]
    PoolCapacityExceeded,

    #[msg("Position out of range")]
    PositionOutOfRange,

    #[msg("Too many reward parts for one position")]
    TooManyRewardParts,

    #[msg("Positions and rewards length mismatch")]
    LengthMismatch,

    #[msg("Invalid pool")]
    InvalidPool,

    #[msg("Mint mismatch between accounts")]
    MintMismatch,

    #[msg("Reward mint does not match token id")]
    RewardMintMismatch,

    #[msg("Reward token limit reached")]
    RewardTokenLimit,

    #[msg("Nothing to redeem")]
    NothingToRedeem,
}
