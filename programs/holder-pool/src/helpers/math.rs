use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;

/// Integer percentage: `part` percent of `whole`, truncating.
/// `percent_from(x, 100) == x` for any x.
pub fn percent_from(part: u64, whole: u64) -> Result<u64> {
    let product = (whole as u128)
        .checked_mul(part as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    let result = product / 100;

    #[cfg(feature = "verbose")]
    msg!("percent_from: part={}, whole={}, result={}", part, whole, result);

    u64::try_from(result).map_err(|_| ErrorCode::MathOverflow.into())
}

/// Payout percentage for a settlement at cursor `position`.
///
/// The first positions to exit keep the least; everything they leave
/// behind accrues to the pool's withheld balance. Positions at or below
/// BONUS_POSITION_LIMIT are not routed through here at all.
pub fn payout_percent(position: u8) -> u64 {
    if position >= TIER_1_FLOOR {
        TIER_1_PAYOUT_PERCENT
    } else if position >= TIER_2_FLOOR {
        TIER_2_PAYOUT_PERCENT
    } else if position >= TIER_3_FLOOR {
        TIER_3_PAYOUT_PERCENT
    } else {
        100
    }
}

/// Bonus owed to a position holding `locked` out of `remaining_locked`
/// still-seated value: the withheld balance shared proportionally.
///
/// When the last position settles, `remaining_locked == locked` and the
/// share degenerates to the whole withheld balance, so the pool drains to
/// exactly zero.
pub fn bonus_share(withheld: u64, locked: u64, remaining_locked: u64) -> Result<u64> {
    require!(remaining_locked > 0, ErrorCode::MathOverflow);
    require!(locked <= remaining_locked, ErrorCode::MathOverflow);

    let share = (withheld as u128)
        .checked_mul(locked as u128)
        .ok_or(ErrorCode::MathOverflow)?
        / remaining_locked as u128;

    #[cfg(feature = "verbose")]
    msg!(
        "bonus_share: withheld={}, locked={}, remaining={}, share={}",
        withheld,
        locked,
        remaining_locked,
        share
    );

    // locked <= remaining_locked bounds the share by withheld
    Ok(share as u64)
}
