use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// POOL PARAMETERS
// ══════════════════════════════════════════════════════════════════════════════

/// Number of positions a pool holds before it seals
pub const POOL_CAPACITY: usize = 100;

/// Minimum lock amount in base token units
pub const MIN_DEPOSIT: u64 = 100_000;

/// Positions at or below this cursor value are paid in full plus a share
/// of the pool's withheld balance
pub const BONUS_POSITION_LIMIT: u8 = 35;

/// Withhold tier boundaries, applied by cursor position at settlement.
/// Positions above each boundary keep the paired percentage of their
/// locked amount; the rest accrues to the pool's withheld balance.
pub const TIER_1_FLOOR: u8 = 81; // positions 81..=100 keep 65%
pub const TIER_2_FLOOR: u8 = 61; // positions 61..=80 keep 80%
pub const TIER_3_FLOOR: u8 = 41; // positions 41..=60 keep 90%

pub const TIER_1_PAYOUT_PERCENT: u64 = 65;
pub const TIER_2_PAYOUT_PERCENT: u64 = 80;
pub const TIER_3_PAYOUT_PERCENT: u64 = 90;

// ══════════════════════════════════════════════════════════════════════════════
// REWARD TABLE BOUNDS
// ══════════════════════════════════════════════════════════════════════════════

/// Maximum reward parts configurable per withdraw position
pub const MAX_REWARD_PARTS: usize = 4;

/// Maximum distinct reward token ids a user can hold accrued balances for
pub const MAX_REWARD_TOKENS: usize = 16;

// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

pub const LEDGER_SEED: &[u8] = b"ledger_v1";
pub const CUSTODY_AUTHORITY_SEED: &[u8] = b"custody_v1";
pub const POOL_SEED: &[u8] = b"pool_v1";
pub const REWARD_TABLE_SEED: &[u8] = b"reward_table_v1";
pub const REWARD_LOG_SEED: &[u8] = b"reward_log_v1";
pub const REWARD_MINT_SEED: &[u8] = b"reward_mint_v1";
