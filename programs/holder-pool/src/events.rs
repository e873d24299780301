use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// INITIALIZATION EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when the ledger is initialized
#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub custody_authority: Pubkey,
    pub pool_mint: Pubkey,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// POOL EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted on every successful lock
#[event]
pub struct Locked {
    pub pool_id: u64,
    pub position: u8,
    pub account: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted when a pool reaches capacity and seals
#[event]
pub struct PoolSealed {
    pub pool_id: u64,
    pub total_locked: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// WITHDRAWAL EVENTS
// ══════════════════════════════════════════════════════════════════════════════
// Field order of Withdrawn/Withheld/Bonus is a compatibility surface for
// external indexers; do not reorder.

/// Emitted on every settled withdrawal
#[event]
pub struct Withdrawn {
    pub pool_id: u64,
    pub position: u8,
    pub account: Pubkey,
    pub amount: u64,
}

/// Emitted when part of a withdrawal is retained in the pool
#[event]
pub struct Withheld {
    pub amount: u64,
}

/// Emitted when a withdrawal is paid a bonus from the withheld balance
#[event]
pub struct Bonus {
    pub position: u8,
    pub amount: u64,
}

// ══════════════════════════════════════════════════════════════════════════════
// NFT REWARD EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a withdrawal position is logged for later reward claims
#[event]
pub struct RewardLogged {
    pub account: Pubkey,
    pub position: u8,
    pub count: u32,
    pub timestamp: i64,
}

/// Emitted when a user folds logged positions into accrued balances
#[event]
pub struct Claimed {
    pub account: Pubkey,
    pub positions_cleared: u32,
    pub timestamp: i64,
}

/// Emitted when an accrued reward balance is minted out
#[event]
pub struct Redeemed {
    pub account: Pubkey,
    pub token_id: u64,
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted when a token id is bound to an SPL mint
#[event]
pub struct RewardMintRegistered {
    pub token_id: u64,
    pub mint: Pubkey,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// ADMIN EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when tunable parameters change
#[event]
pub struct ParametersUpdated {
    pub min_deposit: u64,
    pub timestamp: i64,
}

/// Emitted when admin transfer is completed
#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}
