use anchor_lang::prelude::*;

/// Global ledger configuration and statistics
///
/// Stores the admin authority, the pool token mint, the custody PDA bump
/// and cumulative metrics. Only one LedgerState account exists per program
/// instance.
#[account]
pub struct LedgerState {
    /// Current admin authority
    pub admin: Pubkey,

    /// SPL mint locked into pools
    pub pool_mint: Pubkey,

    /// Id of the currently open pool
    pub current_pool_id: u64,

    /// Minimum lock amount (admin tunable)
    pub min_deposit: u64,

    /// Total tokens ever locked across all pools
    pub total_locked_lifetime: u64,

    /// Total tokens ever paid out across all pools
    pub total_paid_lifetime: u64,

    /// Number of pools that reached capacity
    pub pools_sealed: u64,

    /// Timestamp when the ledger was initialized
    pub initialized_at: i64,

    /// PDA bump for the custody authority
    pub custody_bump: u8,

    /// PDA bump for this account
    pub bump: u8,
}

impl LedgerState {
    /// Account size calculation:
    /// - 2 Pubkeys: 32 * 2 = 64 bytes (admin, pool_mint)
    /// - 5 u64: 8 * 5 = 40 bytes (current_pool_id, min_deposit,
    ///   total_locked_lifetime, total_paid_lifetime, pools_sealed)
    /// - 1 i64: 8 bytes (initialized_at)
    /// - 2 u8: 2 bytes (custody_bump, bump)
    /// Total: 64 + 40 + 8 + 2 = 114 bytes
    pub const LEN: usize = 32 * 2 + 8 * 5 + 8 + 2;
}
