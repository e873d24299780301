use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;
use crate::helpers::math::{bonus_share, payout_percent, percent_from};

/// One deposit slot inside a pool. Slots are 1-indexed by insertion order;
/// a repeated lock by the same account merges into its existing slot.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub account: Pubkey,
    pub amount: u64,
}

/// Outcome of settling the position at the withdrawal cursor.
///
/// `withheld` is the amount retained in the pool by this settlement,
/// `bonus` the amount paid out of the previously retained balance. At most
/// one of the two is nonzero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub position: u8,
    pub payout: u64,
    pub withheld: u64,
    pub bonus: u64,
}

/// A fixed-capacity batch of locked positions
///
/// Lifecycle: fills position by position (Open), seals at capacity
/// (Whole), then drains through settlements in strict descending cursor
/// order until the cursor reaches zero (Empty).
///
/// PDA Seeds: ["pool_v1", pool_id_le_bytes]
#[account]
pub struct Pool {
    /// Pool id, assigned from the ledger's counter
    pub id: u64,

    /// Withdrawal cursor: next position eligible for settlement.
    /// Set to POOL_CAPACITY when the pool seals, counts down to zero.
    pub withdraw_position: u8,

    /// Balance retained by tiered settlements, paid back out as bonuses
    pub withheld: u64,

    /// Sum of every amount ever locked into this pool
    pub total_locked: u64,

    /// Deposit slots in lock order
    pub positions: Vec<Position>,

    /// Settlement flags, parallel to `positions`
    pub paid: Vec<bool>,

    /// PDA bump seed
    pub bump: u8,
}

impl Pool {
    /// Account size calculation (sized for a full pool):
    /// - id: 8 bytes
    /// - withdraw_position: 1 byte
    /// - withheld: 8 bytes
    /// - total_locked: 8 bytes
    /// - positions: 4 + 100 * (32 + 8) = 4004 bytes
    /// - paid: 4 + 100 = 104 bytes
    /// - bump: 1 byte
    /// Total: 4134 bytes
    pub const LEN: usize = 8 + 1 + 8 + 8 + (4 + POOL_CAPACITY * 40) + (4 + POOL_CAPACITY) + 1;

    /// A pool accepts settlements only once it holds exactly
    /// POOL_CAPACITY positions.
    pub fn is_whole(&self) -> bool {
        self.positions.len() == POOL_CAPACITY
    }

    pub fn pool_length(&self) -> usize {
        self.positions.len()
    }

    /// Slot index (0-based) of the account's position, if any.
    fn find_position(&self, account: &Pubkey) -> Option<usize> {
        self.positions.iter().position(|p| p.account == *account)
    }

    /// Record a lock for `account`. Merges into the account's existing
    /// slot when present, otherwise appends a new one. Returns the
    /// 1-indexed position and whether this lock sealed the pool.
    pub fn lock_position(&mut self, account: Pubkey, amount: u64) -> Result<(u8, bool)> {
        let position = match self.find_position(&account) {
            Some(idx) => {
                let slot = &mut self.positions[idx];
                slot.amount = slot.amount.checked_add(amount).ok_or(ErrorCode::MathOverflow)?;
                idx + 1
            }
            None => {
                require!(self.positions.len() < POOL_CAPACITY, ErrorCode::PoolCapacityExceeded);
                self.positions.push(Position { account, amount });
                self.paid.push(false);
                self.positions.len()
            }
        };

        self.total_locked = self
            .total_locked
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        let sealed = self.is_whole() && self.withdraw_position == 0;
        if sealed {
            self.withdraw_position = POOL_CAPACITY as u8;
        }

        Ok((position as u8, sealed))
    }

    /// Withdrawal cursor read. Rejects open pools and drained pools with
    /// the reason strings clients match on.
    pub fn get_withdraw_position(&self) -> Result<u8> {
        require!(self.is_whole(), ErrorCode::PoolNotSealed);
        require!(self.withdraw_position > 0, ErrorCode::PoolEmpty);
        Ok(self.withdraw_position)
    }

    /// Sum of all amounts ever locked, independent of settlement progress.
    pub fn total_locked_pool_tokens(&self) -> u64 {
        self.total_locked
    }

    /// Locked value still seated at positions with index >= `from`.
    /// Settled positions no longer count, so the result shrinks as the
    /// pool drains and is non-increasing in `from`.
    pub fn total_locked_from(&self, from: u8) -> u64 {
        let first = (from.max(1) as usize) - 1;
        self.positions
            .iter()
            .zip(self.paid.iter())
            .skip(first)
            .filter(|(_, paid)| !**paid)
            .map(|(p, _)| p.amount)
            .sum()
    }

    /// Aggregate amount the account has locked into this pool.
    pub fn user_locked_balance(&self, account: &Pubkey) -> u64 {
        self.find_position(account)
            .map(|idx| self.positions[idx].amount)
            .unwrap_or(0)
    }

    /// Pure projection of the reward `account` would realize right now.
    /// Equals the amount `settle` transfers when invoked next.
    pub fn preview_reward(&self, account: &Pubkey) -> Result<u64> {
        self.compute_settlement(account).map(|s| s.payout)
    }

    /// Settle the position at the cursor for `account`: marks it paid,
    /// folds the withheld/bonus deltas into the pool and decrements the
    /// cursor. The returned payout is what custody owes the account.
    pub fn settle(&mut self, account: &Pubkey) -> Result<Settlement> {
        let settlement = self.compute_settlement(account)?;

        let idx = (settlement.position - 1) as usize;
        self.paid[idx] = true;
        self.withheld = self
            .withheld
            .checked_add(settlement.withheld)
            .and_then(|w| w.checked_sub(settlement.bonus))
            .ok_or(ErrorCode::MathOverflow)?;
        self.withdraw_position -= 1;

        Ok(settlement)
    }

    fn compute_settlement(&self, account: &Pubkey) -> Result<Settlement> {
        require!(self.is_whole(), ErrorCode::PoolNotSealed);
        require!(self.withdraw_position > 0, ErrorCode::PoolEmpty);

        let idx = self
            .find_position(account)
            .ok_or(ErrorCode::PositionOwnerMismatch)?;
        require!(!self.paid[idx], ErrorCode::AlreadyPaid);

        let cursor = self.withdraw_position;
        require!(idx + 1 == cursor as usize, ErrorCode::PositionOwnerMismatch);

        let locked = self.positions[idx].amount;

        if cursor > BONUS_POSITION_LIMIT {
            let payout = percent_from(payout_percent(cursor), locked)?;
            Ok(Settlement {
                position: cursor,
                payout,
                withheld: locked - payout,
                bonus: 0,
            })
        } else {
            let bonus = bonus_share(self.withheld, locked, self.total_locked_from(1))?;
            let payout = locked.checked_add(bonus).ok_or(ErrorCode::MathOverflow)?;
            Ok(Settlement {
                position: cursor,
                payout,
                withheld: 0,
                bonus,
            })
        }
    }

    /// Deterministic placeholder owner for fixture positions.
    pub fn synthetic_account(index: u8) -> Pubkey {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x5a;
        bytes[31] = index;
        Pubkey::new_from_array(bytes)
    }
}
