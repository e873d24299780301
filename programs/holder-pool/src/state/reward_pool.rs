use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;

/// One reward component: `amount` units of the token bound to `token_id`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardPart {
    pub token_id: u64,
    pub amount: u64,
}

/// Reward configuration for a single withdraw position.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionRewards {
    pub rewards: Vec<RewardPart>,
}

/// Accrued claimable balance for one reward token id.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardBalance {
    pub token_id: u64,
    pub amount: u64,
}

/// Admin-configured reward schedule, one entry per withdraw position.
/// Writing a position overwrites its previous parts.
///
/// PDA Seeds: ["reward_table_v1"]
#[account]
pub struct RewardTable {
    /// PDA bump seed
    pub bump: u8,

    /// Reward parts indexed by withdraw position - 1; always
    /// POOL_CAPACITY entries once initialized
    pub positions: Vec<PositionRewards>,
}

impl RewardTable {
    /// Account size calculation:
    /// - bump: 1 byte
    /// - positions: 4 + 100 * (4 + MAX_REWARD_PARTS * 16) = 6804 bytes
    /// Total: 6805 bytes
    pub const LEN: usize = 1 + 4 + POOL_CAPACITY * (4 + MAX_REWARD_PARTS * 16);

    pub fn set_reward(&mut self, position: u8, parts: Vec<RewardPart>) -> Result<()> {
        require!(
            position >= 1 && position as usize <= POOL_CAPACITY,
            ErrorCode::PositionOutOfRange
        );
        require!(parts.len() <= MAX_REWARD_PARTS, ErrorCode::TooManyRewardParts);

        self.positions[position as usize - 1].rewards = parts;
        Ok(())
    }

    pub fn get_reward(&self, position: u8) -> Result<&[RewardPart]> {
        require!(
            position >= 1 && position as usize <= POOL_CAPACITY,
            ErrorCode::PositionOutOfRange
        );
        Ok(&self.positions[position as usize - 1].rewards)
    }
}

/// Per-user withdrawal log and accrued reward balances
///
/// Withdrawals increment the count for the settled position; `claim`
/// folds the counts through the current RewardTable into `balances` and
/// clears them; `redeem` mints one token id's balance out.
///
/// PDA Seeds: ["reward_log_v1", user_pubkey]
#[account]
pub struct RewardLog {
    /// The user's wallet address
    pub user: Pubkey,

    /// PDA bump seed
    pub bump: u8,

    /// Withdrawal counts indexed by withdraw position - 1
    pub logs: [u32; POOL_CAPACITY],

    /// Accrued claimable balances per reward token id
    pub balances: Vec<RewardBalance>,
}

impl RewardLog {
    /// Account size calculation:
    /// - user: 32 bytes
    /// - bump: 1 byte
    /// - logs: 4 * 100 = 400 bytes
    /// - balances: 4 + MAX_REWARD_TOKENS * 16 = 260 bytes
    /// Total: 693 bytes
    pub const LEN: usize = 32 + 1 + 4 * POOL_CAPACITY + 4 + MAX_REWARD_TOKENS * 16;

    /// Record one settled withdrawal at `position`. Returns the new count.
    pub fn log(&mut self, position: u8) -> Result<u32> {
        require!(
            position >= 1 && position as usize <= POOL_CAPACITY,
            ErrorCode::PositionOutOfRange
        );

        let slot = &mut self.logs[position as usize - 1];
        *slot = slot.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        Ok(*slot)
    }

    pub fn get_log(&self, position: u8) -> Result<u32> {
        require!(
            position >= 1 && position as usize <= POOL_CAPACITY,
            ErrorCode::PositionOutOfRange
        );
        Ok(self.logs[position as usize - 1])
    }

    /// Fold every logged position through `table` into accrued balances
    /// and clear the logs. A position with no configured parts clears
    /// without accruing anything. Returns the number of positions
    /// cleared.
    pub fn claim(&mut self, table: &RewardTable) -> Result<u32> {
        let mut cleared = 0u32;

        for idx in 0..POOL_CAPACITY {
            let count = self.logs[idx];
            if count == 0 {
                continue;
            }

            if let Some(entry) = table.positions.get(idx) {
                for part in &entry.rewards {
                    let accrued = part
                        .amount
                        .checked_mul(count as u64)
                        .ok_or(ErrorCode::MathOverflow)?;
                    Self::credit(&mut self.balances, part.token_id, accrued)?;
                }
            }

            self.logs[idx] = 0;
            cleared += 1;
        }

        Ok(cleared)
    }

    fn credit(balances: &mut Vec<RewardBalance>, token_id: u64, amount: u64) -> Result<()> {
        if let Some(entry) = balances.iter_mut().find(|b| b.token_id == token_id) {
            entry.amount = entry.amount.checked_add(amount).ok_or(ErrorCode::MathOverflow)?;
            return Ok(());
        }

        require!(balances.len() < MAX_REWARD_TOKENS, ErrorCode::RewardTokenLimit);
        balances.push(RewardBalance { token_id, amount });
        Ok(())
    }

    pub fn balance_of(&self, token_id: u64) -> u64 {
        self.balances
            .iter()
            .find(|b| b.token_id == token_id)
            .map(|b| b.amount)
            .unwrap_or(0)
    }

    /// Drain the accrued balance for `token_id`; the caller mints it out.
    pub fn take_balance(&mut self, token_id: u64) -> Result<u64> {
        let idx = self
            .balances
            .iter()
            .position(|b| b.token_id == token_id)
            .ok_or(ErrorCode::NothingToRedeem)?;

        let amount = self.balances[idx].amount;
        require!(amount > 0, ErrorCode::NothingToRedeem);

        self.balances.remove(idx);
        Ok(amount)
    }
}

/// Binding of an external reward token id to an SPL mint whose authority
/// is the custody PDA.
///
/// PDA Seeds: ["reward_mint_v1", token_id_le_bytes]
#[account]
pub struct RewardMint {
    /// Reward token id as configured in the table
    pub token_id: u64,

    /// SPL mint minted on redeem
    pub mint: Pubkey,

    /// PDA bump seed
    pub bump: u8,
}

impl RewardMint {
    /// Account size calculation:
    /// - token_id: 8 bytes
    /// - mint: 32 bytes
    /// - bump: 1 byte
    /// Total: 41 bytes
    pub const LEN: usize = 8 + 32 + 1;
}
