// ============================================================================
// UNIT TESTS FOR HOLDER POOL PROGRAM
// ============================================================================
//
// This module contains unit tests for the core logic of the pool program.
// Run with: cargo test --lib
//
// Test Categories:
// 1. Math Functions - percent_from, payout tiers, bonus shares
// 2. Pool Ledger - lock/merge/seal behavior
// 3. Reward Queries - totals, cursors, per-user balances
// 4. Withdrawal Engine - ordering, conservation, error taxonomy
// 5. Reward Table - set/log/claim/redeem accounting
// ============================================================================

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use crate::{
        // Constants
        constants::{BONUS_POSITION_LIMIT, MAX_REWARD_PARTS, MAX_REWARD_TOKENS, MIN_DEPOSIT, POOL_CAPACITY},
        // Types
        errors::ErrorCode,
        // Functions
        helpers::math::{bonus_share, payout_percent, percent_from},
        state::{Pool, PositionRewards, RewardLog, RewardPart, RewardTable},
    };
    use anchor_lang::prelude::*;

    fn empty_pool() -> Pool {
        Pool {
            id: 0,
            withdraw_position: 0,
            withheld: 0,
            total_locked: 0,
            positions: vec![],
            paid: vec![],
            bump: 0,
        }
    }

    /// A sealed pool with POOL_CAPACITY distinct owners; position i locks
    /// `amount_of(i)`.
    fn whole_pool(amount_of: impl Fn(u8) -> u64) -> Pool {
        let mut pool = empty_pool();
        for i in 1..=POOL_CAPACITY as u8 {
            let (position, sealed) = pool
                .lock_position(Pool::synthetic_account(i), amount_of(i))
                .unwrap();
            assert_eq!(position, i);
            assert_eq!(sealed, i as usize == POOL_CAPACITY);
        }
        pool
    }

    fn uniform_pool() -> Pool {
        whole_pool(|_| MIN_DEPOSIT)
    }

    // ========================================================================
    // 1. MATH FUNCTION TESTS
    // ========================================================================

    mod math_tests {
        use super::*;

        #[test]
        fn test_percent_from_identity_at_100() {
            for p in [10u64, 20, 35] {
                assert_eq!(percent_from(p, 100).unwrap(), p);
            }
        }

        #[test]
        fn test_percent_from_basic() {
            assert_eq!(percent_from(65, 100_000).unwrap(), 65_000);
            assert_eq!(percent_from(80, 100_000).unwrap(), 80_000);
            assert_eq!(percent_from(90, 100_000).unwrap(), 90_000);
            assert_eq!(percent_from(100, 100_000).unwrap(), 100_000);
            assert_eq!(percent_from(0, 100_000).unwrap(), 0);
        }

        #[test]
        fn test_percent_from_truncates() {
            // 33% of 10 truncates to 3
            assert_eq!(percent_from(33, 10).unwrap(), 3);
        }

        #[test]
        fn test_percent_from_overflow() {
            // Result no longer fits u64
            let result = percent_from(200, u64::MAX);
            assert!(result.is_err(), "oversized percentage should error");
        }

        #[test]
        fn test_payout_percent_tiers() {
            assert_eq!(payout_percent(100), 65);
            assert_eq!(payout_percent(81), 65);
            assert_eq!(payout_percent(80), 80);
            assert_eq!(payout_percent(61), 80);
            assert_eq!(payout_percent(60), 90);
            assert_eq!(payout_percent(41), 90);
            assert_eq!(payout_percent(40), 100);
            assert_eq!(payout_percent(36), 100);
        }

        #[test]
        fn test_bonus_share_proportional() {
            // 1/4 of the remaining locked value gets 1/4 of the withheld
            assert_eq!(bonus_share(1_000, 100_000, 400_000).unwrap(), 250);
        }

        #[test]
        fn test_bonus_share_degenerates_to_full_withheld() {
            // Last position: remaining == locked, bonus sweeps everything
            assert_eq!(bonus_share(1_300_000, 100_000, 100_000).unwrap(), 1_300_000);
        }

        #[test]
        fn test_bonus_share_zero_remaining() {
            assert!(bonus_share(1_000, 0, 0).is_err());
        }
    }

    // ========================================================================
    // 2. POOL LEDGER TESTS
    // ========================================================================

    mod pool_ledger_tests {
        use super::*;

        #[test]
        fn test_lock_appends_positions() {
            let alice = Pubkey::new_unique();
            let bob = Pubkey::new_unique();
            let mut pool = empty_pool();

            let (position, sealed) = pool.lock_position(alice, 100_000).unwrap();
            assert_eq!(position, 1);
            assert!(!sealed);
            assert_eq!(pool.total_locked_pool_tokens(), 100_000);
            assert_eq!(pool.user_locked_balance(&alice), 100_000);
            assert_eq!(pool.pool_length(), 1);

            let (position, _) = pool.lock_position(bob, 100_000).unwrap();
            assert_eq!(position, 2);
            assert_eq!(pool.total_locked_pool_tokens(), 200_000);
            assert_eq!(pool.user_locked_balance(&bob), 100_000);
            assert_eq!(pool.pool_length(), 2);
        }

        #[test]
        fn test_repeated_lock_merges_into_existing_slot() {
            let alice = Pubkey::new_unique();
            let bob = Pubkey::new_unique();
            let mut pool = empty_pool();

            pool.lock_position(alice, 100_000).unwrap();
            pool.lock_position(bob, 100_000).unwrap();
            let (position, _) = pool.lock_position(bob, 100_000).unwrap();

            // Bob keeps slot 2; his balance aggregates
            assert_eq!(position, 2);
            assert_eq!(pool.pool_length(), 2);
            assert_eq!(pool.total_locked_pool_tokens(), 300_000);
            assert_eq!(pool.user_locked_balance(&bob), 200_000);
            assert_eq!(pool.user_locked_balance(&alice), 100_000);
        }

        #[test]
        fn test_pool_seals_at_capacity() {
            let pool = uniform_pool();
            assert!(pool.is_whole());
            assert_eq!(pool.pool_length(), POOL_CAPACITY);
            assert_eq!(pool.get_withdraw_position().unwrap(), POOL_CAPACITY as u8);
        }

        #[test]
        fn test_lock_beyond_capacity_rejected() {
            let mut pool = uniform_pool();
            let late = Pubkey::new_unique();
            let result = pool.lock_position(late, MIN_DEPOSIT);
            assert!(result.is_err(), "101st distinct position must be rejected");
        }
    }

    // ========================================================================
    // 3. REWARD QUERY TESTS
    // ========================================================================

    mod reward_query_tests {
        use super::*;

        #[test]
        fn test_totals_agree_before_withdrawals() {
            let pool = whole_pool(|i| i as u64 * 100_000);
            let total = pool.total_locked_pool_tokens();

            assert_eq!(pool.total_locked_from(0), total);
            assert_eq!(pool.total_locked_from(1), total);
            assert!(pool.total_locked_from(2) < total);
        }

        #[test]
        fn test_total_locked_from_non_increasing() {
            let pool = whole_pool(|i| i as u64 * 100_000);
            for k in 1..POOL_CAPACITY as u8 {
                assert!(pool.total_locked_from(k + 1) <= pool.total_locked_from(k));
            }
        }

        #[test]
        fn test_total_locked_from_drops_after_settlement() {
            let mut pool = uniform_pool();
            let total = pool.total_locked_pool_tokens();

            pool.settle(&Pool::synthetic_account(100)).unwrap();

            // Static total survives; the from-query excludes the settled slot
            assert_eq!(pool.total_locked_pool_tokens(), total);
            assert_eq!(pool.total_locked_from(100), 0);
            assert_eq!(pool.total_locked_from(1), total - MIN_DEPOSIT);
        }

        #[test]
        fn test_withdraw_position_requires_whole_pool() {
            let mut pool = empty_pool();
            pool.lock_position(Pubkey::new_unique(), MIN_DEPOSIT).unwrap();

            let result = pool.get_withdraw_position();
            assert_eq!(result.unwrap_err(), ErrorCode::PoolNotSealed.into());
        }

        #[test]
        fn test_unknown_account_has_zero_balance() {
            let pool = uniform_pool();
            assert_eq!(pool.user_locked_balance(&Pubkey::new_unique()), 0);
        }
    }

    // ========================================================================
    // 4. WITHDRAWAL ENGINE TESTS
    // ========================================================================

    mod withdrawal_tests {
        use super::*;

        #[test]
        fn test_full_drain_strict_cursor_decrement() {
            let mut pool = uniform_pool();

            for i in (1..=POOL_CAPACITY as u8).rev() {
                assert_eq!(pool.get_withdraw_position().unwrap(), i);
                pool.settle(&Pool::synthetic_account(i)).unwrap();
                if i > 1 {
                    assert_eq!(pool.get_withdraw_position().unwrap(), i - 1);
                }
            }

            let result = pool.get_withdraw_position();
            assert_eq!(result.unwrap_err(), ErrorCode::PoolEmpty.into());

            // Any further settlement attempt also reports the empty pool
            let result = pool.settle(&Pool::synthetic_account(1));
            assert_eq!(result.unwrap_err(), ErrorCode::PoolEmpty.into());
        }

        #[test]
        fn test_preview_matches_settlement() {
            let mut pool = whole_pool(|i| i as u64 * 100_000);

            for i in (1..=POOL_CAPACITY as u8).rev() {
                let account = Pool::synthetic_account(i);
                let previewed = pool.preview_reward(&account).unwrap();
                let settlement = pool.settle(&account).unwrap();
                assert_eq!(previewed, settlement.payout, "preview diverged at {}", i);
            }
        }

        #[test]
        fn test_uniform_pool_conservation() {
            let mut pool = uniform_pool();
            let total = pool.total_locked_pool_tokens();

            let mut paid_out = 0u64;
            for i in (1..=POOL_CAPACITY as u8).rev() {
                let settlement = pool.settle(&Pool::synthetic_account(i)).unwrap();
                paid_out += settlement.payout;
            }

            assert_eq!(paid_out, total, "every locked token must leave the pool");
            assert_eq!(pool.withheld, 0, "withheld balance must drain to zero");
        }

        #[test]
        fn test_varied_amounts_conservation() {
            let mut pool = whole_pool(|i| i as u64 * 100_000);
            let total = pool.total_locked_pool_tokens();

            let mut paid_out = 0u64;
            for i in (1..=POOL_CAPACITY as u8).rev() {
                paid_out += pool.settle(&Pool::synthetic_account(i)).unwrap().payout;
            }

            assert_eq!(paid_out, total);
            assert_eq!(pool.withheld, 0);
        }

        #[test]
        fn test_early_positions_withhold_late_positions_gain() {
            let mut pool = uniform_pool();

            // First exit sits in the deepest withhold tier
            let settlement = pool.settle(&Pool::synthetic_account(100)).unwrap();
            assert_eq!(settlement.payout, percent_from(65, MIN_DEPOSIT).unwrap());
            assert_eq!(settlement.withheld, MIN_DEPOSIT - settlement.payout);
            assert_eq!(settlement.bonus, 0);
            assert_eq!(pool.withheld, settlement.withheld);

            for i in (BONUS_POSITION_LIMIT + 1..=99).rev() {
                pool.settle(&Pool::synthetic_account(i)).unwrap();
            }

            // Bonus region: paid in full plus a share of the withheld pot
            let withheld_before = pool.withheld;
            assert!(withheld_before > 0);
            let settlement = pool
                .settle(&Pool::synthetic_account(BONUS_POSITION_LIMIT))
                .unwrap();
            assert!(settlement.payout >= MIN_DEPOSIT);
            assert_eq!(settlement.bonus, settlement.payout - MIN_DEPOSIT);
            assert_eq!(pool.withheld, withheld_before - settlement.bonus);
        }

        #[test]
        fn test_repeat_withdrawal_rejected() {
            let mut pool = uniform_pool();
            let account = Pool::synthetic_account(100);

            pool.settle(&account).unwrap();

            let result = pool.settle(&account);
            assert_eq!(result.unwrap_err(), ErrorCode::AlreadyPaid.into());
        }

        #[test]
        fn test_unknown_account_rejected() {
            let mut pool = uniform_pool();
            let result = pool.settle(&Pubkey::new_unique());
            assert_eq!(result.unwrap_err(), ErrorCode::PositionOwnerMismatch.into());
        }

        #[test]
        fn test_out_of_order_withdrawal_rejected() {
            let mut pool = uniform_pool();

            // Position 50 cannot exit while the cursor is at 100
            let result = pool.settle(&Pool::synthetic_account(50));
            assert_eq!(result.unwrap_err(), ErrorCode::PositionOwnerMismatch.into());

            // The pool is untouched by the failed attempt
            assert_eq!(pool.get_withdraw_position().unwrap(), 100);
            assert_eq!(pool.withheld, 0);
        }

        #[test]
        fn test_open_pool_rejects_withdrawal() {
            let alice = Pubkey::new_unique();
            let mut pool = empty_pool();
            pool.lock_position(alice, MIN_DEPOSIT).unwrap();

            let result = pool.settle(&alice);
            assert_eq!(result.unwrap_err(), ErrorCode::PoolNotSealed.into());
        }
    }

    // ========================================================================
    // 5. REWARD TABLE TESTS
    // ========================================================================

    mod reward_table_tests {
        use super::*;

        fn empty_table() -> RewardTable {
            RewardTable {
                bump: 0,
                positions: vec![PositionRewards::default(); POOL_CAPACITY],
            }
        }

        fn empty_log() -> RewardLog {
            RewardLog {
                user: Pubkey::default(),
                bump: 0,
                logs: [0u32; POOL_CAPACITY],
                balances: vec![],
            }
        }

        #[test]
        fn test_set_reward_and_overwrite() {
            let mut table = empty_table();

            table
                .set_reward(1, vec![RewardPart { token_id: 1, amount: 1 }])
                .unwrap();
            assert_eq!(table.get_reward(1).unwrap()[0].token_id, 1);

            table
                .set_reward(
                    2,
                    vec![
                        RewardPart { token_id: 2, amount: 2 },
                        RewardPart { token_id: 3, amount: 3 },
                    ],
                )
                .unwrap();
            assert_eq!(table.get_reward(2).unwrap().len(), 2);

            // Rewriting position 1 replaces the previous parts
            table
                .set_reward(1, vec![RewardPart { token_id: 2, amount: 2 }])
                .unwrap();
            let parts = table.get_reward(1).unwrap();
            assert_eq!(parts.len(), 1);
            assert_eq!(parts[0].token_id, 2);
            assert_eq!(parts[0].amount, 2);
        }

        #[test]
        fn test_set_reward_bounds() {
            let mut table = empty_table();

            assert!(table.set_reward(0, vec![]).is_err());
            assert!(table.set_reward(101, vec![]).is_err());

            let too_many = vec![RewardPart { token_id: 1, amount: 1 }; MAX_REWARD_PARTS + 1];
            let result = table.set_reward(1, too_many);
            assert_eq!(result.unwrap_err(), ErrorCode::TooManyRewardParts.into());
        }

        #[test]
        fn test_log_counts_per_position() {
            let mut log = empty_log();

            assert_eq!(log.log(100).unwrap(), 1);
            assert_eq!(log.log(100).unwrap(), 2);
            assert_eq!(log.get_log(100).unwrap(), 2);
            assert_eq!(log.get_log(99).unwrap(), 0);
            assert!(log.log(0).is_err());
        }

        #[test]
        fn test_claim_with_empty_table_clears_without_accruing() {
            let table = empty_table();
            let mut log = empty_log();
            log.log(1).unwrap();

            let cleared = log.claim(&table).unwrap();
            assert_eq!(cleared, 1);
            assert_eq!(log.get_log(1).unwrap(), 0);
            assert!(log.balances.is_empty());
        }

        #[test]
        fn test_claim_folds_logs_through_table() {
            let mut table = empty_table();
            table
                .set_reward(1, vec![RewardPart { token_id: 1, amount: 100 }])
                .unwrap();

            let mut log = empty_log();
            log.log(1).unwrap();

            let cleared = log.claim(&table).unwrap();
            assert_eq!(cleared, 1);
            assert_eq!(log.get_log(1).unwrap(), 0);
            assert_eq!(log.balance_of(1), 100);

            // A second claim with nothing logged accrues nothing further
            assert_eq!(log.claim(&table).unwrap(), 0);
            assert_eq!(log.balance_of(1), 100);
        }

        #[test]
        fn test_claim_multiplies_by_log_count() {
            let mut table = empty_table();
            table
                .set_reward(7, vec![RewardPart { token_id: 4, amount: 2 }])
                .unwrap();

            let mut log = empty_log();
            log.log(7).unwrap();
            log.log(7).unwrap();
            log.log(7).unwrap();

            log.claim(&table).unwrap();
            assert_eq!(log.balance_of(4), 6);
        }

        #[test]
        fn test_claim_aggregates_same_token_across_positions() {
            let mut table = empty_table();
            table
                .set_reward(1, vec![RewardPart { token_id: 1, amount: 5 }])
                .unwrap();
            table
                .set_reward(2, vec![RewardPart { token_id: 1, amount: 7 }])
                .unwrap();

            let mut log = empty_log();
            log.log(1).unwrap();
            log.log(2).unwrap();

            log.claim(&table).unwrap();
            assert_eq!(log.balance_of(1), 12);
            assert_eq!(log.balances.len(), 1);
        }

        #[test]
        fn test_take_balance_drains_once() {
            let mut table = empty_table();
            table
                .set_reward(1, vec![RewardPart { token_id: 1, amount: 100 }])
                .unwrap();

            let mut log = empty_log();
            log.log(1).unwrap();
            log.claim(&table).unwrap();

            assert_eq!(log.take_balance(1).unwrap(), 100);
            assert_eq!(log.balance_of(1), 0);

            let result = log.take_balance(1);
            assert_eq!(result.unwrap_err(), ErrorCode::NothingToRedeem.into());
        }

        #[test]
        fn test_distinct_token_limit() {
            let mut table = empty_table();
            // 5 positions x 4 parts = 20 distinct token ids, over the cap
            let mut next_id = 0u64;
            for position in 1..=5u8 {
                let parts: Vec<RewardPart> = (0..MAX_REWARD_PARTS)
                    .map(|_| {
                        next_id += 1;
                        RewardPart { token_id: next_id, amount: 1 }
                    })
                    .collect();
                table.set_reward(position, parts).unwrap();
            }

            let mut log = empty_log();
            for position in 1..=5u8 {
                log.log(position).unwrap();
            }

            let result = log.claim(&table);
            assert_eq!(result.unwrap_err(), ErrorCode::RewardTokenLimit.into());
        }
    }
}
