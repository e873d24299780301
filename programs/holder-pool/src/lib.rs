use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self as token_interface, Mint, TokenAccount, TokenInterface},
};

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

#[cfg(test)]
mod tests;

use constants::*;
use errors::ErrorCode;
use events::*;
use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod holder_pool {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        let ledger = &mut ctx.accounts.ledger_state;
        let clock = Clock::get()?;

        ledger.admin = ctx.accounts.admin.key();
        ledger.pool_mint = ctx.accounts.pool_mint.key();
        ledger.current_pool_id = 0;
        ledger.min_deposit = MIN_DEPOSIT;
        ledger.total_locked_lifetime = 0;
        ledger.total_paid_lifetime = 0;
        ledger.pools_sealed = 0;
        ledger.initialized_at = clock.unix_timestamp;
        ledger.custody_bump = ctx.bumps.custody_authority;
        ledger.bump = ctx.bumps.ledger_state;

        emit!(LedgerInitialized {
            admin: ledger.admin,
            custody_authority: ctx.accounts.custody_authority.key(),
            pool_mint: ledger.pool_mint,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Lock `amount` of the pool token for `beneficiary`. Funds are
    /// pulled from the depositor before the position is recorded, so a
    /// failed transfer leaves no trace in the ledger.
    pub fn lock(ctx: Context<Lock>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;

        require!(
            amount >= ctx.accounts.ledger_state.min_deposit,
            ErrorCode::InsufficientDeposit
        );

        token_interface::transfer_checked(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                token_interface::TransferChecked {
                    from: ctx.accounts.depositor_token_account.to_account_info(),
                    mint: ctx.accounts.pool_mint.to_account_info(),
                    to: ctx.accounts.custody_vault.to_account_info(),
                    authority: ctx.accounts.depositor.to_account_info(),
                },
            ),
            amount,
            ctx.accounts.pool_mint.decimals,
        )?;

        let ledger = &mut ctx.accounts.ledger_state;
        let pool = &mut ctx.accounts.pool;
        pool.id = ledger.current_pool_id;
        pool.bump = ctx.bumps.pool;

        let beneficiary = ctx.accounts.beneficiary.key();
        let (position, sealed) = pool.lock_position(beneficiary, amount)?;

        ledger.total_locked_lifetime = ledger.total_locked_lifetime.saturating_add(amount);

        emit!(Locked {
            pool_id: pool.id,
            position,
            account: beneficiary,
            amount,
            timestamp: clock.unix_timestamp,
        });

        if sealed {
            ledger.pools_sealed = ledger.pools_sealed.saturating_add(1);
            ledger.current_pool_id = ledger
                .current_pool_id
                .checked_add(1)
                .ok_or(ErrorCode::MathOverflow)?;

            msg!("Pool {} sealed with {} locked", pool.id, pool.total_locked);
            emit!(PoolSealed {
                pool_id: pool.id,
                total_locked: pool.total_locked,
                timestamp: clock.unix_timestamp,
            });
        }

        Ok(())
    }

    /// Devnet fixture: fill the open pool to capacity with synthetic
    /// positions of `min_deposit` each, without any token transfers.
    /// Custody must be funded out of band before draining such a pool.
    pub fn fast_lock(ctx: Context<FastLock>) -> Result<()> {
        require!(cfg!(feature = "testing"), ErrorCode::UnauthorizedAccess);

        let clock = Clock::get()?;
        let ledger = &mut ctx.accounts.ledger_state;
        let pool = &mut ctx.accounts.pool;
        pool.id = ledger.current_pool_id;
        pool.bump = ctx.bumps.pool;

        let min_deposit = ledger.min_deposit;
        let mut filled = 0u64;
        while !pool.is_whole() {
            let index = (pool.pool_length() + 1) as u8;
            pool.lock_position(Pool::synthetic_account(index), min_deposit)?;
            filled = filled.saturating_add(min_deposit);
        }

        ledger.total_locked_lifetime = ledger.total_locked_lifetime.saturating_add(filled);
        ledger.pools_sealed = ledger.pools_sealed.saturating_add(1);
        ledger.current_pool_id = ledger
            .current_pool_id
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        msg!("Pool {} fast-locked with {} locked", pool.id, pool.total_locked);
        emit!(PoolSealed {
            pool_id: pool.id,
            total_locked: pool.total_locked,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Settle the caller's own position at the withdrawal cursor.
    pub fn withdraw(ctx: Context<Withdraw>, pool_id: u64) -> Result<()> {
        require!(ctx.accounts.pool.id == pool_id, ErrorCode::InvalidPool);

        let beneficiary = ctx.accounts.beneficiary.key();
        let log = &mut ctx.accounts.reward_log;
        if log.user == Pubkey::default() {
            log.user = beneficiary;
            log.bump = ctx.bumps.reward_log;
        }

        process_withdrawal(
            &mut ctx.accounts.ledger_state,
            &mut ctx.accounts.pool,
            &mut ctx.accounts.reward_log,
            beneficiary,
            &ctx.accounts.custody_authority,
            &ctx.accounts.custody_vault,
            &ctx.accounts.beneficiary_token_account,
            &ctx.accounts.pool_mint,
            &ctx.accounts.token_program,
        )
    }

    /// Settle the position at the cursor on behalf of `beneficiary`.
    /// Anyone may pay the transaction; the reward always lands with the
    /// position owner.
    pub fn withdraw_to(ctx: Context<WithdrawTo>, pool_id: u64) -> Result<()> {
        require!(ctx.accounts.pool.id == pool_id, ErrorCode::InvalidPool);

        let beneficiary = ctx.accounts.beneficiary.key();
        let log = &mut ctx.accounts.reward_log;
        if log.user == Pubkey::default() {
            log.user = beneficiary;
            log.bump = ctx.bumps.reward_log;
        }

        process_withdrawal(
            &mut ctx.accounts.ledger_state,
            &mut ctx.accounts.pool,
            &mut ctx.accounts.reward_log,
            beneficiary,
            &ctx.accounts.custody_authority,
            &ctx.accounts.custody_vault,
            &ctx.accounts.beneficiary_token_account,
            &ctx.accounts.pool_mint,
            &ctx.accounts.token_program,
        )
    }

    /// On-chain read of the reward the account would realize right now.
    pub fn count_reward(ctx: Context<QueryPool>, pool_id: u64, account: Pubkey) -> Result<u64> {
        require!(ctx.accounts.pool.id == pool_id, ErrorCode::InvalidPool);
        ctx.accounts.pool.preview_reward(&account)
    }

    /// On-chain read of the withdrawal cursor.
    pub fn get_pool_withdraw_position(ctx: Context<QueryPool>, pool_id: u64) -> Result<u8> {
        require!(ctx.accounts.pool.id == pool_id, ErrorCode::InvalidPool);
        ctx.accounts.pool.get_withdraw_position()
    }

    pub fn update_parameters(
        ctx: Context<AdminControl>,
        new_min_deposit: Option<u64>,
    ) -> Result<()> {
        let ledger = &mut ctx.accounts.ledger_state;
        if let Some(v) = new_min_deposit {
            ledger.min_deposit = v;
        }

        emit!(ParametersUpdated {
            min_deposit: ledger.min_deposit,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>) -> Result<()> {
        let ledger = &mut ctx.accounts.ledger_state;
        let old_admin = ledger.admin;
        ledger.admin = ctx.accounts.new_admin.key();

        emit!(AdminTransferred {
            old_admin,
            new_admin: ledger.admin,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn initialize_reward_table(ctx: Context<InitializeRewardTable>) -> Result<()> {
        let table = &mut ctx.accounts.reward_table;
        table.bump = ctx.bumps.reward_table;
        table.positions = vec![PositionRewards::default(); POOL_CAPACITY];
        Ok(())
    }

    /// Configure (or overwrite) the reward parts for one withdraw
    /// position.
    pub fn set_reward(
        ctx: Context<ConfigureRewards>,
        position: u8,
        parts: Vec<RewardPart>,
    ) -> Result<()> {
        ctx.accounts.reward_table.set_reward(position, parts)?;
        msg!("Reward set for position {}", position);
        Ok(())
    }

    /// Batch variant of `set_reward`.
    pub fn set_rewards(
        ctx: Context<ConfigureRewards>,
        positions: Vec<u8>,
        tables: Vec<PositionRewards>,
    ) -> Result<()> {
        require!(positions.len() == tables.len(), ErrorCode::LengthMismatch);

        let table = &mut ctx.accounts.reward_table;
        for (position, entry) in positions.iter().zip(tables.into_iter()) {
            table.set_reward(*position, entry.rewards)?;
        }

        Ok(())
    }

    /// Bind a reward token id to an SPL mint controlled by the custody
    /// PDA.
    pub fn register_reward_mint(ctx: Context<RegisterRewardMint>, token_id: u64) -> Result<()> {
        require!(
            ctx.accounts.mint.mint_authority
                == COption::Some(ctx.accounts.custody_authority.key()),
            ErrorCode::RewardMintMismatch
        );

        let entry = &mut ctx.accounts.reward_mint;
        entry.token_id = token_id;
        entry.mint = ctx.accounts.mint.key();
        entry.bump = ctx.bumps.reward_mint;

        emit!(RewardMintRegistered {
            token_id,
            mint: entry.mint,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    /// Fold the caller's logged withdrawals through the current reward
    /// table into accrued balances and clear the logs.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        let cleared = ctx
            .accounts
            .reward_log
            .claim(&ctx.accounts.reward_table)?;

        emit!(Claimed {
            account: ctx.accounts.user.key(),
            positions_cleared: cleared,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    /// Mint out the caller's accrued balance for one reward token id.
    pub fn redeem(ctx: Context<Redeem>, token_id: u64) -> Result<()> {
        let amount = ctx.accounts.reward_log.take_balance(token_id)?;

        let seeds: &[&[u8]] = &[
            CUSTODY_AUTHORITY_SEED,
            &[ctx.accounts.ledger_state.custody_bump],
        ];
        token_interface::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                token_interface::MintTo {
                    mint: ctx.accounts.mint.to_account_info(),
                    to: ctx.accounts.user_token_account.to_account_info(),
                    authority: ctx.accounts.custody_authority.to_account_info(),
                },
                &[seeds],
            ),
            amount,
        )?;

        emit!(Redeemed {
            account: ctx.accounts.user.key(),
            token_id,
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

// HELPERS

/// Shared settlement path for withdraw / withdraw_to (extracted to reduce
/// stack usage)
#[inline(never)]
fn process_withdrawal<'info>(
    ledger: &mut Account<'info, LedgerState>,
    pool: &mut Account<'info, Pool>,
    reward_log: &mut Account<'info, RewardLog>,
    beneficiary: Pubkey,
    custody_authority: &AccountInfo<'info>,
    custody_vault: &InterfaceAccount<'info, TokenAccount>,
    recipient_token_account: &InterfaceAccount<'info, TokenAccount>,
    pool_mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<()> {
    let clock = Clock::get()?;
    let settlement = pool.settle(&beneficiary)?;

    let seeds: &[&[u8]] = &[CUSTODY_AUTHORITY_SEED, &[ledger.custody_bump]];
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            token_interface::TransferChecked {
                from: custody_vault.to_account_info(),
                mint: pool_mint.to_account_info(),
                to: recipient_token_account.to_account_info(),
                authority: custody_authority.to_account_info(),
            },
            &[seeds],
        ),
        settlement.payout,
        pool_mint.decimals,
    )?;

    ledger.total_paid_lifetime = ledger.total_paid_lifetime.saturating_add(settlement.payout);

    emit!(Withdrawn {
        pool_id: pool.id,
        position: settlement.position,
        account: beneficiary,
        amount: settlement.payout,
    });
    if settlement.withheld > 0 {
        emit!(Withheld {
            amount: settlement.withheld,
        });
    }
    if settlement.bonus > 0 {
        emit!(Bonus {
            position: settlement.position,
            amount: settlement.bonus,
        });
    }

    let count = reward_log.log(settlement.position)?;
    emit!(RewardLogged {
        account: beneficiary,
        position: settlement.position,
        count,
        timestamp: clock.unix_timestamp,
    });

    if pool.withdraw_position == 0 {
        msg!("Pool {} drained", pool.id);
    }

    Ok(())
}

// ACCOUNTS

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(init, payer = admin, space = 8 + LedgerState::LEN, seeds = [LEDGER_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,
    /// CHECK: PDA, custody over locked tokens and reward mints
    #[account(seeds = [CUSTODY_AUTHORITY_SEED], bump)]
    pub custody_authority: AccountInfo<'info>,
    pub pool_mint: InterfaceAccount<'info, Mint>,
    #[account(
        init,
        payer = admin,
        associated_token::mint = pool_mint,
        associated_token::authority = custody_authority,
        associated_token::token_program = token_program,
    )]
    pub custody_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Lock<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,
    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + Pool::LEN,
        seeds = [POOL_SEED, &ledger_state.current_pool_id.to_le_bytes()],
        bump
    )]
    pub pool: Account<'info, Pool>,
    #[account(mut)]
    pub depositor: Signer<'info>,
    /// CHECK: position owner; may differ from the paying depositor
    pub beneficiary: AccountInfo<'info>,
    #[account(
        mut,
        constraint = depositor_token_account.mint == ledger_state.pool_mint @ ErrorCode::MintMismatch
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        associated_token::mint = pool_mint,
        associated_token::authority = custody_authority,
        associated_token::token_program = token_program,
    )]
    pub custody_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(address = ledger_state.pool_mint @ ErrorCode::MintMismatch)]
    pub pool_mint: InterfaceAccount<'info, Mint>,
    /// CHECK: PDA
    #[account(seeds = [CUSTODY_AUTHORITY_SEED], bump = ledger_state.custody_bump)]
    pub custody_authority: AccountInfo<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct FastLock<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + Pool::LEN,
        seeds = [POOL_SEED, &ledger_state.current_pool_id.to_le_bytes()],
        bump
    )]
    pub pool: Account<'info, Pool>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,
    #[account(mut, seeds = [POOL_SEED, &pool_id.to_le_bytes()], bump = pool.bump)]
    pub pool: Account<'info, Pool>,
    #[account(mut)]
    pub beneficiary: Signer<'info>,
    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::mint = pool_mint,
        associated_token::authority = beneficiary,
        associated_token::token_program = token_program,
    )]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        associated_token::mint = pool_mint,
        associated_token::authority = custody_authority,
        associated_token::token_program = token_program,
    )]
    pub custody_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(address = ledger_state.pool_mint @ ErrorCode::MintMismatch)]
    pub pool_mint: InterfaceAccount<'info, Mint>,
    /// CHECK: PDA
    #[account(seeds = [CUSTODY_AUTHORITY_SEED], bump = ledger_state.custody_bump)]
    pub custody_authority: AccountInfo<'info>,
    #[account(
        init_if_needed,
        payer = beneficiary,
        space = 8 + RewardLog::LEN,
        seeds = [REWARD_LOG_SEED, beneficiary.key().as_ref()],
        bump
    )]
    pub reward_log: Account<'info, RewardLog>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct WithdrawTo<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,
    #[account(mut, seeds = [POOL_SEED, &pool_id.to_le_bytes()], bump = pool.bump)]
    pub pool: Account<'info, Pool>,
    #[account(mut)]
    pub payer: Signer<'info>,
    /// CHECK: position owner the reward is settled for
    pub beneficiary: AccountInfo<'info>,
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = pool_mint,
        associated_token::authority = beneficiary,
        associated_token::token_program = token_program,
    )]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        associated_token::mint = pool_mint,
        associated_token::authority = custody_authority,
        associated_token::token_program = token_program,
    )]
    pub custody_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(address = ledger_state.pool_mint @ ErrorCode::MintMismatch)]
    pub pool_mint: InterfaceAccount<'info, Mint>,
    /// CHECK: PDA
    #[account(seeds = [CUSTODY_AUTHORITY_SEED], bump = ledger_state.custody_bump)]
    pub custody_authority: AccountInfo<'info>,
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + RewardLog::LEN,
        seeds = [REWARD_LOG_SEED, beneficiary.key().as_ref()],
        bump
    )]
    pub reward_log: Account<'info, RewardLog>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct QueryPool<'info> {
    #[account(seeds = [POOL_SEED, &pool_id.to_le_bytes()], bump = pool.bump)]
    pub pool: Account<'info, Pool>,
}

#[derive(Accounts)]
pub struct AdminControl<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger_state.bump,
        constraint = admin.key() == ledger_state.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub ledger_state: Account<'info, LedgerState>,
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger_state.bump,
        constraint = admin.key() == ledger_state.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub ledger_state: Account<'info, LedgerState>,
    pub admin: Signer<'info>,
    /// CHECK: New admin
    pub new_admin: AccountInfo<'info>,
}

#[derive(Accounts)]
pub struct InitializeRewardTable<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger_state.bump,
        constraint = admin.key() == ledger_state.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub ledger_state: Account<'info, LedgerState>,
    #[account(init, payer = admin, space = 8 + RewardTable::LEN, seeds = [REWARD_TABLE_SEED], bump)]
    pub reward_table: Account<'info, RewardTable>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ConfigureRewards<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger_state.bump,
        constraint = admin.key() == ledger_state.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub ledger_state: Account<'info, LedgerState>,
    #[account(mut, seeds = [REWARD_TABLE_SEED], bump = reward_table.bump)]
    pub reward_table: Account<'info, RewardTable>,
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct RegisterRewardMint<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger_state.bump,
        constraint = admin.key() == ledger_state.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub ledger_state: Account<'info, LedgerState>,
    #[account(
        init,
        payer = admin,
        space = 8 + RewardMint::LEN,
        seeds = [REWARD_MINT_SEED, &token_id.to_le_bytes()],
        bump
    )]
    pub reward_mint: Account<'info, RewardMint>,
    pub mint: InterfaceAccount<'info, Mint>,
    /// CHECK: PDA
    #[account(seeds = [CUSTODY_AUTHORITY_SEED], bump = ledger_state.custody_bump)]
    pub custody_authority: AccountInfo<'info>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [REWARD_LOG_SEED, user.key().as_ref()], bump = reward_log.bump)]
    pub reward_log: Account<'info, RewardLog>,
    #[account(seeds = [REWARD_TABLE_SEED], bump = reward_table.bump)]
    pub reward_table: Account<'info, RewardTable>,
    pub user: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct Redeem<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,
    #[account(mut, seeds = [REWARD_LOG_SEED, user.key().as_ref()], bump = reward_log.bump)]
    pub reward_log: Account<'info, RewardLog>,
    #[account(seeds = [REWARD_MINT_SEED, &token_id.to_le_bytes()], bump = reward_mint.bump)]
    pub reward_mint: Account<'info, RewardMint>,
    #[account(mut, address = reward_mint.mint @ ErrorCode::RewardMintMismatch)]
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,
    /// CHECK: PDA
    #[account(seeds = [CUSTODY_AUTHORITY_SEED], bump = ledger_state.custody_bump)]
    pub custody_authority: AccountInfo<'info>,
    #[account(mut)]
    pub user: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
