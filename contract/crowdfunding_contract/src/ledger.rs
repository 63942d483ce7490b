//! Pledge bookkeeping for a single campaign.
//!
//! Every operation validates first, then moves funds through the [`Asset`],
//! and only then writes storage, so a rejected call leaves no trace.

use soroban_sdk::{log, Address, Env};

use crate::asset::Asset;
use crate::events;
use crate::storage;
use crate::storage_types::{Campaign, CampaignStatus, CrowdfundingError};
use crate::utils::{is_past, validate_amount};

/// Accept `amount` from `backer`. Returns the new pledged total.
pub fn pledge<A: Asset>(
    env: &Env,
    asset: &A,
    campaign: &Campaign,
    now: u64,
    backer: &Address,
    amount: i128,
) -> Result<i128, CrowdfundingError> {
    validate_amount(amount)?;
    if is_past(now, campaign.deadline) {
        return Err(CrowdfundingError::DeadlinePassed);
    }
    if storage::read_goal_reached(env) {
        return Err(CrowdfundingError::GoalAlreadyReached);
    }

    let total = storage::read_total_pledged(env)
        .checked_add(amount)
        .ok_or(CrowdfundingError::ArithmeticError)?;
    let pledged = storage::read_pledge(env, backer)
        .checked_add(amount)
        .ok_or(CrowdfundingError::ArithmeticError)?;

    asset.transfer_in(backer, amount)?;

    storage::write_pledge(env, backer, pledged);
    storage::write_total_pledged(env, total);
    log!(env, "pledge accepted", backer.clone(), amount, total);

    events::emit_pledge_accepted(
        env,
        events::PledgeAcceptedEvent {
            backer: backer.clone(),
            amount,
        },
    );

    if total >= campaign.goal {
        storage::latch_goal_reached(env);
        log!(env, "goal reached", total);
        events::emit_goal_reached(env, events::GoalReachedEvent { total_pledged: total });
    }

    Ok(total)
}

/// Return the whole pledge of `backer` once the campaign has failed.
/// Returns the refunded amount.
pub fn refund<A: Asset>(
    env: &Env,
    asset: &A,
    campaign: &Campaign,
    now: u64,
    backer: &Address,
) -> Result<i128, CrowdfundingError> {
    if !is_past(now, campaign.deadline) {
        return Err(CrowdfundingError::DeadlineNotPassed);
    }
    if storage::read_goal_reached(env) {
        return Err(CrowdfundingError::GoalReached);
    }
    let amount = storage::read_pledge(env, backer);
    if amount <= 0 {
        return Err(CrowdfundingError::NoPledge);
    }
    let total = storage::read_total_pledged(env)
        .checked_sub(amount)
        .ok_or(CrowdfundingError::ArithmeticError)?;

    asset.transfer_out(backer, amount)?;

    storage::remove_pledge(env, backer);
    storage::write_total_pledged(env, total);
    log!(env, "pledge refunded", backer.clone(), amount);

    events::emit_refunded(
        env,
        events::RefundedEvent {
            backer: backer.clone(),
            amount,
        },
    );

    Ok(amount)
}

/// Pay the custody balance out to the owner. Gated on the goal only; the
/// deadline does not need to have passed.
pub fn withdraw<A: Asset>(
    env: &Env,
    asset: &A,
    campaign: &Campaign,
    caller: &Address,
) -> Result<i128, CrowdfundingError> {
    if *caller != campaign.owner {
        return Err(CrowdfundingError::NotOwner);
    }
    if !storage::read_goal_reached(env) {
        return Err(CrowdfundingError::GoalNotReached);
    }

    let amount = asset.custody_balance();
    if amount > 0 {
        asset.transfer_out(&campaign.owner, amount)?;
    }

    storage::latch_funds_withdrawn(env);
    storage::write_total_pledged(env, 0);
    log!(env, "funds withdrawn", amount);

    events::emit_withdrawn(env, events::WithdrawnEvent { amount });

    Ok(amount)
}

pub fn status(env: &Env, campaign: &Campaign, now: u64) -> CampaignStatus {
    if storage::read_funds_withdrawn(env) {
        CampaignStatus::Withdrawn
    } else if storage::read_goal_reached(env) {
        CampaignStatus::Succeeded
    } else if is_past(now, campaign.deadline) {
        CampaignStatus::Failed
    } else {
        CampaignStatus::Funding
    }
}
