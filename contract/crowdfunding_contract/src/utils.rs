use soroban_sdk::Env;

use crate::storage_types::{CrowdfundingError, MAX_CAMPAIGN_DURATION};

/// Get current timestamp
pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Check if timestamp is in the past
pub fn is_past(now: u64, timestamp: u64) -> bool {
    now > timestamp
}

/// Pledge amounts must be strictly positive
pub fn validate_amount(amount: i128) -> Result<(), CrowdfundingError> {
    if amount <= 0 {
        return Err(CrowdfundingError::ZeroAmount);
    }
    Ok(())
}

pub fn validate_goal(goal: i128) -> Result<(), CrowdfundingError> {
    if goal <= 0 {
        return Err(CrowdfundingError::InvalidGoal);
    }
    Ok(())
}

pub fn validate_deadline(now: u64, deadline: u64) -> Result<(), CrowdfundingError> {
    if deadline <= now || deadline - now > MAX_CAMPAIGN_DURATION {
        return Err(CrowdfundingError::InvalidDeadline);
    }
    Ok(())
}
