use soroban_sdk::{Address, Env};

use crate::storage_types::{
    Campaign, CrowdfundingError, DataKey, PersistentKey, DAY_IN_LEDGERS, TTL_INSTANCE,
    TTL_PERSISTENT,
};

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE - DAY_IN_LEDGERS, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT - DAY_IN_LEDGERS, TTL_PERSISTENT);
}

pub fn read_campaign(e: &Env) -> Result<Campaign, CrowdfundingError> {
    e.storage()
        .instance()
        .get(&DataKey::Campaign)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn write_campaign(e: &Env, campaign: &Campaign) {
    e.storage().instance().set(&DataKey::Campaign, campaign);
}

pub fn read_total_pledged(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalPledged)
        .unwrap_or(0)
}

pub fn write_total_pledged(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalPledged, &total);
}

pub fn read_goal_reached(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::GoalReached)
        .unwrap_or(false)
}

pub fn latch_goal_reached(e: &Env) {
    e.storage().instance().set(&DataKey::GoalReached, &true);
}

pub fn read_funds_withdrawn(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::FundsWithdrawn)
        .unwrap_or(false)
}

pub fn latch_funds_withdrawn(e: &Env) {
    e.storage().instance().set(&DataKey::FundsWithdrawn, &true);
}

/// Pledge records are never enumerated, so a withdrawal zeroes them all by
/// flipping `FundsWithdrawn` instead of touching each entry.
pub fn read_pledge(e: &Env, backer: &Address) -> i128 {
    if read_funds_withdrawn(e) {
        return 0;
    }
    e.storage()
        .persistent()
        .get(&PersistentKey::Pledge(backer.clone()))
        .unwrap_or(0)
}

pub fn write_pledge(e: &Env, backer: &Address, amount: i128) {
    let key = PersistentKey::Pledge(backer.clone());
    e.storage().persistent().set(&key, &amount);
    extend_persistent(e, &key);
}

pub fn remove_pledge(e: &Env, backer: &Address) {
    e.storage()
        .persistent()
        .remove(&PersistentKey::Pledge(backer.clone()));
}
