#![no_std]

mod asset;
mod events;
mod ledger;
mod storage;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env};

pub use asset::{Asset, TokenAsset};
pub use events::*;
pub use storage_types::{Campaign, CampaignInfo, CampaignStatus, CrowdfundingError};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Set up the campaign at deployment. `owner` is the beneficiary allowed
    /// to withdraw.
    pub fn __constructor(env: Env, owner: Address, token: Address, goal: i128, deadline: u64) {
        if let Err(err) = utils::validate_goal(goal) {
            panic_with_error!(&env, err);
        }
        if let Err(err) = utils::validate_deadline(utils::get_current_timestamp(&env), deadline) {
            panic_with_error!(&env, err);
        }

        let campaign = Campaign {
            owner: owner.clone(),
            token: token.clone(),
            goal,
            deadline,
        };
        storage::write_campaign(&env, &campaign);
        storage::write_total_pledged(&env, 0);
        storage::extend_instance(&env);
        log!(&env, "campaign initialized", goal, deadline);

        events::emit_campaign_initialized(
            &env,
            events::CampaignInitializedEvent {
                owner,
                token,
                goal,
                deadline,
            },
        );
    }

    /// Pledge `amount` of the campaign token from `backer`. Returns the new total.
    pub fn pledge(env: Env, backer: Address, amount: i128) -> Result<i128, CrowdfundingError> {
        backer.require_auth();
        let campaign = storage::read_campaign(&env)?;
        let now = utils::get_current_timestamp(&env);
        let asset = TokenAsset::new(&env, &campaign.token);

        let total = ledger::pledge(&env, &asset, &campaign, now, &backer, amount)?;
        storage::extend_instance(&env);
        Ok(total)
    }

    /// Refund the caller's whole pledge after a failed campaign.
    pub fn refund(env: Env, backer: Address) -> Result<i128, CrowdfundingError> {
        backer.require_auth();
        let campaign = storage::read_campaign(&env)?;
        let now = utils::get_current_timestamp(&env);
        let asset = TokenAsset::new(&env, &campaign.token);

        let amount = ledger::refund(&env, &asset, &campaign, now, &backer)?;
        storage::extend_instance(&env);
        Ok(amount)
    }

    /// Transfer everything the campaign holds to the owner.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, CrowdfundingError> {
        caller.require_auth();
        let campaign = storage::read_campaign(&env)?;
        let asset = TokenAsset::new(&env, &campaign.token);

        let amount = ledger::withdraw(&env, &asset, &campaign, &caller)?;
        storage::extend_instance(&env);
        Ok(amount)
    }

    /// View functions
    pub fn token(env: Env) -> Result<Address, CrowdfundingError> {
        Ok(storage::read_campaign(&env)?.token)
    }

    pub fn goal(env: Env) -> Result<i128, CrowdfundingError> {
        Ok(storage::read_campaign(&env)?.goal)
    }

    pub fn deadline(env: Env) -> Result<u64, CrowdfundingError> {
        Ok(storage::read_campaign(&env)?.deadline)
    }

    pub fn owner(env: Env) -> Result<Address, CrowdfundingError> {
        Ok(storage::read_campaign(&env)?.owner)
    }

    pub fn pledge_of(env: Env, backer: Address) -> i128 {
        storage::read_pledge(&env, &backer)
    }

    pub fn total_pledged(env: Env) -> i128 {
        storage::read_total_pledged(&env)
    }

    pub fn goal_reached(env: Env) -> bool {
        storage::read_goal_reached(&env)
    }

    pub fn funds_withdrawn(env: Env) -> bool {
        storage::read_funds_withdrawn(&env)
    }

    /// Token balance held in custody by the campaign.
    pub fn balance(env: Env) -> Result<i128, CrowdfundingError> {
        let campaign = storage::read_campaign(&env)?;
        Ok(TokenAsset::new(&env, &campaign.token).custody_balance())
    }

    pub fn get_campaign(env: Env) -> Result<CampaignInfo, CrowdfundingError> {
        let campaign = storage::read_campaign(&env)?;
        let now = utils::get_current_timestamp(&env);
        let status = ledger::status(&env, &campaign, now);

        Ok(CampaignInfo {
            owner: campaign.owner,
            token: campaign.token,
            goal: campaign.goal,
            deadline: campaign.deadline,
            total_pledged: storage::read_total_pledged(&env),
            goal_reached: storage::read_goal_reached(&env),
            funds_withdrawn: storage::read_funds_withdrawn(&env),
            status,
        })
    }
}
