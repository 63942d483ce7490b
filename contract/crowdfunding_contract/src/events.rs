use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignInitializedEvent {
    pub owner: Address,
    pub token: Address,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PledgeAcceptedEvent {
    pub backer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct GoalReachedEvent {
    pub total_pledged: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RefundedEvent {
    pub backer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawnEvent {
    pub amount: i128,
}

pub fn emit_campaign_initialized(env: &Env, event: CampaignInitializedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "initialized")),
        event,
    );
}

pub fn emit_pledge_accepted(env: &Env, event: PledgeAcceptedEvent) {
    env.events().publish(
        (Symbol::new(env, "pledge"), Symbol::new(env, "accepted")),
        event,
    );
}

pub fn emit_goal_reached(env: &Env, event: GoalReachedEvent) {
    env.events().publish(
        (Symbol::new(env, "pledge"), Symbol::new(env, "goal_reached")),
        event,
    );
}

pub fn emit_refunded(env: &Env, event: RefundedEvent) {
    env.events().publish(
        (Symbol::new(env, "pledge"), Symbol::new(env, "refunded")),
        event,
    );
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events().publish(
        (Symbol::new(env, "pledge"), Symbol::new(env, "withdrawn")),
        event,
    );
}
