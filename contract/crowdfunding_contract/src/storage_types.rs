use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign,
    TotalPledged,
    GoalReached,
    FundsWithdrawn,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Pledge(Address),
}

/// Immutable campaign parameters, written once by `initialize`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub owner: Address,
    pub token: Address,
    pub goal: i128,
    pub deadline: u64, // Ledger timestamp, inclusive bound for pledging
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Funding,   // Accepting pledges
    Succeeded, // Goal reached, funds still held
    Failed,    // Deadline passed without reaching the goal, refunds open
    Withdrawn, // Funds paid out to the owner
}

/// Read-only snapshot returned by `get_campaign`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignInfo {
    pub owner: Address,
    pub token: Address,
    pub goal: i128,
    pub deadline: u64,
    pub total_pledged: i128,
    pub goal_reached: bool,
    pub funds_withdrawn: bool,
    pub status: CampaignStatus,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundingError {
    NotInitialized = 1,
    InvalidGoal = 2,
    InvalidDeadline = 3,
    ZeroAmount = 4,
    DeadlinePassed = 5,
    GoalAlreadyReached = 6,
    DeadlineNotPassed = 7,
    GoalReached = 8,
    NoPledge = 9,
    NotOwner = 10,
    GoalNotReached = 11,
    TransferFailed = 12,
    ArithmeticError = 13,
}

// Constants
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const TTL_INSTANCE: u32 = DAY_IN_LEDGERS * 90; // 90 days
pub const TTL_PERSISTENT: u32 = DAY_IN_LEDGERS * 90; // 90 days
// Entries written before the deadline stay live for at least 30 days after it
pub const MAX_CAMPAIGN_DURATION: u64 = 60 * 86400; // 60 days, in seconds
