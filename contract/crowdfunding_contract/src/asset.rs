use soroban_sdk::{token, Address, Env};

use crate::storage_types::CrowdfundingError;

/// The ledger capability the campaign moves funds through.
///
/// Implementations must leave balances untouched when they return an error.
pub trait Asset {
    /// Pull `amount` from `from` into campaign custody.
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), CrowdfundingError>;

    /// Pay `amount` out of campaign custody to `to`.
    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), CrowdfundingError>;

    fn balance_of(&self, account: &Address) -> i128;

    /// Balance currently held by the campaign.
    fn custody_balance(&self) -> i128;
}

/// `Asset` backed by a Soroban token contract, with the calling contract as
/// the custody account.
pub struct TokenAsset<'a> {
    client: token::TokenClient<'a>,
    custody: Address,
}

impl<'a> TokenAsset<'a> {
    pub fn new(env: &Env, token_address: &Address) -> Self {
        TokenAsset {
            client: token::TokenClient::new(env, token_address),
            custody: env.current_contract_address(),
        }
    }

    fn transfer(&self, from: &Address, to: &Address, amount: i128) -> Result<(), CrowdfundingError> {
        match self.client.try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(CrowdfundingError::TransferFailed),
        }
    }
}

impl Asset for TokenAsset<'_> {
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), CrowdfundingError> {
        self.transfer(from, &self.custody, amount)
    }

    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), CrowdfundingError> {
        self.transfer(&self.custody, to, amount)
    }

    fn balance_of(&self, account: &Address) -> i128 {
        self.client.balance(account)
    }

    fn custody_balance(&self) -> i128 {
        self.balance_of(&self.custody)
    }
}
