use log::debug;
use std::sync::Arc;

use super::accounts_model::{Account, AccountSettings, NewAccount, Streak};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::{Error, NotFoundError, Result};

/// Service for sign-up, sign-in and account bookkeeping
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn modify<F>(&self, account_id: &str, change: F) -> Result<Account>
    where
        F: FnOnce(&mut Account),
    {
        let mut account = self.get_account(account_id)?;
        change(&mut account);
        self.repository
            .update_account(account)?
            .ok_or_else(|| NotFoundError::Account(account_id.to_string()).into())
    }
}

impl AccountServiceTrait for AccountService {
    fn sign_up(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        let account = new_account.into_account();
        debug!("Signing up account {}", account.id);
        self.repository.create_account(account)
    }

    fn sign_in(&self, email: &str, credential: &str) -> Result<Account> {
        self.repository
            .authenticate(email, credential)?
            .ok_or(Error::InvalidCredential)
    }

    fn current_account(&self) -> Result<Option<Account>> {
        self.repository.current_account()
    }

    fn sign_out(&self) -> Result<()> {
        self.repository.sign_out()
    }

    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository
            .find_account_by_id(account_id)?
            .ok_or_else(|| NotFoundError::Account(account_id.to_string()).into())
    }

    fn update_settings(&self, account_id: &str, settings: AccountSettings) -> Result<Account> {
        self.modify(account_id, |account| account.settings = settings)
    }

    fn record_day(&self, account_id: &str, all_done: bool) -> Result<Streak> {
        let account = self.modify(account_id, |account| {
            if all_done {
                account.streak.extend();
            } else {
                account.streak.reset();
            }
        })?;
        Ok(account.streak)
    }
}
