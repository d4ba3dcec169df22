//! Account repository and service traits.
//!
//! These traits define the contract for account and session operations
//! without tying callers to the concrete store.

use super::accounts_model::{Account, AccountSettings, NewAccount, Streak};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations own the session state: only the id of the signed-in
/// account is kept, and reads always resolve it against the account
/// collection.
pub trait AccountRepositoryTrait: Send + Sync {
    fn find_account_by_id(&self, account_id: &str) -> Result<Option<Account>>;

    /// Returns true if any account is registered under this exact email.
    fn account_exists(&self, email: &str) -> Result<bool>;

    fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Registers an account with no tasks, goals or earned achievements.
    ///
    /// Fails with `AlreadyExists` if the email (or id) is taken.
    fn create_account(&self, account: Account) -> Result<Account>;

    /// Replaces the editable fields of an existing account.
    ///
    /// Returns `None`, without touching anything, when the id is unknown.
    /// Fails with `AlreadyExists` if the new email belongs to another account.
    fn update_account(&self, account: Account) -> Result<Option<Account>>;

    /// Looks for an account whose email and credential both match exactly
    /// (case-sensitive). On a match the session switches to that account.
    /// On a mismatch the session is left as it was.
    fn authenticate(&self, email: &str, credential: &str) -> Result<Option<Account>>;

    /// The signed-in account, resolved from the account collection.
    fn current_account(&self) -> Result<Option<Account>>;

    fn sign_out(&self) -> Result<()>;
}

/// Trait defining the contract for Account service operations.
pub trait AccountServiceTrait: Send + Sync {
    /// Validates the sign-up form and registers the account.
    fn sign_up(&self, new_account: NewAccount) -> Result<Account>;

    /// Authenticates and maps a mismatch to `Error::InvalidCredential`.
    fn sign_in(&self, email: &str, credential: &str) -> Result<Account>;

    fn current_account(&self) -> Result<Option<Account>>;

    fn sign_out(&self) -> Result<()>;

    /// Retrieves an account or fails with `NotFound`.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    fn update_settings(&self, account_id: &str, settings: AccountSettings) -> Result<Account>;

    /// Closes out a day: extends the streak when every task was done,
    /// otherwise resets it.
    fn record_day(&self, account_id: &str, all_done: bool) -> Result<Streak>;
}
