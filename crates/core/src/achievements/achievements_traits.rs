use crate::achievements::{AchievementDefinition, AchievementRecord};
use crate::errors::Result;

/// Trait for achievement catalog and grant operations.
pub trait AchievementRepositoryTrait: Send + Sync {
    fn list_all_achievement_definitions(&self) -> Result<Vec<AchievementDefinition>>;

    fn find_achievement_definition(
        &self,
        definition_id: &str,
    ) -> Result<Option<AchievementDefinition>>;

    /// Adds a definition to the catalog. Fails if the id is already taken.
    fn create_achievement_definition(
        &self,
        definition: AchievementDefinition,
    ) -> Result<AchievementDefinition>;

    /// Resolves each earned record of the account to its definition, in
    /// earned order. Records whose definition no longer resolves are dropped.
    fn list_earned_achievements(&self, account_id: &str) -> Result<Vec<AchievementDefinition>>;

    /// Appends a new record, stamped with the current time, to the account.
    fn grant_achievement(&self, account_id: &str, definition_id: &str)
        -> Result<AchievementRecord>;
}
