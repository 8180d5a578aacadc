//! Permission service
//!
//! Resolves the acting member and checks authorship and moderation rights.

use forum_core::entities::UserProfile;
use forum_core::DomainError;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Permission service for access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the profile of the acting user
    #[instrument(skip(self))]
    pub async fn require_profile(&self, user_id: Uuid) -> ServiceResult<UserProfile> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        Ok(profile)
    }

    /// Only the author may edit
    pub fn require_author(&self, author_id: Uuid, actor_id: Uuid) -> ServiceResult<()> {
        if author_id != actor_id {
            debug!(author_id = %author_id, actor_id = %actor_id, "Edit by non-author rejected");
            return Err(DomainError::NotAuthor.into());
        }
        Ok(())
    }

    /// The author or an admin may delete
    pub fn require_author_or_admin(
        &self,
        author_id: Uuid,
        actor: &UserProfile,
    ) -> ServiceResult<()> {
        if author_id == actor.id || actor.is_admin() {
            return Ok(());
        }
        debug!(author_id = %author_id, actor_id = %actor.id, "Delete by non-author rejected");
        Err(DomainError::MissingPermission("MODERATE_CONTENT".to_string()).into())
    }
}
