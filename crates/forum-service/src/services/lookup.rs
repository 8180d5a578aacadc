//! Batch author resolution shared by the post and comment services

use std::collections::{HashMap, HashSet};

use forum_core::entities::UserProfile;
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Resolve every distinct author id in one repository call.
/// Ids without a profile are simply absent from the map.
pub(super) async fn load_authors(
    ctx: &ServiceContext,
    ids: impl IntoIterator<Item = Uuid>,
) -> ServiceResult<HashMap<Uuid, UserProfile>> {
    let unique: Vec<Uuid> = ids.into_iter().collect::<HashSet<_>>().into_iter().collect();
    if unique.is_empty() {
        return Ok(HashMap::new());
    }

    let profiles = ctx.profile_repo().find_by_ids(&unique).await?;
    Ok(profiles.into_iter().map(|p| (p.id, p)).collect())
}
