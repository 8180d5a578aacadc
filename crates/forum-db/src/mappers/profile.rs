//! Profile model → entity mapper

use forum_core::entities::UserProfile;
use forum_core::value_objects::Role;
use tracing::warn;

use crate::models::ProfileModel;

/// Convert ProfileModel to UserProfile entity. Unknown roles fall back to member.
impl From<ProfileModel> for UserProfile {
    fn from(model: ProfileModel) -> Self {
        let role = model.role.parse::<Role>().unwrap_or_else(|e| {
            warn!(profile_id = %model.id, error = %e, "Unknown role, treating as member");
            Role::Member
        });

        UserProfile {
            id: model.id,
            name: model.name,
            email: model.email,
            role,
        }
    }
}
