//! User profile - author and notification recipient lookups

use uuid::Uuid;

use crate::value_objects::Role;

/// User profile, resolved separately from posts and comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserProfile {
    pub fn new(id: Uuid, name: String, email: String, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            role,
        }
    }

    /// Name shown next to reactions, falling back to the email when unnamed
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.can_moderate()
    }
}
