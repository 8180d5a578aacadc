//! Value objects - immutable types that represent domain concepts

mod reaction_list;
mod role;

pub use reaction_list::{ReactionEntry, ReactionList, ReactionStatus, ReactionSummary};
pub use role::{Role, RoleParseError};
