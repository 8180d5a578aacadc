//! Post model → entity mapper

use forum_core::entities::Post;
use forum_core::value_objects::ReactionList;

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            content: model.content,
            is_edited: model.is_edited,
            reactions: ReactionList::decode_column(model.reactions.as_deref()),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
