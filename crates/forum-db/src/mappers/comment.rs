//! Comment model → entity mapper

use forum_core::entities::Comment;
use forum_core::value_objects::ReactionList;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            post_id: model.post_id,
            parent_id: model.parent_id,
            author_id: model.author_id,
            content: model.content,
            is_edited: model.is_edited,
            reactions: ReactionList::decode_column(model.reactions.as_deref()),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
