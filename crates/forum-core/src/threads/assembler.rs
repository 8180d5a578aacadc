//! Thread assembler - groups a flat comment list into parent + replies

use std::collections::{HashMap, HashSet};

use tracing::debug;
use uuid::Uuid;

use crate::entities::Comment;

/// A top-level comment with its flattened replies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub parent: Comment,
    pub replies: Vec<Comment>,
}

/// Group comments of one post into threads.
///
/// Top-level comments keep their input order, as do the replies under each.
/// A reply of a reply is placed under its top-level ancestor. Replies whose
/// ancestry never reaches a top-level comment in the input (unknown parent or
/// a parent loop) are left out.
pub fn assemble(comments: Vec<Comment>) -> Vec<Thread> {
    let parent_of: HashMap<Uuid, Option<Uuid>> =
        comments.iter().map(|c| (c.id, c.parent_id)).collect();

    let mut threads: Vec<Thread> = Vec::new();
    let mut slots: HashMap<Uuid, usize> = HashMap::new();
    let mut children = Vec::new();

    for comment in comments {
        if comment.parent_id.is_none() {
            slots.insert(comment.id, threads.len());
            threads.push(Thread {
                parent: comment,
                replies: Vec::new(),
            });
        } else {
            children.push(comment);
        }
    }

    for child in children {
        let slot = top_level_ancestor(&child, &parent_of).and_then(|root| slots.get(&root));
        match slot {
            Some(&index) => threads[index].replies.push(child),
            None => debug!(
                comment_id = %child.id,
                parent_id = ?child.parent_id,
                "Dropping reply without a top-level ancestor"
            ),
        }
    }

    threads
}

fn top_level_ancestor(child: &Comment, parent_of: &HashMap<Uuid, Option<Uuid>>) -> Option<Uuid> {
    let mut seen = HashSet::from([child.id]);
    let mut current = child.parent_id?;

    loop {
        if !seen.insert(current) {
            return None;
        }
        match parent_of.get(&current)? {
            None => return Some(current),
            Some(next) => current = *next,
        }
    }
}
