//! Model → entity mappers
//!
//! Converts database rows into `forum-core` domain objects. Reaction columns
//! are decoded leniently: malformed values become an empty list.

mod comment;
mod notification;
mod post;
mod profile;
