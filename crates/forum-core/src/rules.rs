//! Content rules shared by posts and comments

use crate::error::DomainError;

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Trim and check comment or post body text
pub fn ensure_content(content: &str) -> Result<String, DomainError> {
    ensure_text("Content", content, MAX_CONTENT_LENGTH)
}

/// Trim and check a post title
pub fn ensure_title(title: &str) -> Result<String, DomainError> {
    ensure_text("Title", title, MAX_TITLE_LENGTH)
}

fn ensure_text(field: &'static str, value: &str, max: usize) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyContent(field));
    }
    if trimmed.chars().count() > max {
        return Err(DomainError::ContentTooLong { max });
    }
    Ok(trimmed.to_string())
}
