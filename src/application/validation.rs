// src/application/validation.rs
//! Request-level checks run before any handler touches the repository.

use crate::application::error::{ApplicationResult, ValidationErrors};
use crate::domain::article::TITLE_MAX_CHARS;
use uuid::Uuid;

pub mod messages {
    pub const ARTICLE_ID_REQUIRED: &str = "Article identifier is required";
    pub const TITLE_REQUIRED: &str = "Title is required";
    pub const CONTENT_REQUIRED: &str = "Content is required";
    pub const AUTHOR_ID_REQUIRED: &str = "Author identifier is required";
    pub const TAG_NAME_REQUIRED: &str = "Tag name is required";
    pub const PAGE_NUMBER_MIN: &str = "Page number must be at least 1";
    pub const PAGE_SIZE_MIN: &str = "Page size must be at least 1";

    pub fn title_max_length(max: usize) -> String {
        format!("Title cannot exceed {max} characters")
    }
}

pub trait Validate {
    fn collect_errors(&self, errors: &mut ValidationErrors);

    fn validate(&self) -> ApplicationResult<()> {
        let mut errors = ValidationErrors::new();
        self.collect_errors(&mut errors);
        errors.into_result()
    }
}

pub fn require_id(errors: &mut ValidationErrors, field: &'static str, id: Uuid, message: &str) {
    errors.check(id.is_nil(), field, message);
}

pub fn require_text(errors: &mut ValidationErrors, field: &'static str, value: &str, message: &str) {
    errors.check(value.trim().is_empty(), field, message);
}

pub fn check_title(errors: &mut ValidationErrors, title: &str) {
    require_text(errors, "title", title, messages::TITLE_REQUIRED);
    errors.check(
        title.chars().count() > TITLE_MAX_CHARS,
        "title",
        messages::title_max_length(TITLE_MAX_CHARS),
    );
}
