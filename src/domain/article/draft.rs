// src/domain/article/draft.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Incoming article fields before persistence. Presence checks run in a
/// fixed order and only the first failing field is reported.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub snippet: String,
    pub content: String,
    pub category: String,
}

impl ArticleDraft {
    /// A field is blank when it is empty or whitespace-only.
    pub fn validate(&self) -> DomainResult<()> {
        let checks: [(&str, &str); 4] = [
            ("Title", self.title.as_str()),
            ("Snippet", self.snippet.as_str()),
            ("Content", self.content.as_str()),
            ("Category", self.category.as_str()),
        ];

        for (label, value) in checks {
            if value.trim().is_empty() {
                return Err(DomainError::Validation(format!("{label} can't be blank")));
            }
        }

        Ok(())
    }
}
