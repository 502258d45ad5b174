// src/domain/actor/policy.rs
//
// Role -> operation access policy. All authorization decisions go through
// `allows` so the mapping lives in one place instead of being scattered
// across handlers.
use crate::domain::actor::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ReadPublished,
    CreateArticle,
}

/// `role` is `None` for anonymous callers.
pub fn allows(role: Option<Role>, operation: Operation) -> bool {
    match operation {
        Operation::ReadPublished => true,
        Operation::CreateArticle => matches!(role, Some(Role::Journalist)),
    }
}
