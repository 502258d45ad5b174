pub mod attachments;
pub mod database;
pub mod repositories;
pub mod security;
pub mod time;
