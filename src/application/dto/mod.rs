pub mod articles;
pub mod auth;
pub mod serde_time;

pub use articles::{ArticleIndexDto, ArticleShowDto, ImageDto};
pub use auth::{AuthTokenDto, AuthenticatedActor, TokenSubject};
