pub mod draft;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use draft::ArticleDraft;
pub use entity::{Article, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::ArticleId;
