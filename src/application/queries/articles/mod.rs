mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list::ListPublishedArticlesQuery;
pub use service::ArticleQueryService;
