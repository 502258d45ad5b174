// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::images::ImageStore, domain::article::ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) image_store: Arc<dyn ImageStore>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, image_store: Arc<dyn ImageStore>) -> Self {
        Self {
            read_repo,
            image_store,
        }
    }
}
