// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{images::ImageStore, time::Clock},
    domain::article::ArticleWriteRepository,
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) image_store: Arc<dyn ImageStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        image_store: Arc<dyn ImageStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            image_store,
            clock,
        }
    }
}
