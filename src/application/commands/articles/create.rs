// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleShowDto, AuthenticatedActor},
        error::{ApplicationError, ApplicationResult},
        ports::images::ImageUpload,
    },
    domain::{
        actor::{Operation, policy},
        article::{ArticleDraft, NewArticle},
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub snippet: String,
    pub content: String,
    pub category: String,
    pub premium: bool,
    pub published: bool,
    pub image: Option<ImageUpload>,
}

fn ensure_can_create(actor: &AuthenticatedActor) -> ApplicationResult<()> {
    if policy::allows(Some(actor.role), Operation::CreateArticle) {
        Ok(())
    } else {
        Err(ApplicationError::unauthorized(
            "You are not authenticated to create an article",
        ))
    }
}

impl ArticleCommandService {
    /// Authorization and validation both run before any write; a rejected
    /// request leaves no row behind.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedActor,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleShowDto> {
        ensure_can_create(actor)?;

        let draft = ArticleDraft {
            title: command.title,
            snippet: command.snippet,
            content: command.content,
            category: command.category,
        };
        draft.validate()?;

        let now = self.clock.now();
        let new_article = NewArticle {
            title: draft.title,
            snippet: draft.snippet,
            content: draft.content,
            category: draft.category,
            premium: command.premium,
            published: command.published,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = i64::from(created.id), "article created");

        let image = match command.image {
            Some(upload) => Some(self.image_store.attach(created.id, upload).await?),
            None => None,
        };

        Ok(ArticleShowDto::project(created, image))
    }
}
