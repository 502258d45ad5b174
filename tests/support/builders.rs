// tests/support/builders.rs
use chrono::Utc;
use newsdesk_core::domain::article::NewArticle;
use serde_json::{Value, json};

/// Request payload builder for `POST /api/v1/admin`.
pub struct ArticlePayloadBuilder {
    title: String,
    snippet: String,
    content: String,
    category: String,
    image: bool,
}

impl ArticlePayloadBuilder {
    pub fn new() -> Self {
        Self {
            title: "No more room in space".into(),
            snippet: "Its all gone, sorry".into(),
            content: "Govenor says this aint good".into(),
            category: "tech".into(),
            image: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn without_image(mut self) -> Self {
        self.image = false;
        self
    }

    pub fn build(self) -> Value {
        let mut article = json!({
            "title": self.title,
            "snippet": self.snippet,
            "content": self.content,
            "category": self.category,
        });
        if self.image {
            article["image"] = json!({
                "type": "application/jpg",
                "encoder": "name=new_image.jpg:base64",
                "data": "GHJKFNKSJHFUDHFdnfkdjfjkshuhFNLNKLFDFJLkjksldjflkgdmsk248273rendlksfn",
                "extension": "jpg",
            });
        }
        json!({ "article": article })
    }
}

impl Default for ArticlePayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Row builder for seeding the store directly in read-path tests.
pub struct NewArticleBuilder {
    title: String,
    snippet: String,
    content: String,
    category: String,
    premium: bool,
    published: bool,
}

impl NewArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            snippet: "Test snippet".into(),
            content: "Test content".into(),
            category: "tech".into(),
            premium: false,
            published: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn premium(mut self) -> Self {
        self.premium = true;
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn build(self) -> NewArticle {
        let now = Utc::now();
        NewArticle {
            title: self.title,
            snippet: self.snippet,
            content: self.content,
            category: self.category,
            premium: self.premium,
            published: self.published,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for NewArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
