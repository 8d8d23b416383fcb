use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct ContentSearchResult {
    id: String,
    content_type: String,
    title: String,
    excerpt: Option<String>,
    web_url: Option<String>,
    last_modified: Option<DateTime<Utc>>,
}

impl ContentSearchResult {
    pub fn restore(
        id: String,
        content_type: String,
        title: String,
        excerpt: Option<String>,
        web_url: Option<String>,
        last_modified: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            content_type,
            title,
            excerpt,
            web_url,
            last_modified,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    pub fn web_url(&self) -> Option<&str> {
        self.web_url.as_deref()
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }
}
