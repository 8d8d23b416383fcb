use chrono::{DateTime, Utc};

use crate::pages::domain::model::value_objects::page_id::PageId;

#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    id: PageId,
    title: String,
    space_id: Option<String>,
    parent_id: Option<String>,
    status: String,
    version: Option<u32>,
    body: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl Page {
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: PageId,
        title: String,
        space_id: Option<String>,
        parent_id: Option<String>,
        status: String,
        version: Option<u32>,
        body: Option<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title,
            space_id,
            parent_id,
            status,
            version,
            body,
            created_at,
        }
    }

    pub fn id(&self) -> &PageId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn space_id(&self) -> Option<&str> {
        self.space_id.as_deref()
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn version(&self) -> Option<u32> {
        self.version
    }

    /// Storage-format body, present only when the page was fetched with its body.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
