use serde::Serialize;

use crate::pages::domain::model::entities::page::Page;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResource {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<&Page> for PageResource {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id().value().to_string(),
            title: page.title().to_string(),
            space_id: page.space_id().map(str::to_string),
            parent_id: page.parent_id().map(str::to_string),
            status: page.status().to_string(),
            version: page.version(),
            body: page.body().map(str::to_string),
            created_at: page.created_at().map(|created_at| created_at.to_rfc3339()),
        }
    }
}
