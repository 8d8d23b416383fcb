use serde::Serialize;

use crate::search::domain::model::entities::content_search_result::ContentSearchResult;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSearchResultResource {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl From<&ContentSearchResult> for ContentSearchResultResource {
    fn from(result: &ContentSearchResult) -> Self {
        Self {
            id: result.id().to_string(),
            content_type: result.content_type().to_string(),
            title: result.title().to_string(),
            excerpt: result.excerpt().map(str::to_string),
            url: result.web_url().map(str::to_string),
            last_modified: result.last_modified().map(|modified| modified.to_rfc3339()),
        }
    }
}
