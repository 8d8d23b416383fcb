use serde::Serialize;

use crate::shared::domain::model::paged_result::PagedResult;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResource<T> {
    pub results: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl<T> PagedResource<T> {
    pub fn from_paged<D>(paged: &PagedResult<D>, map: impl Fn(&D) -> T) -> Self {
        Self {
            results: paged.items().iter().map(map).collect(),
            next_cursor: paged.next_cursor().map(str::to_string),
        }
    }
}
