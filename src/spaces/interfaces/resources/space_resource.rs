use serde::Serialize;

use crate::spaces::domain::model::entities::space::Space;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceResource {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub space_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<&Space> for SpaceResource {
    fn from(space: &Space) -> Self {
        Self {
            id: space.id().value().to_string(),
            key: space.key().value().to_string(),
            name: space.name().to_string(),
            space_type: space.space_type().to_string(),
            status: space.status().to_string(),
            description: space.description().map(str::to_string),
            created_at: space.created_at().map(|created_at| created_at.to_rfc3339()),
        }
    }
}
