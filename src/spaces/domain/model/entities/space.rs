use chrono::{DateTime, Utc};

use crate::spaces::domain::model::value_objects::{space_id::SpaceId, space_key::SpaceKey};

#[derive(Clone, Debug, PartialEq)]
pub struct Space {
    id: SpaceId,
    key: SpaceKey,
    name: String,
    space_type: String,
    status: String,
    description: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl Space {
    pub fn restore(
        id: SpaceId,
        key: SpaceKey,
        name: String,
        space_type: String,
        status: String,
        description: Option<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            key,
            name,
            space_type,
            status,
            description,
            created_at,
        }
    }

    pub fn id(&self) -> &SpaceId {
        &self.id
    }

    pub fn key(&self) -> &SpaceKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn space_type(&self) -> &str {
        &self.space_type
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
