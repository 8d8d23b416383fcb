use crate::spaces::domain::model::{
    enums::spaces_domain_error::SpacesDomainError, value_objects::space_key::SpaceKey,
};

#[derive(Clone, Debug)]
pub struct GetSpaceByKeyQuery {
    space_key: SpaceKey,
}

impl GetSpaceByKeyQuery {
    pub fn new(space_key: String) -> Result<Self, SpacesDomainError> {
        Ok(Self {
            space_key: SpaceKey::new(space_key)?,
        })
    }

    pub fn space_key(&self) -> &SpaceKey {
        &self.space_key
    }
}
