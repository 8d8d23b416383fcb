use crate::spaces::domain::model::{
    enums::spaces_domain_error::SpacesDomainError, value_objects::space_id::SpaceId,
};

#[derive(Clone, Debug)]
pub struct GetSpaceByIdQuery {
    space_id: SpaceId,
}

impl GetSpaceByIdQuery {
    pub fn new(space_id: String) -> Result<Self, SpacesDomainError> {
        Ok(Self {
            space_id: SpaceId::new(space_id)?,
        })
    }

    pub fn space_id(&self) -> &SpaceId {
        &self.space_id
    }
}
