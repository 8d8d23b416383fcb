use crate::{
    pages::domain::model::{
        enums::pages_domain_error::PagesDomainError,
        value_objects::{page_id::PageId, page_title::PageTitle},
    },
    spaces::domain::model::value_objects::space_id::SpaceId,
};

#[derive(Clone, Debug)]
pub struct CreatePageCommand {
    space_id: SpaceId,
    title: PageTitle,
    body: String,
    parent_id: Option<PageId>,
}

impl CreatePageCommand {
    pub fn new(
        space_id: String,
        title: String,
        body: String,
        parent_id: Option<String>,
    ) -> Result<Self, PagesDomainError> {
        Ok(Self {
            space_id: SpaceId::new(space_id)?,
            title: PageTitle::new(title)?,
            body,
            parent_id: parent_id.map(PageId::new).transpose()?,
        })
    }

    pub fn space_id(&self) -> &SpaceId {
        &self.space_id
    }

    pub fn title(&self) -> &PageTitle {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn parent_id(&self) -> Option<&PageId> {
        self.parent_id.as_ref()
    }
}
