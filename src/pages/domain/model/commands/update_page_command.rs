use crate::pages::domain::model::{
    enums::pages_domain_error::PagesDomainError,
    value_objects::{page_id::PageId, page_title::PageTitle},
};

#[derive(Clone, Debug)]
pub struct UpdatePageCommand {
    page_id: PageId,
    title: Option<PageTitle>,
    body: Option<String>,
    version_message: Option<String>,
}

impl UpdatePageCommand {
    pub fn new(
        page_id: String,
        title: Option<String>,
        body: Option<String>,
        version_message: Option<String>,
    ) -> Result<Self, PagesDomainError> {
        if title.is_none() && body.is_none() {
            return Err(PagesDomainError::MissingPageChanges);
        }

        Ok(Self {
            page_id: PageId::new(page_id)?,
            title: title.map(PageTitle::new).transpose()?,
            body,
            version_message: version_message.filter(|message| !message.trim().is_empty()),
        })
    }

    pub fn page_id(&self) -> &PageId {
        &self.page_id
    }

    pub fn title(&self) -> Option<&PageTitle> {
        self.title.as_ref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn version_message(&self) -> Option<&str> {
        self.version_message.as_deref()
    }
}
