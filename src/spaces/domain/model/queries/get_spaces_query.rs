#[derive(Clone, Debug, Default)]
pub struct GetSpacesQuery {
    limit: Option<u32>,
    cursor: Option<String>,
}

impl GetSpacesQuery {
    pub fn new(limit: Option<u32>, cursor: Option<String>) -> Self {
        Self { limit, cursor }
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}
