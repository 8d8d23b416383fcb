use crate::search::domain::model::{
    enums::search_domain_error::SearchDomainError, value_objects::cql_query::CqlQuery,
};

#[derive(Clone, Debug)]
pub struct SearchContentQuery {
    cql: CqlQuery,
    limit: Option<u32>,
    start: Option<u32>,
    cursor: Option<String>,
}

impl SearchContentQuery {
    /// Raw `cql` wins over free `text` when both are given.
    pub fn new(
        cql: Option<String>,
        text: Option<String>,
        limit: Option<u32>,
        start: Option<u32>,
        cursor: Option<String>,
    ) -> Result<Self, SearchDomainError> {
        let cql = match (cql, text) {
            (Some(cql), _) => CqlQuery::new(cql)?,
            (None, Some(text)) => CqlQuery::from_text(text)?,
            (None, None) => return Err(SearchDomainError::MissingSearchCriteria),
        };

        Ok(Self {
            cql,
            limit,
            start,
            cursor,
        })
    }

    pub fn cql(&self) -> &CqlQuery {
        &self.cql
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn start(&self) -> Option<u32> {
        self.start
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}
