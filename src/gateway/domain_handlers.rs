use serde_json::Value;

use crate::shared::interfaces::handlers::{
    handler_error::HandlerError,
    operation_handler::{HandlerResult, OperationHandler, OperationHandlers},
};

pub const SPACES_DOMAIN: &str = "spaces";
pub const PAGES_DOMAIN: &str = "pages";
pub const SEARCH_DOMAIN: &str = "search";

/// Operation handlers grouped by domain. Each handler holds its own
/// reference to the client, repository and use-case graph it was built with.
#[derive(Clone)]
pub struct DomainHandlers {
    spaces: OperationHandlers,
    pages: OperationHandlers,
    search: OperationHandlers,
}

impl DomainHandlers {
    pub const DOMAINS: [&'static str; 3] = [SPACES_DOMAIN, PAGES_DOMAIN, SEARCH_DOMAIN];

    pub fn new(
        spaces: OperationHandlers,
        pages: OperationHandlers,
        search: OperationHandlers,
    ) -> Self {
        Self {
            spaces,
            pages,
            search,
        }
    }

    pub fn spaces(&self) -> &OperationHandlers {
        &self.spaces
    }

    pub fn pages(&self) -> &OperationHandlers {
        &self.pages
    }

    pub fn search(&self) -> &OperationHandlers {
        &self.search
    }

    pub fn domain(&self, name: &str) -> Option<&OperationHandlers> {
        match name {
            SPACES_DOMAIN => Some(&self.spaces),
            PAGES_DOMAIN => Some(&self.pages),
            SEARCH_DOMAIN => Some(&self.search),
            _ => None,
        }
    }

    pub fn operation(&self, domain: &str, operation: &str) -> Option<&OperationHandler> {
        self.domain(domain)?.get(operation)
    }

    pub fn operation_count(&self) -> usize {
        self.spaces.len() + self.pages.len() + self.search.len()
    }

    /// Domain names paired with their operation names, in declaration order
    /// of the domains and alphabetical order of the operations.
    pub fn catalog(&self) -> Vec<(&'static str, Vec<&'static str>)> {
        Self::DOMAINS
            .iter()
            .filter_map(|domain| {
                self.domain(domain)
                    .map(|operations| (*domain, operations.keys().copied().collect()))
            })
            .collect()
    }

    pub async fn invoke(&self, domain: &str, operation: &str, arguments: Value) -> HandlerResult {
        let handler = self.operation(domain, operation).ok_or_else(|| {
            HandlerError::UnknownOperation {
                domain: domain.to_string(),
                operation: operation.to_string(),
            }
        })?;

        handler(arguments).await
    }
}
