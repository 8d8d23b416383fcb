use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DomainOperationsResource {
    pub domain: String,
    pub operations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OperationCatalogResource {
    pub domains: Vec<DomainOperationsResource>,
    pub operation_count: usize,
}
