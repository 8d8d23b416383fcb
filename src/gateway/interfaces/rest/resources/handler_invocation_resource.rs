use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct HandlerInvocationRequestResource {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub arguments: Value,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HandlerInvocationResponseResource {
    #[schema(value_type = Object)]
    pub data: Value,
}
