use serde_json::{Map, Value};

use crate::shared::{
    domain::{
        model::enums::validation_error::ValidationError,
        validation::identifier_validator::{received_type_name, validate_identifier},
    },
    interfaces::handlers::handler_error::HandlerError,
};

pub const MAX_LIMIT: u64 = 250;

/// JSON object of arguments passed to an operation handler. `null` is read
/// as an empty object.
#[derive(Clone, Debug, Default)]
pub struct HandlerArguments(Map<String, Value>);

impl HandlerArguments {
    pub fn parse(arguments: Value) -> Result<Self, HandlerError> {
        match arguments {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self(map)),
            other => Err(HandlerError::InvalidArgument(format!(
                "arguments must be an object, received {}",
                received_type_name(Some(&other))
            ))),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn identifier(&self, name: &str, label: &'static str) -> Result<String, HandlerError> {
        Ok(validate_identifier(label, self.get(name))?.to_string())
    }

    pub fn optional_identifier(
        &self,
        name: &str,
        label: &'static str,
    ) -> Result<Option<String>, HandlerError> {
        match self.get(name) {
            None | Some(Value::Null) => Ok(None),
            value => Ok(Some(validate_identifier(label, value)?.to_string())),
        }
    }

    pub fn optional_text(&self, name: &str) -> Result<Option<String>, HandlerError> {
        match self.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            other => Err(ValidationError::TypeMismatch {
                received: received_type_name(other),
            }
            .into()),
        }
    }

    pub fn limit(&self) -> Result<Option<u32>, HandlerError> {
        match self.unsigned("limit")? {
            Some(limit) if limit == 0 || limit > MAX_LIMIT => Err(HandlerError::InvalidArgument(
                format!("limit must be between 1 and {MAX_LIMIT}"),
            )),
            Some(limit) => Ok(Some(limit as u32)),
            None => Ok(None),
        }
    }

    pub fn start(&self) -> Result<Option<u32>, HandlerError> {
        match self.unsigned("start")? {
            Some(start) => u32::try_from(start)
                .map(Some)
                .map_err(|_| HandlerError::InvalidArgument("start is too large".to_string())),
            None => Ok(None),
        }
    }

    fn unsigned(&self, name: &str) -> Result<Option<u64>, HandlerError> {
        match self.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_u64().map(Some).ok_or_else(|| {
                HandlerError::InvalidArgument(format!("{name} must be a non-negative integer"))
            }),
        }
    }
}
