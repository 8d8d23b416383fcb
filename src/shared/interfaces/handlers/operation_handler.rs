use std::{collections::BTreeMap, future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

use crate::shared::interfaces::handlers::handler_error::HandlerError;

pub type HandlerResult = Result<Value, HandlerError>;

pub type HandlerFuture = Pin<Box<dyn Future<Output = HandlerResult> + Send>>;

/// A domain operation ready to be invoked with its JSON arguments.
pub type OperationHandler = Arc<dyn Fn(Value) -> HandlerFuture + Send + Sync>;

pub type OperationHandlers = BTreeMap<&'static str, OperationHandler>;

/// Binds `operation` to a shared handler instance so the resulting closure
/// owns its own reference to the dependency graph.
pub fn operation_handler<H, F, Fut>(handler: &Arc<H>, operation: F) -> OperationHandler
where
    H: Send + Sync + 'static,
    F: Fn(Arc<H>, Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    let handler = Arc::clone(handler);
    Arc::new(move |arguments| Box::pin(operation(Arc::clone(&handler), arguments)))
}
