use std::fmt::Debug;
use std::sync::Arc;

use rivulet_messaging::handler::SubscriptionHandler;
use rivulet_messaging::schema::NamedPayload;

/// Call name used before any handler is registered.
const DEFAULT_CALL_NAME: &str = "subscriber";

/// Ordered registry of the handlers attached to a subscriber.
///
/// Registration order is preserved; documentation queries read the declared
/// payload schemas in that order.
#[derive(Debug)]
pub struct HandlerRegistry<M>
where
    M: Clone + Debug + Send + Sync + 'static,
{
    handlers: Vec<Arc<dyn SubscriptionHandler<M>>>,
}

impl<M> Default for HandlerRegistry<M>
where
    M: Clone + Debug + Send + Sync + 'static,
{
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<M> HandlerRegistry<M>
where
    M: Clone + Debug + Send + Sync + 'static,
{
    /// Registers a handler.
    pub fn register(&mut self, handler: Arc<dyn SubscriptionHandler<M>>) {
        self.handlers.push(handler);
    }

    /// The registered handlers, in registration order.
    #[must_use]
    pub fn handlers(&self) -> &[Arc<dyn SubscriptionHandler<M>>] {
        &self.handlers
    }

    /// The declared payload schemas, in registration order.
    #[must_use]
    pub fn payloads(&self) -> Vec<NamedPayload> {
        self.handlers
            .iter()
            .map(|handler| NamedPayload {
                schema: handler.payload_schema(),
                name: handler.name().to_owned(),
            })
            .collect()
    }

    /// The name of the first registered handler, used in channel naming.
    #[must_use]
    pub fn call_name(&self) -> &str {
        self.handlers
            .first()
            .map_or(DEFAULT_CALL_NAME, |handler| handler.name())
    }

    /// Whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use rivulet_messaging::BoxError;
    use serde_json::{Value, json};

    use crate::record::ConsumerRecord;

    #[derive(Debug)]
    struct NamedOnly(&'static str, Value);

    #[async_trait]
    impl SubscriptionHandler<ConsumerRecord> for NamedOnly {
        fn name(&self) -> &str {
            self.0
        }

        fn payload_schema(&self) -> Value {
            self.1.clone()
        }

        async fn handle(&self, _delivery: ConsumerRecord) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[test]
    fn call_name_defaults_until_first_registration() {
        let mut registry = HandlerRegistry::<ConsumerRecord>::default();
        assert!(registry.is_empty());
        assert_eq!(registry.call_name(), "subscriber");

        registry.register(Arc::new(NamedOnly("first", json!({}))));
        registry.register(Arc::new(NamedOnly("second", json!({}))));

        assert_eq!(registry.call_name(), "first");
    }

    #[test]
    fn payloads_preserve_registration_order() {
        let mut registry = HandlerRegistry::<ConsumerRecord>::default();
        registry.register(Arc::new(NamedOnly("b", json!({"b": "number"}))));
        registry.register(Arc::new(NamedOnly("a", json!({"a": "string"}))));

        let payloads = registry.payloads();
        assert_eq!(
            payloads.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["b", "a"]
        );
        assert_eq!(payloads[0].schema, json!({"b": "number"}));
    }
}
