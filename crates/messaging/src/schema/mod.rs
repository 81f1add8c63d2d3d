mod error;
mod payloads;

pub use error::SchemaError;
pub use payloads::{NamedPayload, OneOfResolver, PayloadResolver};

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Location of the correlation id within a consumed message.
pub const CORRELATION_ID_LOCATION: &str = "$message.header#/correlation_id";

/// Insertion-ordered map of channel display name to description.
///
/// Iteration order is topic registration order.
pub type Channels = IndexMap<String, ChannelDescription>;

/// Correlation strategy of a described channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct CorrelationId {
    /// Runtime expression pointing at the correlating header field.
    pub location: String,
}

/// The message envelope of a subscribe operation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MessageObject {
    /// Display title of the message.
    pub title: String,
    /// Merged payload schema of all registered handlers.
    pub payload: Value,
    /// Correlation strategy; always header-based for this core.
    #[serde(rename = "correlationId")]
    pub correlation_id: CorrelationId,
}

/// The subscribe operation of a described channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OperationObject {
    /// The message envelope delivered by the operation.
    pub message: MessageObject,
}

/// Broker-specific addressing metadata of a described channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct ChannelBinding {
    /// The topic the channel is bound to.
    pub topic: String,
}

/// Structured metadata describing one subscription channel.
///
/// Consumed by an external documentation renderer; this core only produces
/// the data.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelDescription {
    /// Description text, if any.
    pub description: Option<String>,
    /// The subscribe operation.
    pub operation: OperationObject,
    /// The broker binding.
    pub binding: ChannelBinding,
}

/// Documentation state composed into a subscriber.
///
/// Holds the explicit title, description text, and payload resolver, and
/// derives one [`ChannelDescription`] per topic on demand.
#[derive(Clone, Debug)]
pub struct ChannelDocs {
    title: Option<String>,
    description: Option<String>,
    include_in_schema: bool,
    resolver: Arc<dyn PayloadResolver>,
}

impl ChannelDocs {
    /// Creates documentation state with the default `oneOf` payload resolver.
    #[must_use]
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        include_in_schema: bool,
    ) -> Self {
        Self {
            title,
            description,
            include_in_schema,
            resolver: Arc::new(OneOfResolver),
        }
    }

    /// Replaces the payload resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn PayloadResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// The explicit title, if one was set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether the owning subscriber appears in generated documentation.
    #[must_use]
    pub const fn include_in_schema(&self) -> bool {
        self.include_in_schema
    }

    /// Derives one channel description per topic.
    ///
    /// The display name is the explicit title when set, otherwise
    /// `"<topic>:<call_name>"`. An explicit title shared by two different
    /// topics is rejected rather than silently overwriting the earlier
    /// topic's entry.
    pub fn describe(
        &self,
        topics: &[String],
        call_name: &str,
        payloads: &[NamedPayload],
    ) -> Result<Channels, SchemaError> {
        let payload = self
            .resolver
            .resolve(payloads)
            .map_err(SchemaError::Payload)?;

        let mut channels = Channels::new();

        for topic in topics {
            let display_name = self
                .title
                .clone()
                .unwrap_or_else(|| format!("{topic}:{call_name}"));

            if let Some(existing) = channels.get(&display_name) {
                if existing.binding.topic == *topic {
                    continue;
                }
                return Err(SchemaError::TitleCollision {
                    title: display_name,
                    topics: vec![existing.binding.topic.clone(), topic.clone()],
                });
            }

            channels.insert(
                display_name.clone(),
                ChannelDescription {
                    description: self.description.clone(),
                    operation: OperationObject {
                        message: MessageObject {
                            title: format!("{display_name}:Message"),
                            payload: payload.clone(),
                            correlation_id: CorrelationId {
                                location: CORRELATION_ID_LOCATION.to_owned(),
                            },
                        },
                    },
                    binding: ChannelBinding {
                        topic: topic.clone(),
                    },
                },
            );
        }

        Ok(channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn payload(name: &str, schema: Value) -> NamedPayload {
        NamedPayload {
            schema,
            name: name.to_owned(),
        }
    }

    fn topics(names: &[&str]) -> Vec<String> {
        names.iter().map(|&n| n.to_owned()).collect()
    }

    #[test]
    fn synthesizes_one_channel_per_topic() {
        let docs = ChannelDocs::new(None, None, true);
        let payloads = vec![payload("handler", json!({"amount": "number"}))];

        let channels = docs
            .describe(&topics(&["orders", "refunds"]), "handler", &payloads)
            .unwrap();

        assert_eq!(channels.len(), 2);
        assert_eq!(
            channels.keys().collect::<Vec<_>>(),
            vec!["orders:handler", "refunds:handler"]
        );
        assert_eq!(channels["orders:handler"].binding.topic, "orders");
        assert_eq!(channels["refunds:handler"].binding.topic, "refunds");
        assert_eq!(
            channels["orders:handler"].operation.message.payload,
            channels["refunds:handler"].operation.message.payload,
        );
    }

    #[test]
    fn explicit_title_names_the_channel() {
        let docs = ChannelDocs::new(Some("billing".to_owned()), None, true);

        let channels = docs.describe(&topics(&["orders"]), "handler", &[]).unwrap();

        assert_eq!(channels.keys().collect::<Vec<_>>(), vec!["billing"]);
        assert_eq!(
            channels["billing"].operation.message.title,
            "billing:Message"
        );
    }

    #[test]
    fn correlation_id_location_is_fixed() {
        let docs = ChannelDocs::new(None, Some("orders feed".to_owned()), true);

        let channels = docs.describe(&topics(&["orders"]), "handler", &[]).unwrap();

        let channel = &channels["orders:handler"];
        assert_eq!(
            channel.operation.message.correlation_id.location,
            "$message.header#/correlation_id"
        );
        assert_eq!(channel.description.as_deref(), Some("orders feed"));
    }

    #[test]
    fn shared_title_across_topics_is_rejected() {
        let docs = ChannelDocs::new(Some("shared".to_owned()), None, true);

        let err = docs
            .describe(&topics(&["orders", "refunds"]), "handler", &[])
            .unwrap_err();

        match err {
            SchemaError::TitleCollision { title, topics } => {
                assert_eq!(title, "shared");
                assert_eq!(topics, vec!["orders".to_owned(), "refunds".to_owned()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_topic_produces_one_entry() {
        let docs = ChannelDocs::new(None, None, true);

        let channels = docs
            .describe(&topics(&["orders", "orders"]), "handler", &[])
            .unwrap();

        assert_eq!(channels.len(), 1);
        assert_eq!(channels["orders:handler"].binding.topic, "orders");
    }

    #[test]
    fn serializes_to_renderer_contract() {
        let docs = ChannelDocs::new(None, None, true);
        let payloads = vec![payload("handler", json!({"amount": "number"}))];

        let channels = docs.describe(&topics(&["orders"]), "handler", &payloads).unwrap();

        assert_eq!(
            serde_json::to_value(&channels["orders:handler"]).unwrap(),
            json!({
                "description": null,
                "operation": {
                    "message": {
                        "title": "orders:handler:Message",
                        "payload": {"amount": "number"},
                        "correlationId": {
                            "location": "$message.header#/correlation_id"
                        }
                    }
                },
                "binding": {"topic": "orders"}
            })
        );
    }

    #[test]
    fn one_of_resolver_merges_by_handler_name() {
        let resolver = OneOfResolver;

        assert_eq!(resolver.resolve(&[]).unwrap(), json!({}));
        assert_eq!(
            resolver
                .resolve(&[payload("a", json!({"x": "string"}))])
                .unwrap(),
            json!({"x": "string"})
        );
        assert_eq!(
            resolver
                .resolve(&[
                    payload("a", json!({"x": "string"})),
                    payload("b", json!({"y": "number"})),
                ])
                .unwrap(),
            json!({"oneOf": {"a": {"x": "string"}, "b": {"y": "number"}}})
        );
    }
}
