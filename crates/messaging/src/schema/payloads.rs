use std::fmt::Debug;

use serde_json::Value;

use crate::BoxError;

/// A payload schema declared by a registered handler.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedPayload {
    /// JSON schema of the payload.
    pub schema: Value,
    /// Name of the declaring handler.
    pub name: String,
}

/// Capability to merge per-handler payload schemas into one schema object.
pub trait PayloadResolver: Debug + Send + Sync {
    /// Merges the given payloads, in registration order, into a single
    /// schema object.
    fn resolve(&self, payloads: &[NamedPayload]) -> Result<Value, BoxError>;
}

/// Resolver merging distinct payloads under a `oneOf` keyed by handler name.
///
/// A single payload is passed through untouched; no payloads resolve to an
/// empty object.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneOfResolver;

impl PayloadResolver for OneOfResolver {
    fn resolve(&self, payloads: &[NamedPayload]) -> Result<Value, BoxError> {
        match payloads {
            [] => Ok(Value::Object(serde_json::Map::new())),
            [only] => Ok(only.schema.clone()),
            many => {
                let mut variants = serde_json::Map::new();
                for payload in many {
                    variants.insert(payload.name.clone(), payload.schema.clone());
                }
                Ok(serde_json::json!({ "oneOf": variants }))
            }
        }
    }
}
