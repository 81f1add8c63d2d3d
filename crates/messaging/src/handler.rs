use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;

use crate::BoxError;

/// A trait representing a handler attached to a subscriber.
///
/// `M` is the delivery shape: a single record for default subscribers, an
/// ordered record batch for batch subscribers. The declared payload schema is
/// collected by the documentation layer in registration order.
#[async_trait]
pub trait SubscriptionHandler<M>
where
    Self: Debug + Send + Sync,
    M: Clone + Debug + Send + Sync + 'static,
{
    /// The name of the handler, used to synthesize channel display names.
    fn name(&self) -> &str;

    /// The JSON schema of the payload this handler accepts.
    fn payload_schema(&self) -> Value;

    /// Handles one delivery.
    async fn handle(&self, delivery: M) -> Result<(), BoxError>;
}
