use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::BoxError;

/// An opaque handle to a running broker consumer.
///
/// Polling, offset commits, and rebalancing happen behind this handle; this
/// core only creates it at start and stops it at shutdown.
#[async_trait]
pub trait BrokerConsumer
where
    Self: Debug + Send + Sync,
{
    /// Stops the consumer and releases broker resources.
    async fn stop(&self) -> Result<(), BoxError>;
}

/// Capability to construct broker consumers.
#[async_trait]
pub trait ConsumerBuilder
where
    Self: Debug + Send + Sync,
{
    /// Builds a broker consumer for the given spec.
    async fn build(&self, spec: ConsumerSpec) -> Result<Box<dyn BrokerConsumer>, BoxError>;
}

/// Capability to observe partition assignment changes.
///
/// Carried through to the consumer builder unmodified.
pub trait RebalanceListener: Debug + Send + Sync {}

/// An opaque dependency resolved ahead of handler execution.
pub trait Dependency: Debug + Send + Sync {}

/// Limits for batched delivery, interpreted by the broker runtime.
///
/// The runtime flushes whatever has accumulated when the timeout fires, which
/// may be an empty batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchLimits {
    /// Maximum time to wait before flushing an accumulated batch.
    pub batch_timeout_ms: u64,
    /// Maximum records per batch; unbounded when absent.
    pub max_records: Option<usize>,
}

/// Pass-through construction parameters handed to the consumer builder.
///
/// Nothing here is interpreted by this core. Topics and pattern may both be
/// present; the builder decides precedence.
#[derive(Clone, Debug)]
pub struct ConsumerSpec {
    /// Topics to subscribe to, in registration order.
    pub topics: Vec<String>,
    /// Topic pattern, used by the builder instead of the topic list when set.
    pub pattern: Option<String>,
    /// Consumer group identifier.
    pub group_id: Option<String>,
    /// Whether offsets are committed manually.
    pub is_manual: bool,
    /// Whether deliveries are processed without acknowledgment.
    pub no_ack: bool,
    /// Whether failed deliveries are retried by the middleware chain.
    pub retry: bool,
    /// Partition rebalance listener, if any.
    pub listener: Option<Arc<dyn RebalanceListener>>,
    /// Batch delivery limits; `None` for single-record delivery.
    pub batch: Option<BatchLimits>,
}
