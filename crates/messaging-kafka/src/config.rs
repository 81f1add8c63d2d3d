use std::sync::Arc;

use rivulet_messaging::consumer::{ConsumerBuilder, Dependency, RebalanceListener};
use rivulet_messaging::schema::PayloadResolver;

/// Pass-through construction options for a subscriber.
///
/// Only the batch flag of the factory is interpreted by this crate;
/// everything here is carried to the consumer builder and the documentation
/// layer unmodified. Topics and pattern may both be supplied; the builder
/// decides precedence.
#[derive(Clone, Debug)]
pub struct SubscriberConfig {
    /// Builds the broker consumer at start time.
    pub builder: Arc<dyn ConsumerBuilder>,
    /// Consumer group identifier.
    pub group_id: Option<String>,
    /// Partition rebalance listener.
    pub listener: Option<Arc<dyn RebalanceListener>>,
    /// Topic pattern, used instead of the topic list when set.
    pub pattern: Option<String>,
    /// Whether offsets are committed manually.
    pub is_manual: bool,
    /// Whether deliveries are processed without acknowledgment.
    pub no_ack: bool,
    /// Whether failed deliveries are retried by the middleware chain.
    pub retry: bool,
    /// Dependencies resolved ahead of handler execution, in order.
    pub dependencies: Vec<Arc<dyn Dependency>>,
    /// Explicit channel display name for documentation.
    pub title: Option<String>,
    /// Channel description text for documentation.
    pub description: Option<String>,
    /// Whether the subscriber appears in generated documentation.
    pub include_in_schema: bool,
    /// Merges handler payload schemas for documentation; the `oneOf`
    /// resolver when absent.
    pub resolver: Option<Arc<dyn PayloadResolver>>,
}

impl SubscriberConfig {
    /// Creates options with the given consumer builder and defaults for
    /// everything else.
    #[must_use]
    pub fn new(builder: Arc<dyn ConsumerBuilder>) -> Self {
        Self {
            builder,
            group_id: None,
            listener: None,
            pattern: None,
            is_manual: false,
            no_ack: false,
            retry: false,
            dependencies: Vec::new(),
            title: None,
            description: None,
            include_in_schema: true,
            resolver: None,
        }
    }
}
