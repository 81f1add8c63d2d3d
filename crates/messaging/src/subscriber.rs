use std::error::Error;
use std::fmt::Debug;

use async_trait::async_trait;

use crate::schema::{Channels, SchemaError};

/// Marker trait for subscriber errors
pub trait SubscriberError: Debug + Error + Send + Sync + 'static {}

/// A trait representing a registered subscriber of a set of topics.
///
/// Both delivery variants expose this surface so naming, topic introspection,
/// and documentation generation can treat them uniformly. Handler attachment
/// stays on the concrete types because its shape differs per variant.
#[async_trait]
pub trait Subscriber
where
    Self: Debug + Send + Sync + 'static,
{
    /// The error type for the subscriber.
    type Error: SubscriberError;

    /// Returns the subscribed topics, in registration order.
    fn topics(&self) -> &[String];

    /// Returns the stable name of the subscriber.
    ///
    /// The name is `"<topic1>,<topic2>,...:<call-name>"` and does not change
    /// between calls unless a handler is registered in between.
    fn name(&self) -> String;

    /// Whether the subscriber should appear in generated documentation.
    fn include_in_schema(&self) -> bool;

    /// Derives one channel description per subscribed topic.
    ///
    /// Pure function of the subscriber's state at call time; regenerating
    /// after further handler registrations reflects the new registrations.
    fn channel_descriptions(&self) -> Result<Channels, SchemaError>;

    /// Builds the broker consumer and begins consumption.
    async fn start(&self) -> Result<(), Self::Error>;

    /// Stops consumption and releases the broker consumer.
    async fn shutdown(&self) -> Result<(), Self::Error>;
}
