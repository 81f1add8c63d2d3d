mod batch;
mod default;
mod error;
mod logic;

pub use batch::BatchSubscriber;
pub use default::DefaultSubscriber;
pub use error::Error;
pub use logic::LogicSubscriber;

use std::sync::Arc;

use async_trait::async_trait;
use rivulet_messaging::consumer::BatchLimits;
use rivulet_messaging::schema::{Channels, SchemaError};
use rivulet_messaging::subscriber::Subscriber;

use crate::config::SubscriberConfig;
use crate::middleware::DeliveryMiddleware;

/// A subscriber constructed with a run-time batch flag.
///
/// Callers that know the mode at compile time should construct
/// [`DefaultSubscriber`] or [`BatchSubscriber`] directly and keep the
/// strongly-typed handle.
#[derive(Debug)]
pub enum KafkaSubscriber {
    /// Batched delivery.
    Batch(BatchSubscriber),
    /// Single-record delivery.
    Default(DefaultSubscriber),
}

impl KafkaSubscriber {
    /// Constructs the variant selected by `batch`.
    ///
    /// The batch limits are always accepted and reach the constructed
    /// subscriber only when `batch` is true; the default variant discards
    /// them without error. The middlewares must apply to either delivery
    /// shape and are narrowed to the shape of the chosen variant.
    pub fn create(
        topics: Vec<String>,
        batch: bool,
        limits: BatchLimits,
        config: SubscriberConfig,
        middlewares: Vec<Arc<dyn DeliveryMiddleware>>,
    ) -> Result<Self, Error> {
        if batch {
            let middlewares = middlewares.into_iter().map(|m| m.for_batch()).collect();
            Ok(Self::Batch(BatchSubscriber::new(
                topics,
                limits,
                config,
                middlewares,
            )?))
        } else {
            let middlewares = middlewares.into_iter().map(|m| m.for_single()).collect();
            Ok(Self::Default(DefaultSubscriber::new(
                topics,
                config,
                middlewares,
            )?))
        }
    }

    /// Returns the batch variant, if that is what was constructed.
    #[must_use]
    pub const fn as_batch(&self) -> Option<&BatchSubscriber> {
        match self {
            Self::Batch(subscriber) => Some(subscriber),
            Self::Default(_) => None,
        }
    }

    /// Returns the batch variant mutably, if that is what was constructed.
    pub fn as_batch_mut(&mut self) -> Option<&mut BatchSubscriber> {
        match self {
            Self::Batch(subscriber) => Some(subscriber),
            Self::Default(_) => None,
        }
    }

    /// Returns the default variant, if that is what was constructed.
    #[must_use]
    pub const fn as_default(&self) -> Option<&DefaultSubscriber> {
        match self {
            Self::Default(subscriber) => Some(subscriber),
            Self::Batch(_) => None,
        }
    }

    /// Returns the default variant mutably, if that is what was constructed.
    pub fn as_default_mut(&mut self) -> Option<&mut DefaultSubscriber> {
        match self {
            Self::Default(subscriber) => Some(subscriber),
            Self::Batch(_) => None,
        }
    }
}

#[async_trait]
impl Subscriber for KafkaSubscriber {
    type Error = Error;

    fn topics(&self) -> &[String] {
        match self {
            Self::Batch(subscriber) => subscriber.topics(),
            Self::Default(subscriber) => subscriber.topics(),
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Batch(subscriber) => subscriber.name(),
            Self::Default(subscriber) => subscriber.name(),
        }
    }

    fn include_in_schema(&self) -> bool {
        match self {
            Self::Batch(subscriber) => subscriber.include_in_schema(),
            Self::Default(subscriber) => subscriber.include_in_schema(),
        }
    }

    fn channel_descriptions(&self) -> Result<Channels, SchemaError> {
        match self {
            Self::Batch(subscriber) => subscriber.channel_descriptions(),
            Self::Default(subscriber) => subscriber.channel_descriptions(),
        }
    }

    async fn start(&self) -> Result<(), Error> {
        match self {
            Self::Batch(subscriber) => subscriber.start().await,
            Self::Default(subscriber) => subscriber.start().await,
        }
    }

    async fn shutdown(&self) -> Result<(), Error> {
        match self {
            Self::Batch(subscriber) => subscriber.shutdown().await,
            Self::Default(subscriber) => subscriber.shutdown().await,
        }
    }
}
