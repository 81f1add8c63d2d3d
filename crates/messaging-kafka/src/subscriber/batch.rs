use std::sync::Arc;

use async_trait::async_trait;
use rivulet_messaging::consumer::BatchLimits;
use rivulet_messaging::handler::SubscriptionHandler;
use rivulet_messaging::middleware::Middleware;
use rivulet_messaging::schema::{Channels, SchemaError};
use rivulet_messaging::subscriber::Subscriber;

use crate::config::SubscriberConfig;
use crate::record::RecordBatch;

use super::logic::LogicSubscriber;
use super::Error;

/// A subscriber delivering a bounded group of records per invocation.
///
/// The limits are carried to the broker runtime unmodified; the runtime owns
/// the flush policy, including delivering an empty batch when the timeout
/// fires with nothing accumulated.
#[derive(Debug)]
pub struct BatchSubscriber {
    limits: BatchLimits,
    logic: LogicSubscriber<RecordBatch>,
}

impl BatchSubscriber {
    /// Creates a batch subscriber with the given delivery limits.
    pub fn new(
        topics: Vec<String>,
        limits: BatchLimits,
        config: SubscriberConfig,
        middlewares: Vec<Arc<dyn Middleware<RecordBatch>>>,
    ) -> Result<Self, Error> {
        Ok(Self {
            limits,
            logic: LogicSubscriber::new(topics, config, middlewares)?,
        })
    }

    /// Attaches a handler. Registration must complete before `start`.
    pub fn add_handler(&mut self, handler: Arc<dyn SubscriptionHandler<RecordBatch>>) {
        self.logic.add_handler(handler);
    }

    /// Maximum time to wait before a batch is flushed.
    #[must_use]
    pub const fn batch_timeout_ms(&self) -> u64 {
        self.limits.batch_timeout_ms
    }

    /// Maximum records per batch; unbounded when absent.
    #[must_use]
    pub const fn max_records(&self) -> Option<usize> {
        self.limits.max_records
    }

    /// The shared subscriber state.
    #[must_use]
    pub const fn logic(&self) -> &LogicSubscriber<RecordBatch> {
        &self.logic
    }
}

#[async_trait]
impl Subscriber for BatchSubscriber {
    type Error = Error;

    fn topics(&self) -> &[String] {
        self.logic.topics()
    }

    fn name(&self) -> String {
        self.logic.name()
    }

    fn include_in_schema(&self) -> bool {
        self.logic.include_in_schema()
    }

    fn channel_descriptions(&self) -> Result<Channels, SchemaError> {
        self.logic.channel_descriptions()
    }

    async fn start(&self) -> Result<(), Error> {
        self.logic.start(Some(self.limits)).await
    }

    async fn shutdown(&self) -> Result<(), Error> {
        self.logic.shutdown().await
    }
}
