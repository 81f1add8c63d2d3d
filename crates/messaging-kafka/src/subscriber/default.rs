use std::sync::Arc;

use async_trait::async_trait;
use rivulet_messaging::handler::SubscriptionHandler;
use rivulet_messaging::middleware::Middleware;
use rivulet_messaging::schema::{Channels, SchemaError};
use rivulet_messaging::subscriber::Subscriber;

use crate::config::SubscriberConfig;
use crate::record::ConsumerRecord;

use super::logic::LogicSubscriber;
use super::Error;

/// A subscriber delivering one record per invocation.
#[derive(Debug)]
pub struct DefaultSubscriber {
    logic: LogicSubscriber<ConsumerRecord>,
}

impl DefaultSubscriber {
    /// Creates a single-record subscriber.
    ///
    /// Batch limits supplied through the run-time-mode factory never reach
    /// this variant; they are discarded there without error.
    pub fn new(
        topics: Vec<String>,
        config: SubscriberConfig,
        middlewares: Vec<Arc<dyn Middleware<ConsumerRecord>>>,
    ) -> Result<Self, Error> {
        Ok(Self {
            logic: LogicSubscriber::new(topics, config, middlewares)?,
        })
    }

    /// Attaches a handler. Registration must complete before `start`.
    pub fn add_handler(&mut self, handler: Arc<dyn SubscriptionHandler<ConsumerRecord>>) {
        self.logic.add_handler(handler);
    }

    /// The shared subscriber state.
    #[must_use]
    pub const fn logic(&self) -> &LogicSubscriber<ConsumerRecord> {
        &self.logic
    }
}

#[async_trait]
impl Subscriber for DefaultSubscriber {
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
        self.logic.start(None).await
    }

    async fn shutdown(&self) -> Result<(), Error> {
        self.logic.shutdown().await
    }
}
