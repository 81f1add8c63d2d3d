use std::fmt::Debug;
use std::sync::Arc;

use rivulet_messaging::consumer::{
    BatchLimits, BrokerConsumer, ConsumerBuilder, ConsumerSpec, Dependency, RebalanceListener,
};
use rivulet_messaging::handler::SubscriptionHandler;
use rivulet_messaging::middleware::Middleware;
use rivulet_messaging::schema::{ChannelDocs, Channels, SchemaError};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::SubscriberConfig;
use crate::registry::HandlerRegistry;

use super::Error;

/// Shared state and behavior of both subscriber variants.
///
/// The variants compose this with their shape-specific pieces: topic set and
/// naming, the handler registry, the pass-through consumer configuration, the
/// documentation component, and the start/shutdown lifecycle around the
/// injected consumer builder.
#[derive(Debug)]
pub struct LogicSubscriber<M>
where
    M: Clone + Debug + Send + Sync + 'static,
{
    topics: Vec<String>,
    builder: Arc<dyn ConsumerBuilder>,
    group_id: Option<String>,
    listener: Option<Arc<dyn RebalanceListener>>,
    pattern: Option<String>,
    is_manual: bool,
    no_ack: bool,
    retry: bool,
    dependencies: Vec<Arc<dyn Dependency>>,
    middlewares: Vec<Arc<dyn Middleware<M>>>,
    docs: ChannelDocs,
    registry: HandlerRegistry<M>,
    consumer: Mutex<Option<Box<dyn BrokerConsumer>>>,
}

impl<M> LogicSubscriber<M>
where
    M: Clone + Debug + Send + Sync + 'static,
{
    pub(super) fn new(
        topics: Vec<String>,
        config: SubscriberConfig,
        middlewares: Vec<Arc<dyn Middleware<M>>>,
    ) -> Result<Self, Error> {
        if topics.iter().any(String::is_empty) {
            return Err(Error::EmptyTopic);
        }

        let mut docs = ChannelDocs::new(
            config.title,
            config.description,
            config.include_in_schema,
        );
        if let Some(resolver) = config.resolver {
            docs = docs.with_resolver(resolver);
        }

        debug!(topics = ?topics, "created subscriber");

        Ok(Self {
            topics,
            builder: config.builder,
            group_id: config.group_id,
            listener: config.listener,
            pattern: config.pattern,
            is_manual: config.is_manual,
            no_ack: config.no_ack,
            retry: config.retry,
            dependencies: config.dependencies,
            middlewares,
            docs,
            registry: HandlerRegistry::default(),
            consumer: Mutex::new(None),
        })
    }

    /// Attaches a handler. Registration must complete before `start`.
    pub fn add_handler(&mut self, handler: Arc<dyn SubscriptionHandler<M>>) {
        debug!(handler = handler.name(), "registered handler");
        self.registry.register(handler);
    }

    pub(super) fn topics(&self) -> &[String] {
        &self.topics
    }

    pub(super) fn name(&self) -> String {
        format!("{}:{}", self.topics.join(","), self.registry.call_name())
    }

    pub(super) fn include_in_schema(&self) -> bool {
        self.docs.include_in_schema()
    }

    pub(super) fn channel_descriptions(&self) -> Result<Channels, SchemaError> {
        self.docs
            .describe(&self.topics, self.registry.call_name(), &self.registry.payloads())
    }

    /// The consumer group identifier, if any.
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// The topic pattern, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Whether offsets are committed manually.
    pub const fn is_manual(&self) -> bool {
        self.is_manual
    }

    /// Whether deliveries are processed without acknowledgment.
    pub const fn no_ack(&self) -> bool {
        self.no_ack
    }

    /// Whether failed deliveries are retried by the middleware chain.
    pub const fn retry(&self) -> bool {
        self.retry
    }

    /// The dependencies resolved ahead of handler execution, in order.
    pub fn dependencies(&self) -> &[Arc<dyn Dependency>] {
        &self.dependencies
    }

    /// The middlewares wrapping handler execution, in order.
    pub fn middlewares(&self) -> &[Arc<dyn Middleware<M>>] {
        &self.middlewares
    }

    /// The handler registry.
    pub const fn registry(&self) -> &HandlerRegistry<M> {
        &self.registry
    }

    pub(super) async fn start(&self, batch: Option<BatchLimits>) -> Result<(), Error> {
        let mut slot = self.consumer.lock().await;
        if slot.is_some() {
            return Err(Error::AlreadyStarted);
        }

        let spec = ConsumerSpec {
            topics: self.topics.clone(),
            pattern: self.pattern.clone(),
            group_id: self.group_id.clone(),
            is_manual: self.is_manual,
            no_ack: self.no_ack,
            retry: self.retry,
            listener: self.listener.clone(),
            batch,
        };

        let consumer = self.builder.build(spec).await.map_err(Error::Build)?;
        *slot = Some(consumer);

        info!(name = %self.name(), "subscriber started");

        Ok(())
    }

    pub(super) async fn shutdown(&self) -> Result<(), Error> {
        let consumer = self.consumer.lock().await.take().ok_or(Error::NotStarted)?;
        consumer.stop().await.map_err(Error::Stop)?;

        info!(name = %self.name(), "subscriber stopped");

        Ok(())
    }
}
