//! Abstract interface for registering and describing broker subscribers.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Injected broker capabilities consumed by subscribers.
pub mod consumer;

/// Handlers process deliveries for subscribers.
pub mod handler;

/// Middlewares wrap handler execution, parameterized by delivery shape.
pub mod middleware;

/// Channel descriptions document subscriptions for an external renderer.
pub mod schema;

/// Subscribers consume messages from topics.
pub mod subscriber;

/// Boxed error type carried across capability seams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
