//! Kafka subscriber registration and channel-description derivation.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Pass-through construction options for subscribers.
pub mod config;

/// Middlewares applicable to either delivery shape.
pub mod middleware;

/// Records are single messages consumed from a topic partition.
pub mod record;

/// Registries track handlers and their declared payload schemas.
pub mod registry;

/// Subscribers consume records from topics, singly or in batches.
pub mod subscriber;
