use rivulet_messaging::BoxError;
use rivulet_messaging::subscriber::SubscriberError;
use thiserror::Error;

/// Errors that can occur in a subscriber.
#[derive(Debug, Error)]
pub enum Error {
    /// Already started.
    #[error("Already started")]
    AlreadyStarted,

    /// Consumer build error.
    #[error("Failed to build consumer: {0}")]
    Build(BoxError),

    /// A topic name was empty.
    #[error("Topic names must be non-empty")]
    EmptyTopic,

    /// Not started.
    #[error("Not started")]
    NotStarted,

    /// Consumer stop error.
    #[error("Failed to stop consumer: {0}")]
    Stop(BoxError),
}

impl SubscriberError for Error {}
