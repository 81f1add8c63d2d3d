use thiserror::Error;

use crate::BoxError;

/// Errors that can occur while deriving channel descriptions.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Handler payload schemas could not be merged.
    #[error("Failed to resolve payload schemas: {0}")]
    Payload(BoxError),

    /// An explicit title keys more than one topic to the same channel entry.
    #[error("Channel title {title:?} is shared by topics {topics:?}")]
    TitleCollision {
        /// The colliding display name.
        title: String,
        /// The topics that resolved to it.
        topics: Vec<String>,
    },
}
