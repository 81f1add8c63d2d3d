use std::fmt::Debug;

use async_trait::async_trait;

use crate::BoxError;

/// A trait representing a middleware wrapping handler execution.
///
/// Middlewares are carried by this core in registration order and invoked by
/// the external consumer runtime; the shape parameter ties a middleware to the
/// delivery shape of the subscriber it is attached to.
#[async_trait]
pub trait Middleware<M>
where
    Self: Debug + Send + Sync,
    M: Clone + Debug + Send + Sync + 'static,
{
    /// Called before each delivery is handed to the handlers.
    async fn on_delivery(&self, delivery: &M) -> Result<(), BoxError>;
}
