use std::sync::Arc;

use rivulet_messaging::middleware::Middleware;

use crate::record::{ConsumerRecord, RecordBatch};

/// A middleware usable with either delivery shape.
///
/// The run-time-mode factory cannot know which variant it will construct, so
/// it accepts middlewares that apply to single records and record batches
/// alike and narrows them to the shape of the chosen variant.
pub trait DeliveryMiddleware: Middleware<ConsumerRecord> + Middleware<RecordBatch> {
    /// Narrows to the single-record shape.
    fn for_single(self: Arc<Self>) -> Arc<dyn Middleware<ConsumerRecord>>;

    /// Narrows to the batch shape.
    fn for_batch(self: Arc<Self>) -> Arc<dyn Middleware<RecordBatch>>;
}

impl<T> DeliveryMiddleware for T
where
    T: Middleware<ConsumerRecord> + Middleware<RecordBatch> + 'static,
{
    fn for_single(self: Arc<Self>) -> Arc<dyn Middleware<ConsumerRecord>> {
        self
    }

    fn for_batch(self: Arc<Self>) -> Arc<dyn Middleware<RecordBatch>> {
        self
    }
}
