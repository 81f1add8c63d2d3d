use std::collections::HashMap;

use bytes::Bytes;

/// A single record consumed from a topic partition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConsumerRecord {
    /// Topic the record was read from.
    pub topic: String,
    /// Partition within the topic.
    pub partition: i32,
    /// Offset within the partition.
    pub offset: i64,
    /// Broker-assigned timestamp, milliseconds since the epoch.
    pub timestamp_ms: i64,
    /// Record key, if any.
    pub key: Option<Bytes>,
    /// Record value.
    pub value: Bytes,
    /// Record headers.
    pub headers: HashMap<String, String>,
}

/// An ordered group of records delivered in one batch invocation.
///
/// An empty batch is a real delivery: the batch timeout fired before any
/// records accumulated. "No batch" is simply no invocation.
pub type RecordBatch = Vec<ConsumerRecord>;
