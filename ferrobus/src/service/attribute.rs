//! Attribute services: reading and writing current and historical values.

use crate::header::{RequestHeader, ResponseHeader};
use crate::macros::service_messages;
use crate::types::{DataValue, DateTime, NodeId, StatusCode};

use super::TimestampsToReturn;

service_messages! {
    /// Identifies one attribute of one node to read.
    pub struct ReadValueId {
        /// Node whose attribute is read.
        pub node_id: NodeId,
        /// Attribute to read (13 is the value attribute).
        pub attribute_id: u32,
    }

    /// Read the current value of one or more attributes.
    pub struct ReadRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Oldest acceptable cached value, in milliseconds. Zero forces a
        /// device read.
        pub max_age: f64,
        /// Which timestamps to return with each value.
        pub timestamps_to_return: TimestampsToReturn,
        /// Attributes to read.
        pub nodes_to_read: Vec<ReadValueId>,
    }

    /// Values read, in request order.
    pub struct ReadResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One value per entry in `nodes_to_read`.
        pub results: Vec<DataValue>,
    }

    /// One attribute write.
    pub struct WriteValue {
        /// Node whose attribute is written.
        pub node_id: NodeId,
        /// Attribute to write.
        pub attribute_id: u32,
        /// Value to write.
        pub value: DataValue,
    }

    /// Write one or more attribute values.
    pub struct WriteRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Writes to perform.
        pub nodes_to_write: Vec<WriteValue>,
    }

    /// Per-write results, in request order.
    pub struct WriteResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One status per entry in `nodes_to_write`.
        pub results: Vec<StatusCode>,
    }

    /// Identifies one node whose history is read.
    pub struct HistoryReadValueId {
        /// Node whose history is read.
        pub node_id: NodeId,
        /// Continuation point from a previous read, if resuming.
        pub continuation_point: Option<Vec<u8>>,
    }

    /// Read historical values.
    pub struct HistoryReadRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// What span of history to read.
        pub history_read_details: HistoryReadDetails,
        /// Which timestamps to return with each value.
        pub timestamps_to_return: TimestampsToReturn,
        /// Release rather than resume the given continuation points.
        pub release_continuation_points: bool,
        /// Nodes whose history is read.
        pub nodes_to_read: Vec<HistoryReadValueId>,
    }

    /// History for one node.
    pub struct HistoryReadResult {
        /// Result of reading this node's history.
        pub status: StatusCode,
        /// Continuation point to resume with, if the span was truncated.
        pub continuation_point: Option<Vec<u8>>,
        /// Historical values in time order.
        pub values: Vec<DataValue>,
    }

    /// Histories read, in request order.
    pub struct HistoryReadResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One history per entry in `nodes_to_read`.
        pub results: Vec<HistoryReadResult>,
    }

    /// One node's historical values to insert or replace.
    pub struct HistoryUpdateDetails {
        /// Node whose history is updated.
        pub node_id: NodeId,
        /// Values to store.
        pub values: Vec<DataValue>,
    }

    /// Update historical values.
    pub struct HistoryUpdateRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Updates to perform.
        pub history_update_details: Vec<HistoryUpdateDetails>,
    }

    /// Per-update results, in request order.
    pub struct HistoryUpdateResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One status per entry in `history_update_details`.
        pub results: Vec<StatusCode>,
    }
}

/// What span of history a [`HistoryReadRequest`] covers.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum HistoryReadDetails {
    /// Raw values between two instants.
    RawModified {
        /// Start of the span.
        start_time: DateTime,
        /// End of the span.
        end_time: DateTime,
    },
    /// Values at explicit instants.
    AtTime {
        /// Instants to read at.
        times: Vec<DateTime>,
    },
}
