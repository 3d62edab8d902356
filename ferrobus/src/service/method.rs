//! Method services: invoking server-side methods.

use crate::header::{RequestHeader, ResponseHeader};
use crate::macros::service_messages;
use crate::types::{NodeId, StatusCode, Variant};

service_messages! {
    /// One method invocation.
    pub struct CallMethodRequest {
        /// Object the method belongs to.
        pub object_id: NodeId,
        /// Method to invoke.
        pub method_id: NodeId,
        /// Input arguments, in declaration order.
        pub input_arguments: Vec<Variant>,
    }

    /// Result of one method invocation.
    pub struct CallMethodResult {
        /// Result of the invocation.
        pub status: StatusCode,
        /// Output arguments, in declaration order.
        pub output_arguments: Vec<Variant>,
    }

    /// Invoke one or more server-side methods.
    pub struct CallRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Invocations to perform.
        pub methods_to_call: Vec<CallMethodRequest>,
    }

    /// Invocation results, in request order.
    pub struct CallResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One result per entry in `methods_to_call`.
        pub results: Vec<CallMethodResult>,
    }
}
