//! View services: browsing the server's node graph and registering nodes.

use crate::header::{RequestHeader, ResponseHeader};
use crate::macros::service_messages;
use crate::types::{DateTime, NodeId, StatusCode};

/// Direction references are followed while browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BrowseDirection {
    /// Follow references from source to target.
    Forward,
    /// Follow references from target to source.
    Inverse,
    /// Follow references in both directions.
    Both,
}

service_messages! {
    /// The server-side view a browse operates in.
    pub struct ViewDescription {
        /// View node, or null for the whole address space.
        pub view_id: NodeId,
        /// Point in time the view is read at, or null for now.
        pub timestamp: DateTime,
    }

    /// One node to browse.
    pub struct BrowseDescription {
        /// Node to browse from.
        pub node_id: NodeId,
        /// Direction to follow references in.
        pub browse_direction: BrowseDirection,
        /// Reference type to follow, or null for all.
        pub reference_type_id: NodeId,
        /// Whether subtypes of the reference type are followed too.
        pub include_subtypes: bool,
    }

    /// One reference found while browsing.
    pub struct ReferenceDescription {
        /// Target of the reference.
        pub node_id: NodeId,
        /// Browse name of the target.
        pub browse_name: String,
        /// Whether the reference was followed forward.
        pub is_forward: bool,
    }

    /// References found for one browse description.
    pub struct BrowseResult {
        /// Result of browsing this node.
        pub status: StatusCode,
        /// Continuation point to resume with, if truncated.
        pub continuation_point: Option<Vec<u8>>,
        /// References found.
        pub references: Vec<ReferenceDescription>,
    }

    /// Discover the references of one or more nodes.
    pub struct BrowseRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// View to browse in.
        pub view: ViewDescription,
        /// Per-node cap on returned references; zero means no cap.
        pub requested_max_references_per_node: u32,
        /// Nodes to browse.
        pub nodes_to_browse: Vec<BrowseDescription>,
    }

    /// Browse results, in request order.
    pub struct BrowseResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One result per entry in `nodes_to_browse`.
        pub results: Vec<BrowseResult>,
    }

    /// Continue or release earlier truncated browses.
    pub struct BrowseNextRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Release rather than resume the given continuation points.
        pub release_continuation_points: bool,
        /// Continuation points from earlier browse results.
        pub continuation_points: Vec<Vec<u8>>,
    }

    /// Continued browse results, in request order.
    pub struct BrowseNextResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One result per continuation point.
        pub results: Vec<BrowseResult>,
    }

    /// A browse path to resolve to a node.
    pub struct BrowsePath {
        /// Node the path starts at.
        pub starting_node: NodeId,
        /// Browse names to follow, in order.
        pub relative_path: Vec<String>,
    }

    /// Resolution of one browse path.
    pub struct BrowsePathResult {
        /// Result of resolving this path.
        pub status: StatusCode,
        /// Nodes the path resolved to.
        pub targets: Vec<NodeId>,
    }

    /// Resolve browse paths to node identifiers.
    pub struct TranslateBrowsePathsRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Paths to resolve.
        pub browse_paths: Vec<BrowsePath>,
    }

    /// Path resolutions, in request order.
    pub struct TranslateBrowsePathsResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One result per entry in `browse_paths`.
        pub results: Vec<BrowsePathResult>,
    }

    /// Register nodes for efficient repeated access.
    pub struct RegisterNodesRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Nodes to register.
        pub nodes_to_register: Vec<NodeId>,
    }

    /// Server-assigned aliases for the registered nodes.
    pub struct RegisterNodesResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One alias per entry in `nodes_to_register`.
        pub registered_node_ids: Vec<NodeId>,
    }

    /// Release previously registered nodes.
    pub struct UnregisterNodesRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Aliases to release.
        pub nodes_to_unregister: Vec<NodeId>,
    }

    /// Acknowledgement of the release.
    pub struct UnregisterNodesResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
    }
}
