//! Node management services: adding and deleting nodes and references.

use crate::header::{RequestHeader, ResponseHeader};
use crate::macros::service_messages;
use crate::types::{NodeId, StatusCode};

/// Class of a node being added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NodeClass {
    /// Object node.
    Object,
    /// Variable node.
    Variable,
    /// Method node.
    Method,
    /// View node.
    View,
}

service_messages! {
    /// One node to add.
    pub struct AddNodesItem {
        /// Parent the new node hangs off.
        pub parent_node_id: NodeId,
        /// Browse name of the new node.
        pub browse_name: String,
        /// Class of the new node.
        pub node_class: NodeClass,
    }

    /// Result of adding one node.
    pub struct AddNodesResult {
        /// Result of the addition.
        pub status: StatusCode,
        /// Identifier the server assigned to the new node.
        pub added_node_id: NodeId,
    }

    /// Add nodes to the server's address space.
    pub struct AddNodesRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Nodes to add.
        pub nodes_to_add: Vec<AddNodesItem>,
    }

    /// Addition results, in request order.
    pub struct AddNodesResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One result per entry in `nodes_to_add`.
        pub results: Vec<AddNodesResult>,
    }

    /// One reference to add.
    pub struct AddReferencesItem {
        /// Source node of the reference.
        pub source_node_id: NodeId,
        /// Type of the reference.
        pub reference_type_id: NodeId,
        /// Whether the reference points source-to-target.
        pub is_forward: bool,
        /// Target node of the reference.
        pub target_node_id: NodeId,
    }

    /// Add references between nodes.
    pub struct AddReferencesRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// References to add.
        pub references_to_add: Vec<AddReferencesItem>,
    }

    /// Addition results, in request order.
    pub struct AddReferencesResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One status per entry in `references_to_add`.
        pub results: Vec<StatusCode>,
    }

    /// One node to delete.
    pub struct DeleteNodesItem {
        /// Node to delete.
        pub node_id: NodeId,
        /// Whether references targeting the node are deleted too.
        pub delete_target_references: bool,
    }

    /// Delete nodes from the server's address space.
    pub struct DeleteNodesRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Nodes to delete.
        pub nodes_to_delete: Vec<DeleteNodesItem>,
    }

    /// Deletion results, in request order.
    pub struct DeleteNodesResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One status per entry in `nodes_to_delete`.
        pub results: Vec<StatusCode>,
    }

    /// One reference to delete.
    pub struct DeleteReferencesItem {
        /// Source node of the reference.
        pub source_node_id: NodeId,
        /// Type of the reference.
        pub reference_type_id: NodeId,
        /// Whether the reference points source-to-target.
        pub is_forward: bool,
        /// Target node of the reference.
        pub target_node_id: NodeId,
        /// Whether the opposite reference is deleted too.
        pub delete_bidirectional: bool,
    }

    /// Delete references between nodes.
    pub struct DeleteReferencesRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// References to delete.
        pub references_to_delete: Vec<DeleteReferencesItem>,
    }

    /// Deletion results, in request order.
    pub struct DeleteReferencesResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One status per entry in `references_to_delete`.
        pub results: Vec<StatusCode>,
    }
}
