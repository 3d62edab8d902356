//! # Ferrobus
//!
//! Async client runtime for industrial request/response protocols.
//!
//! This crate provides:
//! - **Client**: connect/disconnect lifecycle over a stateful transport and
//!   one shared authenticated session
//! - **Request correlation**: atomic handle sequencing and uniform request
//!   headers for matching responses to requests
//! - **Service operations**: one typed operation per protocol service, all
//!   flowing through a single generic dispatch path
//! - **Fault fan-out**: a copy-on-write listener registry and a decoupled
//!   FIFO notification queue for server-reported service faults
//!
//! The secure channel, binary encoding, session state machine internals,
//! and subscription bookkeeping are external collaborators behind the
//! [`Transport`], [`SessionController`], and [`SubscriptionController`]
//! seams.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

// =============================================================================
// Modules
// =============================================================================

/// Client facade and connection lifecycle.
pub mod client;

/// Client configuration.
pub mod config;

/// Error types for the client runtime.
pub mod error;

/// Task executor seam for background work.
pub mod executor;

/// Service fault fan-out.
pub mod fault;

/// Request handle allocation.
pub mod handle;

/// Request and response headers.
pub mod header;

/// Namespace table.
pub mod namespace;

/// Typed service messages.
pub mod service;

/// Session collaborator seam.
pub mod session;

/// Subscription collaborator seam.
pub mod subscriptions;

/// Transport collaborator seam.
pub mod transport;

/// Core protocol scalar types.
pub mod types;

mod dispatch;
mod macros;

// =============================================================================
// Public API Re-exports
// =============================================================================

// Client exports
pub use client::Client;
pub use config::ClientConfig;

// Error exports
pub use error::{
    ClientError, ClientResult, RequestError, ServiceFaultError, SessionError, TransportError,
};

// Executor exports
pub use executor::{TaskExecutor, TokioExecutor};

// Fault exports
pub use fault::{FaultListenerSet, NotificationQueue, ServiceFault, ServiceFaultListener};

// Correlation exports
pub use handle::RequestHandleSequencer;
pub use header::{RequestHeader, ResponseHeader};

// Namespace exports
pub use namespace::{NamespaceTable, STANDARD_NAMESPACE_URI};

// Service exports
pub use service::{RequestMessage, ResponseMessage, ServiceRequest, TimestampsToReturn};

// Collaborator seam exports
pub use session::{Session, SessionActivityListener, SessionController};
pub use subscriptions::SubscriptionController;
pub use transport::{ResponseFuture, Transport};

// Core type exports
pub use types::{DataValue, DateTime, Identifier, NodeId, StatusCode, Variant};
