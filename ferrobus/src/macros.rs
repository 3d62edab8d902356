//! Macros for reducing service-message boilerplate.
//!
//! The protocol surface is ~25 request/response pairs that all flow through
//! the same dispatch path. Two macros keep that surface mechanical:
//!
//! - [`service_messages!`]: auto-derive the standard trait set for message
//!   structs
//! - [`service_set!`]: generate the request/response envelope enums and the
//!   per-pair plumbing (`From`/`TryFrom` conversions and the
//!   [`ServiceRequest`](crate::service::ServiceRequest) binding)

/// Define service message types with the standard derives.
///
/// Expands each struct with
/// `#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]`, the trait
/// set every wire-facing message carries.
macro_rules! service_messages {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis struct $name:ident {
                $(
                    $(#[$field_meta:meta])*
                    $field_vis:vis $field:ident : $ty:ty
                ),* $(,)?
            }
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
            $vis struct $name {
                $(
                    $(#[$field_meta])*
                    $field_vis $field : $ty,
                )*
            }
        )*
    };
}

/// Define the full service set: envelope enums plus per-pair plumbing.
///
/// For each `Name => Request : Response` entry this generates:
/// - a `RequestMessage::Name` and `ResponseMessage::Name` variant
/// - `From<Request> for RequestMessage` and
///   `From<Response> for ResponseMessage`
/// - `TryFrom<ResponseMessage> for Response` (the mismatched message is
///   handed back for diagnostics)
/// - the `ServiceRequest` binding between the pair
macro_rules! service_set {
    (
        $(
            $(#[$meta:meta])*
            $name:ident => $req:ty : $resp:ty
        ),* $(,)?
    ) => {
        /// Every request message the client can issue, one variant per
        /// service.
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub enum RequestMessage {
            $(
                $(#[$meta])*
                $name($req),
            )*
        }

        /// Every response message the transport can resolve, one variant per
        /// service.
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub enum ResponseMessage {
            $(
                $(#[$meta])*
                $name($resp),
            )*
        }

        impl RequestMessage {
            /// The header stamped on this request.
            pub fn request_header(&self) -> &$crate::header::RequestHeader {
                match self {
                    $(RequestMessage::$name(r) => &r.request_header,)*
                }
            }

            /// Name of the service this request invokes.
            pub fn service_name(&self) -> &'static str {
                match self {
                    $(RequestMessage::$name(_) => stringify!($name),)*
                }
            }
        }

        impl ResponseMessage {
            /// The header echoed back by the server.
            pub fn response_header(&self) -> &$crate::header::ResponseHeader {
                match self {
                    $(ResponseMessage::$name(r) => &r.response_header,)*
                }
            }

            /// Name of the service this response answers.
            pub fn service_name(&self) -> &'static str {
                match self {
                    $(ResponseMessage::$name(_) => stringify!($name),)*
                }
            }
        }

        $(
            impl From<$req> for RequestMessage {
                fn from(request: $req) -> Self {
                    RequestMessage::$name(request)
                }
            }

            impl From<$resp> for ResponseMessage {
                fn from(response: $resp) -> Self {
                    ResponseMessage::$name(response)
                }
            }

            impl TryFrom<ResponseMessage> for $resp {
                type Error = ResponseMessage;

                fn try_from(message: ResponseMessage) -> Result<Self, ResponseMessage> {
                    match message {
                        ResponseMessage::$name(response) => Ok(response),
                        other => Err(other),
                    }
                }
            }

            impl $crate::service::ServiceRequest for $req {
                const SERVICE: &'static str = stringify!($name);
                type Response = $resp;
            }
        )*
    };
}

pub(crate) use service_messages;
pub(crate) use service_set;
