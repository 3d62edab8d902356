//! Core protocol scalar types.
//!
//! This module provides the fundamental value types shared by headers,
//! sessions, and service payloads:
//! - [`NodeId`]: namespace-qualified node identifier
//! - [`StatusCode`]: 32-bit operation result with severity bits
//! - [`DateTime`]: protocol timestamp (100 ns ticks since the protocol epoch)
//! - [`Variant`] / [`DataValue`]: attribute values with quality and timestamps

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// The identifier part of a [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identifier {
    /// Numeric identifier, the common case for well-known nodes.
    Numeric(u32),
    /// String identifier.
    String(String),
    /// Opaque identifier, used for server-assigned tokens.
    Opaque(Vec<u8>),
}

/// Namespace-qualified node identifier.
///
/// Session authentication tokens, method targets, and browse subjects are all
/// addressed by `NodeId`. The null identifier (`NodeId::NULL`) is a valid
/// value on the wire and is used for request headers built before a session
/// exists.
///
/// # Examples
///
/// ```
/// use ferrobus::NodeId;
///
/// let id = NodeId::numeric(2, 1042);
/// assert!(!id.is_null());
/// assert!(NodeId::NULL.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
    /// Index into the namespace table.
    pub namespace_index: u16,
    /// Identifier within that namespace.
    pub identifier: Identifier,
}

impl NodeId {
    /// The null node identifier (namespace 0, numeric 0).
    pub const NULL: NodeId = NodeId {
        namespace_index: 0,
        identifier: Identifier::Numeric(0),
    };

    /// Create a numeric node identifier.
    pub const fn numeric(namespace_index: u16, value: u32) -> Self {
        Self {
            namespace_index,
            identifier: Identifier::Numeric(value),
        }
    }

    /// Create a string node identifier.
    pub fn string(namespace_index: u16, value: impl Into<String>) -> Self {
        Self {
            namespace_index,
            identifier: Identifier::String(value.into()),
        }
    }

    /// Create an opaque node identifier.
    pub fn opaque(namespace_index: u16, value: Vec<u8>) -> Self {
        Self {
            namespace_index,
            identifier: Identifier::Opaque(value),
        }
    }

    /// Check whether this is the null identifier.
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::NULL
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.identifier {
            Identifier::Numeric(v) => write!(f, "ns={};i={}", self.namespace_index, v),
            Identifier::String(v) => write!(f, "ns={};s={}", self.namespace_index, v),
            Identifier::Opaque(v) => write!(f, "ns={};b={} bytes", self.namespace_index, v.len()),
        }
    }
}

/// 32-bit operation result code.
///
/// The top two bits carry severity: `10` is bad, `01` is uncertain, `00` is
/// good. The remaining bits identify the specific condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StatusCode(u32);

impl StatusCode {
    /// The all-good status code.
    pub const GOOD: StatusCode = StatusCode(0);

    /// Create a status code from its raw value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw 32-bit value.
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Severity is good (neither bad nor uncertain bit set).
    pub const fn is_good(&self) -> bool {
        self.0 & 0xC000_0000 == 0
    }

    /// Severity is bad.
    pub const fn is_bad(&self) -> bool {
        self.0 & 0x8000_0000 != 0
    }

    /// Severity is uncertain.
    pub const fn is_uncertain(&self) -> bool {
        self.0 & 0x4000_0000 != 0
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Ticks between the protocol epoch (1601-01-01) and the Unix epoch.
const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;

/// Protocol timestamp: 100 ns ticks since 1601-01-01 00:00:00 UTC.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct DateTime(i64);

impl DateTime {
    /// The null timestamp (tick zero).
    pub const NULL: DateTime = DateTime(0);

    /// Create a timestamp from raw ticks.
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        let ticks = match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
            Ok(since_epoch) => UNIX_EPOCH_TICKS.saturating_add((since_epoch.as_nanos() / 100) as i64),
            // Clock before 1970: clamp to the Unix epoch rather than panic.
            Err(_) => UNIX_EPOCH_TICKS,
        };
        Self(ticks)
    }

    /// Raw tick count.
    pub const fn as_ticks(&self) -> i64 {
        self.0
    }

    /// Check whether this is the null timestamp.
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// No value.
    #[default]
    Null,
    /// Boolean value.
    Boolean(bool),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Unsigned 32-bit integer.
    UInt32(u32),
    /// 64-bit float.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Raw bytes.
    ByteString(Vec<u8>),
}

/// An attribute value together with its quality and timestamps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataValue {
    /// The value itself.
    pub value: Variant,
    /// Quality of the value.
    pub status: StatusCode,
    /// When the source produced the value, if known.
    pub source_timestamp: Option<DateTime>,
    /// When the server observed the value, if known.
    pub server_timestamp: Option<DateTime>,
}

impl DataValue {
    /// Create a good-quality value without timestamps.
    pub fn new(value: Variant) -> Self {
        Self {
            value,
            status: StatusCode::GOOD,
            source_timestamp: None,
            server_timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_node_id() {
        assert!(NodeId::NULL.is_null());
        assert!(!NodeId::numeric(0, 1).is_null());
        assert!(!NodeId::string(0, "x").is_null());
        assert_eq!(NodeId::default(), NodeId::NULL);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::numeric(2, 1042).to_string(), "ns=2;i=1042");
        assert_eq!(NodeId::string(1, "pump").to_string(), "ns=1;s=pump");
    }

    #[test]
    fn test_status_code_severity() {
        assert!(StatusCode::GOOD.is_good());
        assert!(!StatusCode::GOOD.is_bad());

        let bad = StatusCode::new(0x8001_0000);
        assert!(bad.is_bad());
        assert!(!bad.is_good());
        assert!(!bad.is_uncertain());

        let uncertain = StatusCode::new(0x4000_0000);
        assert!(uncertain.is_uncertain());
        assert!(!uncertain.is_bad());
    }

    #[test]
    fn test_status_code_display() {
        assert_eq!(StatusCode::new(0x8001_0000).to_string(), "0x80010000");
    }

    #[test]
    fn test_datetime_now_is_after_unix_epoch() {
        let now = DateTime::now();
        assert!(now.as_ticks() > UNIX_EPOCH_TICKS);
        assert!(!now.is_null());
    }

    #[test]
    fn test_datetime_ordering() {
        let earlier = DateTime::from_ticks(100);
        let later = DateTime::from_ticks(200);
        assert!(earlier < later);
    }
}
