//! Addressing types for content operations
//!
//! This module defines the identifiers carried by every request:
//! - ContentTypeId: dispatch key naming a registered content kind
//! - Version: the request/response shape a caller expects
//! - RequestContext: ambient per-request data passed through to storage
//! - Options: open, per-content-type configuration object

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Open per-request configuration. Recognised keys are defined by each
/// content type; the dispatcher never inspects them.
pub type Options = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// ContentTypeId
// =============================================================================

/// Opaque identifier of a registered content kind (e.g. "dashboard", "case").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTypeId(String);

impl ContentTypeId {
    /// Create a content type id. Emptiness is checked by the schema layer,
    /// not here, so that malformed requests can still be represented.
    pub fn new(id: impl Into<String>) -> Self {
        ContentTypeId(id.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the id is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ContentTypeId {
    fn from(s: &str) -> Self {
        ContentTypeId(s.to_string())
    }
}

impl From<String> for ContentTypeId {
    fn from(s: String) -> Self {
        ContentTypeId(s)
    }
}

impl fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Version
// =============================================================================

/// Content schema version. Versions start at 1.
///
/// Parses from `"1"`, `"v1"` or a bare number; serializes as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Version(u32);

impl Version {
    /// The first version of every content type
    pub const INITIAL: Version = Version(1);

    /// Create a version, rejecting 0.
    pub fn new(v: u32) -> Result<Self> {
        if v == 0 {
            return Err(Error::validation("version must be >= 1"));
        }
        Ok(Version(v))
    }

    /// Get the numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::INITIAL
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let n: u32 = digits
            .parse()
            .map_err(|_| Error::validation(format!("invalid version '{}'", s)))?;
        Version::new(n)
    }
}

impl TryFrom<u32> for Version {
    type Error = Error;

    fn try_from(v: u32) -> Result<Self> {
        Version::new(v)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(u32),
            Str(String),
        }

        let parsed = match Repr::deserialize(deserializer)? {
            Repr::Num(n) => Version::new(n),
            Repr::Str(s) => s.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// RequestContext
// =============================================================================

/// Ambient per-request data supplied by the transport.
///
/// Opaque to the dispatcher: it is copied into each [`StorageContext`]
/// and read only by CRUD implementations.
///
/// [`StorageContext`]: crate::StorageContext
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Correlation id for logs
    pub request_id: Uuid,
    /// Space (tenant) the request is scoped to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    /// Authenticated principal, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Free-form attributes forwarded to storage
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl RequestContext {
    /// Create a context with a fresh request id and nothing else.
    pub fn new() -> Self {
        RequestContext {
            request_id: Uuid::new_v4(),
            space: None,
            user: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Set the space
    pub fn with_space(mut self, space: impl Into<String>) -> Self {
        self.space = Some(space.into());
        self
    }

    /// Set the user
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
