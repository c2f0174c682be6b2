//! Size limits for identifiers and payloads
//!
//! Enforced by the schema layer before dispatch. Violations surface as
//! `Error::Validation` with the limit that was exceeded.

use serde_json::Value;
use thiserror::Error;

use crate::error::Error as ContentError;

/// Size limits for identifiers and payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum content type id length in bytes (default: 256)
    pub max_content_type_id_bytes: usize,

    /// Maximum item id length in bytes (default: 1024)
    pub max_id_bytes: usize,

    /// Maximum string length inside a payload (default: 16MB)
    pub max_string_bytes: usize,

    /// Maximum nesting depth of a payload (default: 64)
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_content_type_id_bytes: 256,
            max_id_bytes: 1024,
            max_string_bytes: 16 * 1024 * 1024, // 16MB
            max_nesting_depth: 64,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_content_type_id_bytes: 16,
            max_id_bytes: 32,
            max_string_bytes: 64,
            max_nesting_depth: 4,
        }
    }

    /// Validate a content type id: non-empty and within the length limit.
    pub fn validate_content_type_id(&self, id: &str) -> Result<(), LimitError> {
        if id.is_empty() {
            return Err(LimitError::Empty {
                field: "contentTypeId",
            });
        }
        if id.len() > self.max_content_type_id_bytes {
            return Err(LimitError::TooLong {
                field: "contentTypeId",
                actual: id.len(),
                max: self.max_content_type_id_bytes,
            });
        }
        Ok(())
    }

    /// Validate an item id: non-empty and within the length limit.
    pub fn validate_id(&self, id: &str) -> Result<(), LimitError> {
        if id.is_empty() {
            return Err(LimitError::Empty { field: "id" });
        }
        if id.len() > self.max_id_bytes {
            return Err(LimitError::TooLong {
                field: "id",
                actual: id.len(),
                max: self.max_id_bytes,
            });
        }
        Ok(())
    }

    /// Validate a payload's string sizes and nesting depth.
    pub fn validate_value(&self, value: &Value) -> Result<(), LimitError> {
        self.validate_value_impl(value, 0)
    }

    fn validate_value_impl(&self, value: &Value, depth: usize) -> Result<(), LimitError> {
        if depth > self.max_nesting_depth {
            return Err(LimitError::NestingTooDeep {
                actual: depth,
                max: self.max_nesting_depth,
            });
        }

        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) => Ok(()),

            Value::String(s) => {
                if s.len() > self.max_string_bytes {
                    return Err(LimitError::TooLong {
                        field: "string",
                        actual: s.len(),
                        max: self.max_string_bytes,
                    });
                }
                Ok(())
            }

            Value::Array(arr) => {
                for v in arr {
                    self.validate_value_impl(v, depth + 1)?;
                }
                Ok(())
            }

            Value::Object(obj) => {
                for v in obj.values() {
                    self.validate_value_impl(v, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

/// Limit validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Required field is empty
    #[error("{field} must not be empty")]
    Empty {
        /// Field name
        field: &'static str,
    },

    /// Field exceeds its length limit
    #[error("{field} too long: {actual} bytes exceeds maximum {max}")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Observed length in bytes
        actual: usize,
        /// Allowed length in bytes
        max: usize,
    },

    /// Payload nested too deeply
    #[error("payload nesting too deep: {actual} levels exceeds maximum {max}")]
    NestingTooDeep {
        /// Observed depth
        actual: usize,
        /// Allowed depth
        max: usize,
    },
}

impl From<LimitError> for ContentError {
    fn from(e: LimitError) -> Self {
        ContentError::validation(e.to_string())
    }
}
