//! Document identifiers.
//!
//! A [`DocumentId`] names one content page, e.g. `"intro"` or `"api/core"`.
//! Ids are `/`-separated segments. Each segment starts with an ASCII letter,
//! digit or `_` and continues with ASCII letters, digits, `_`, `-` or `.`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

static DOCUMENT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*(?:/[A-Za-z0-9_][A-Za-z0-9_.-]*)*$").unwrap()
});

/// Error returned when a string is not a valid [`DocumentId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid document id {value:?}: {reason}")]
pub struct InvalidDocumentId {
    /// The rejected input.
    pub value: String,
    /// Why the input was rejected.
    pub reason: &'static str,
}

/// Unique slug identifying one content page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    /// Parse and validate a document id.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDocumentId`] if the value is empty or breaks the
    /// segment convention.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidDocumentId> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidDocumentId {
                value,
                reason: "document id cannot be empty",
            });
        }
        if value.starts_with('/') || value.ends_with('/') {
            return Err(InvalidDocumentId {
                value,
                reason: "document id cannot start or end with '/'",
            });
        }
        if !DOCUMENT_ID_RE.is_match(&value) {
            return Err(InvalidDocumentId {
                value,
                reason: "expected '/'-separated segments of letters, digits, '_', '-' or '.'",
            });
        }
        Ok(Self(value))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory part of the id (`"api"` for `"api/core"`, `""` for `"intro"`).
    #[must_use]
    pub fn dir(&self) -> &str {
        self.0.rsplit_once('/').map_or("", |(dir, _)| dir)
    }

    /// Last segment of the id (`"core"` for `"api/core"`).
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.rsplit_once('/').map_or(self.0.as_str(), |(_, name)| name)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for DocumentId {
    type Error = InvalidDocumentId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for DocumentId {
    type Error = InvalidDocumentId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
