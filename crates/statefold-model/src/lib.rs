#![forbid(unsafe_code)]

//! Flat domain model for a multi-pane editing workspace.
//!
//! A [`State`] is an ordered list of [`Session`]s; each session owns the
//! compiler configurations attached to its source text. The model is
//! deliberately permissive: every field a layout document may omit is
//! optional here, no duplicate-id or cross-reference checks are performed,
//! and ids are caller-supplied opaque keys.
//!
//! Values are constructed fresh per normalization or synthesis pass and are
//! exclusively owned by the caller; they carry no identity beyond the call
//! that produced them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque session key.
///
/// Stored and compared verbatim, never interpreted. Layout documents carry
/// either numeric or textual ids; both round-trip as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionId {
    Num(i64),
    Text(String),
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SessionId {
    fn from(raw: i64) -> Self {
        Self::Num(raw)
    }
}

impl From<&str> for SessionId {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_owned())
    }
}

/// Output filter flags for one compiler configuration.
///
/// Absent flags stay absent: a flag missing from the input document is
/// `None`, not `false`, and serializes back to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directives: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intel: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demangle: Option<bool>,
}

/// One compilation configuration attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Compiler {
    /// Compiler identifier, e.g. `"g82"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Command-line options string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    /// Library selections, passed through without inspection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub libs: Option<Value>,
    #[serde(default)]
    pub filters: CompilerFilters,
}

/// One source-editing context and the compilers configured against it.
///
/// `language` and `source` are optional so that a session created from a
/// compiler reference alone is a valid, if sparse, value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Append-only; never deduplicated or reordered.
    #[serde(default)]
    pub compilers: Vec<Compiler>,
}

impl Session {
    /// Placeholder session carrying only its key.
    #[must_use]
    pub fn empty(id: SessionId) -> Self {
        Self {
            id,
            language: None,
            source: None,
            compilers: Vec::new(),
        }
    }
}

/// Ordered collection of sessions.
///
/// Order is the order of first encounter while normalizing a document, or
/// the explicit application order when the state drives synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl State {
    /// Empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the session for `id`, appending a placeholder if none exists.
    ///
    /// The returned reference is the single canonical instance for that key
    /// within this state: every later call with the same key resolves to it.
    pub fn find_or_create_session(&mut self, id: SessionId) -> &mut Session {
        let idx = match self.sessions.iter().position(|s| s.id == id) {
            Some(idx) => idx,
            None => {
                self.sessions.push(Session::empty(id));
                self.sessions.len() - 1
            }
        };
        &mut self.sessions[idx]
    }

    /// Read-side lookup by key.
    #[must_use]
    pub fn find_session(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| &s.id == id)
    }
}
