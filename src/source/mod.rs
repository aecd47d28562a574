use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker contained in every id that denotes an original (pre-transform) source.
const ORIGINAL_ID_MARKER: &str = "/originalSource";

/// URL suffix carried by pretty-printed renderings.
const PRETTY_URL_SUFFIX: &str = ":formatted";

/// Opaque identity of a loaded source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this id names an original source rather than a
    /// generated one.
    pub fn is_original(&self) -> bool {
        self.0.contains(ORIGINAL_ID_MARKER)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single logical source file as known to the debugger.
///
/// Replaced wholesale whenever the source reloads; never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    pub id: SourceId,
    pub url: String,
    pub source_map_url: Option<String>,
    pub is_black_boxed: bool,
    pub is_pretty_printed: bool,
}

impl SourceDescriptor {
    /// Creates a descriptor, deriving the pretty-printed flag from the URL.
    pub fn new(id: impl Into<SourceId>, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            id: id.into(),
            is_pretty_printed: is_pretty_url(&url),
            url,
            source_map_url: None,
            is_black_boxed: false,
        }
    }

    pub fn with_source_map(mut self, source_map_url: impl Into<String>) -> Self {
        self.source_map_url = Some(source_map_url.into());
        self
    }

    pub fn black_boxed(mut self, is_black_boxed: bool) -> Self {
        self.is_black_boxed = is_black_boxed;
        self
    }

    pub fn has_source_map(&self) -> bool {
        self.source_map_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// A resolved point in a source. Lines and columns are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub source_id: SourceId,
    pub line: u32,
    pub column: u32,
}

/// Returns `true` if the URL names a pretty-printed rendering.
pub fn is_pretty_url(url: &str) -> bool {
    url.ends_with(PRETTY_URL_SUFFIX)
}

/// Strips the query string and any pretty-print suffix from a source URL.
pub fn raw_source_url(url: &str) -> &str {
    let url = url.split_once('?').map_or(url, |(base, _)| base);
    url.strip_suffix(PRETTY_URL_SUFFIX).unwrap_or(url)
}

#[cfg(test)]
#[path = "../../tests/unit/source.rs"]
mod tests;
