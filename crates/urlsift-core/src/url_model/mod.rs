//! URL modeling for rule evaluation.
//!
//! Parses one input line into an immutable [`ParsedUrl`] holding the pieces
//! the rule set and deduplicator care about: scheme, host, explicit port,
//! the escaped path as serialized, a decoded lowercase path for extension
//! matching, and the decoded query pairs in input order.

mod parse;

pub use parse::ParseUrlError;

/// A parsed input URL, immutable once built.
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: String,
    path_decoded_lower: String,
    query: Vec<(String, String)>,
}

impl ParsedUrl {
    /// Parse a trimmed input line, tolerating scheme-less and path-only URLs.
    pub fn parse(line: &str) -> Result<Self, ParseUrlError> {
        parse::parse(line)
    }

    /// Scheme, or `None` when the input line had none and one was synthesized.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Hostname, or `None` when the input line had no authority.
    pub fn host_str(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Explicit port from the input, if any.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Path exactly as serialized (percent-escapes preserved).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Percent-decoded, lowercased path. Extension checks run against this
    /// so `/backup%2Eenv`-style escapes cannot hide a file ending.
    pub fn path_decoded_lower(&self) -> &str {
        &self.path_decoded_lower
    }

    /// Decoded query pairs in input order. Keys may repeat.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}
