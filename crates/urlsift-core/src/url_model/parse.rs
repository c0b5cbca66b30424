//! Tolerant line-to-URL parsing.
//!
//! Recon URL lists are messy: scheme-less hosts, scheme-relative `//host`
//! lines, and bare paths all show up. `url::Url` rejects those outright, so
//! parsing retries with a synthesized scheme or placeholder authority and
//! records which pieces were real input.

use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::Url;

use super::ParsedUrl;

/// Placeholder authority for path-only lines. Never surfaced as a host.
const PLACEHOLDER_AUTHORITY: &str = "urlsift.invalid";

/// Why an input line could not be turned into a [`ParsedUrl`].
#[derive(Debug, Error)]
pub enum ParseUrlError {
    /// Line was empty after trimming.
    #[error("empty line")]
    Empty,
    /// The line (and its tolerant re-parses) is not a URL.
    #[error("invalid URL: {0}")]
    Invalid(#[from] url::ParseError),
}

pub(super) fn parse(line: &str) -> Result<ParsedUrl, ParseUrlError> {
    if line.is_empty() {
        return Err(ParseUrlError::Empty);
    }

    match Url::parse(line) {
        Ok(url) => Ok(build(&url, true, true)),
        Err(url::ParseError::RelativeUrlWithoutBase) => parse_schemeless(line),
        Err(err) => Err(err.into()),
    }
}

/// Re-parse a line `Url::parse` considered relative. The synthesized scheme
/// (and, for bare paths, the placeholder host) is not reported back.
fn parse_schemeless(line: &str) -> Result<ParsedUrl, ParseUrlError> {
    if let Some(rest) = line.strip_prefix("//") {
        if !rest.is_empty() {
            let url = Url::parse(&format!("http:{line}"))?;
            return Ok(build(&url, false, true));
        }
    }

    if line.starts_with('/') {
        let url = Url::parse(&format!("http://{PLACEHOLDER_AUTHORITY}{line}"))?;
        return Ok(build(&url, false, false));
    }

    let url = Url::parse(&format!("http://{line}"))?;
    Ok(build(&url, false, true))
}

fn build(url: &Url, real_scheme: bool, real_host: bool) -> ParsedUrl {
    let path = url.path().to_string();
    let path_decoded_lower = percent_decode_str(&path)
        .decode_utf8_lossy()
        .to_lowercase();

    ParsedUrl {
        scheme: real_scheme.then(|| url.scheme().to_string()),
        host: if real_host {
            url.host_str().map(str::to_string)
        } else {
            None
        },
        port: url.port(),
        path,
        path_decoded_lower,
        query: url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
    }
}
