//! Query-parameter heuristics: the interesting-parameter sub-classifier and
//! the rules that read parameter names for capability hints.

use crate::url_model::ParsedUrl;

/// Key substrings that suggest a dynamic or dangerous capability.
const DYNAMIC_KEY_HINTS: &[&str] = &[
    "redirect", "debug", "test", "file", "path", "template", "include", "require", "url", "uri",
    "src", "href", "func", "callback", "exec", "cmd", "command", "query", "search", "q",
];

/// Value characters that hint at structured or injected payloads.
const SUSPICIOUS_VALUE_CHARS: &[char] = &['{', '[', '/', '\\', '<', '>', '(', ')'];

/// Key substrings that suggest file or directory I/O.
const FILE_KEY_HINTS: &[&str] = &[
    "file", "path", "dir", "folder", "read", "write", "upload", "download",
];

/// Raw-value fragments pointing at traversal or filesystem roots. Matched
/// case-sensitively against the decoded value.
const TRAVERSAL_FRAGMENTS: &[&str] = &["../", "..\\", "/etc/", "c:\\"];

/// Key substrings that suggest a redirect/callback/target parameter.
const REDIRECT_KEY_HINTS: &[&str] = &[
    "url", "uri", "redirect", "return", "next", "callback", "dest", "target",
];

/// Value fragments that point a redirect-shaped parameter at loopback,
/// link-local, or wildcard addresses.
const SSRF_TARGET_FRAGMENTS: &[&str] = &["localhost", "127.0.0.1", "169.254", "0.0.0.0"];

/// Key substrings that suggest a credential, token, or session parameter.
const CREDENTIAL_KEY_HINTS: &[&str] = &[
    "token", "session", "auth", "key", "apikey", "api_key", "password", "passwd", "secret", "jwt",
];

/// Classifies one key/value pair. Tracking parameters are excluded before
/// any value inspection, so `utm_source=<payload>` stays boring.
pub(crate) fn is_interesting_param(key: &str, value: &str) -> bool {
    let k = key.to_lowercase();
    let v = value.to_lowercase();

    if k.starts_with("utm_")
        || k.starts_with("ga_")
        || matches!(k.as_str(), "fbclid" | "gclid" | "ref" | "source")
    {
        return false;
    }

    let suspicious_value = v.starts_with("http")
        || v.contains(SUSPICIOUS_VALUE_CHARS)
        || v.contains("eyj")
        || v.contains("base64")
        || v.contains("..")
        || v.contains("%00")
        || v.contains('\0');

    suspicious_value || DYNAMIC_KEY_HINTS.iter().any(|hint| k.contains(hint))
}

/// At least one pair classified interesting by [`is_interesting_param`].
pub(super) fn query_params(url: &ParsedUrl) -> bool {
    url.query_pairs()
        .iter()
        .any(|(k, v)| is_interesting_param(k, v))
}

/// File-I/O-shaped keys, or traversal/filesystem-root fragments in values.
pub(super) fn file_operations(url: &ParsedUrl) -> bool {
    url.query_pairs().iter().any(|(key, value)| {
        let kl = key.to_lowercase();
        FILE_KEY_HINTS.iter().any(|hint| kl.contains(hint))
            || TRAVERSAL_FRAGMENTS.iter().any(|frag| value.contains(frag))
    })
}

/// A redirect-shaped key whose value is an absolute URL or references
/// loopback/link-local/wildcard addresses.
pub(super) fn ssrf_patterns(url: &ParsedUrl) -> bool {
    url.query_pairs().iter().any(|(key, value)| {
        let kl = key.to_lowercase();
        REDIRECT_KEY_HINTS.iter().any(|hint| kl.contains(hint))
            && (value.starts_with("http")
                || value.starts_with("//")
                || SSRF_TARGET_FRAGMENTS.iter().any(|frag| value.contains(frag)))
    })
}

/// Credential/token/session-shaped key names.
pub(super) fn auth_session(url: &ParsedUrl) -> bool {
    url.query_pairs().iter().any(|(key, _)| {
        let kl = key.to_lowercase();
        CREDENTIAL_KEY_HINTS.iter().any(|hint| kl.contains(hint))
    })
}
