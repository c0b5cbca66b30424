//! Injection-payload heuristics over query values.

use crate::url_model::ParsedUrl;

const SQL_KEYWORDS: &[&str] = &["select", "union", "insert", "update", "delete", "drop"];

/// Shell metacharacters and command-substitution sequences, matched against
/// the raw decoded value so case and symbols survive intact.
const SHELL_SEQUENCES: &[&str] = &[";", "|", "`", "$()", "&&", "||"];

/// SQL keywords in any value, or an id/user-shaped key name.
pub(super) fn sql_injection(url: &ParsedUrl) -> bool {
    url.query_pairs().iter().any(|(key, value)| {
        let kl = key.to_lowercase();
        let vl = value.to_lowercase();
        SQL_KEYWORDS.iter().any(|kw| vl.contains(kw)) || kl.contains("id") || kl.contains("user")
    })
}

/// Any value carrying a shell metacharacter or substitution sequence.
pub(super) fn command_injection(url: &ParsedUrl) -> bool {
    url.query_pairs()
        .iter()
        .any(|(_, value)| SHELL_SEQUENCES.iter().any(|seq| value.contains(seq)))
}
