//! Weighted scoring over the rule registry.

use crate::rules::RULES;
use crate::url_model::ParsedUrl;

/// Outcome of evaluating every rule against one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    /// Sum of the weights of all matching rules. Never negative.
    pub total: u32,
    /// Names of the matching rules, in registry order.
    pub matched: Vec<&'static str>,
}

/// Applies the full rule set. Pure: no shared state, re-evaluation always
/// yields the same result.
pub fn score(url: &ParsedUrl) -> ScoreResult {
    let mut total = 0;
    let mut matched = Vec::new();

    for rule in RULES {
        if (rule.check)(url) {
            total += rule.weight;
            matched.push(rule.name);
        }
    }

    ScoreResult { total, matched }
}
