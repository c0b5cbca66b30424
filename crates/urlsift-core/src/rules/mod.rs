//! The weighted heuristic rule set.
//!
//! Every rule is an independent, stateless predicate over a [`ParsedUrl`]
//! with a fixed name and positive weight. The registry order is stable so
//! that reason annotations come out deterministically; the score itself is
//! order-independent (a plain weighted sum).

mod injection;
mod params;
mod surface;

use crate::url_model::ParsedUrl;

/// A named, weighted predicate. Rules never mutate shared state, so the
/// whole set is safe to evaluate concurrently against one URL.
pub struct Rule {
    pub name: &'static str,
    pub weight: u32,
    pub check: fn(&ParsedUrl) -> bool,
}

/// The canonical rule registry, in annotation order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "sql-injection",
        weight: 3,
        check: injection::sql_injection,
    },
    Rule {
        name: "query-params",
        weight: 2,
        check: params::query_params,
    },
    Rule {
        name: "extensions",
        weight: 2,
        check: surface::extensions,
    },
    Rule {
        name: "sensitive-paths",
        weight: 3,
        check: surface::sensitive_paths,
    },
    Rule {
        name: "file-operations",
        weight: 3,
        check: params::file_operations,
    },
    Rule {
        name: "non-standard-port",
        weight: 1,
        check: surface::non_standard_port,
    },
    Rule {
        name: "ssrf-patterns",
        weight: 3,
        check: params::ssrf_patterns,
    },
    Rule {
        name: "command-injection",
        weight: 3,
        check: injection::command_injection,
    },
    Rule {
        name: "auth-session",
        weight: 2,
        check: params::auth_session,
    },
];
