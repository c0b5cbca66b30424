//! urlsift core: parse URL streams, score them against a weighted heuristic
//! rule set, deduplicate, and render the interesting ones.

pub mod config;
pub mod dedupe;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod rules;
pub mod score;
pub mod static_filter;
pub mod url_model;
