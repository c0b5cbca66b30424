//! Rendering of surviving URLs.

use anyhow::Result;
use serde::Serialize;

use crate::config::{OutputFormat, SiftConfig};
use crate::score::ScoreResult;

/// JSON record for `--json` mode.
#[derive(Serialize)]
struct JsonRecord<'a> {
    url: &'a str,
    score: u32,
    rules: &'a [&'static str],
}

/// Renders one emitted URL according to the configured format.
///
/// Text mode: the original line, with `[<score>] ` prefixed when score
/// display is on and ` (<rule, rule, ...>)` appended when verbose and at
/// least one rule matched.
pub fn render(line: &str, result: &ScoreResult, cfg: &SiftConfig) -> Result<String> {
    match cfg.output {
        OutputFormat::Json => Ok(serde_json::to_string(&JsonRecord {
            url: line,
            score: result.total,
            rules: &result.matched,
        })?),
        OutputFormat::Text => {
            let mut out = if cfg.show_score {
                format!("[{}] {}", result.total, line)
            } else {
                line.to_string()
            };
            if cfg.verbose && !result.matched.is_empty() {
                out.push_str(&format!(" ({})", result.matched.join(", ")));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(total: u32, matched: Vec<&'static str>) -> ScoreResult {
        ScoreResult { total, matched }
    }

    #[test]
    fn plain_by_default() {
        let cfg = SiftConfig::default();
        let out = render("http://x.com/a", &result(6, vec!["sensitive-paths"]), &cfg).unwrap();
        assert_eq!(out, "http://x.com/a");
    }

    #[test]
    fn score_prefix() {
        let cfg = SiftConfig {
            show_score: true,
            ..Default::default()
        };
        let out = render("http://x.com/a", &result(6, vec!["sensitive-paths"]), &cfg).unwrap();
        assert_eq!(out, "[6] http://x.com/a");
    }

    #[test]
    fn verbose_appends_reasons_in_order() {
        let cfg = SiftConfig {
            verbose: true,
            show_score: true,
            ..Default::default()
        };
        let out = render(
            "http://x.com/a",
            &result(6, vec!["sql-injection", "sensitive-paths"]),
            &cfg,
        )
        .unwrap();
        assert_eq!(out, "[6] http://x.com/a (sql-injection, sensitive-paths)");
    }

    #[test]
    fn verbose_with_no_matches_appends_nothing() {
        let cfg = SiftConfig {
            verbose: true,
            min_score: 0,
            ..Default::default()
        };
        let out = render("http://x.com/a", &result(0, vec![]), &cfg).unwrap();
        assert_eq!(out, "http://x.com/a");
    }

    #[test]
    fn json_record_shape() {
        let cfg = SiftConfig {
            output: OutputFormat::Json,
            ..Default::default()
        };
        let out = render(
            "http://x.com/a?id=1",
            &result(3, vec!["sql-injection"]),
            &cfg,
        )
        .unwrap();
        assert_eq!(
            out,
            r#"{"url":"http://x.com/a?id=1","score":3,"rules":["sql-injection"]}"#
        );
    }
}
