//! The sift pipeline: line → parse → static filter → dedupe → score →
//! threshold → render.
//!
//! Generic over reader and writer so tests can drive it with in-memory
//! buffers. Malformed lines are skipped; only a writer failure is fatal.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::config::SiftConfig;
use crate::dedupe::{self, SeenSet};
use crate::output;
use crate::score;
use crate::static_filter;
use crate::url_model::ParsedUrl;

/// Counters for one run, reported at debug level by the CLI.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SiftStats {
    /// Non-blank input lines.
    pub lines: u64,
    /// Lines dropped because they were not UTF-8 or did not parse as URLs.
    pub parse_failures: u64,
    /// Lines dropped by the static-asset filter.
    pub static_skipped: u64,
    /// Lines suppressed as duplicates.
    pub deduped: u64,
    /// Lines scored below the emission threshold.
    pub below_threshold: u64,
    /// Lines written to the output.
    pub emitted: u64,
}

/// Runs the pipeline until the input is exhausted.
///
/// Lines are read as raw bytes so an undecodable line is dropped like any
/// other malformed line. A read error on the input stream is reported and
/// ends the loop without failing the run; write errors propagate.
pub fn sift<R: BufRead, W: Write>(mut input: R, mut out: W, cfg: &SiftConfig) -> Result<SiftStats> {
    let seen = SeenSet::new();
    let mut stats = SiftStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::error!("error reading input: {err}");
                break;
            }
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(err) => {
                stats.lines += 1;
                stats.parse_failures += 1;
                tracing::debug!("skipping undecodable input line: {err}");
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }
        stats.lines += 1;

        let parsed = match ParsedUrl::parse(line) {
            Ok(parsed) => parsed,
            Err(err) => {
                stats.parse_failures += 1;
                tracing::debug!("failed to parse URL {line}: {err}");
                continue;
            }
        };

        // Script inclusion disables static filtering entirely, not just for
        // script extensions.
        if cfg.exclude_static
            && !cfg.include_scripts
            && static_filter::is_boring(&parsed, cfg.include_scripts)
        {
            stats.static_skipped += 1;
            continue;
        }

        if cfg.dedupe && !seen.check_and_insert(dedupe::dedupe_key(&parsed)) {
            stats.deduped += 1;
            continue;
        }

        let result = score::score(&parsed);
        if result.total < cfg.min_score {
            stats.below_threshold += 1;
            continue;
        }

        writeln!(out, "{}", output::render(line, &result, cfg)?)?;
        stats.emitted += 1;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, cfg: &SiftConfig) -> (Vec<String>, SiftStats) {
        let mut out = Vec::new();
        let stats = sift(Cursor::new(input), &mut out, cfg).unwrap();
        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        (lines, stats)
    }

    #[test]
    fn blank_lines_and_whitespace_ignored() {
        let (lines, stats) = run("\n  \nhttp://x.com/admin\n", &SiftConfig::default());
        assert_eq!(lines, vec!["http://x.com/admin"]);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.emitted, 1);
    }

    #[test]
    fn undecodable_line_skipped_without_halting() {
        let mut input = Vec::new();
        input.extend_from_slice(b"http://x.com/admin\n");
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"http://y.com/admin\n");

        let mut out = Vec::new();
        let stats = sift(Cursor::new(input), &mut out, &SiftConfig::default()).unwrap();
        let lines: Vec<String> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();

        assert_eq!(lines, vec!["http://x.com/admin", "http://y.com/admin"]);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.parse_failures, 1);
        assert_eq!(stats.emitted, 2);
    }

    #[test]
    fn malformed_line_skipped_without_halting() {
        let input = "http://[broken\nhttp://x.com/admin\n";
        let (lines, stats) = run(input, &SiftConfig::default());
        assert_eq!(lines, vec!["http://x.com/admin"]);
        assert_eq!(stats.parse_failures, 1);
        assert_eq!(stats.emitted, 1);
    }

    #[test]
    fn threshold_is_inclusive() {
        let cfg = SiftConfig {
            min_score: 3,
            ..Default::default()
        };
        // sensitive-paths alone scores exactly 3.
        let (lines, _) = run("http://x.com/admin\n", &cfg);
        assert_eq!(lines.len(), 1);

        let cfg = SiftConfig {
            min_score: 4,
            ..cfg
        };
        let (lines, stats) = run("http://x.com/admin\n", &cfg);
        assert!(lines.is_empty());
        assert_eq!(stats.below_threshold, 1);
    }

    #[test]
    fn dedupe_on_suppresses_second_occurrence() {
        let input = "http://x.com/admin?id=1\nhttp://x.com/admin?id=2\n";
        let (lines, stats) = run(input, &SiftConfig::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(stats.deduped, 1);

        let cfg = SiftConfig {
            dedupe: false,
            ..Default::default()
        };
        let (lines, stats) = run(input, &cfg);
        assert_eq!(lines.len(), 2);
        assert_eq!(stats.deduped, 0);
    }

    #[test]
    fn static_assets_filtered_by_default() {
        let (lines, stats) = run("http://cdn.example.com/app.min.js\n", &SiftConfig::default());
        assert!(lines.is_empty());
        assert_eq!(stats.static_skipped, 1);
    }

    #[test]
    fn include_scripts_bypasses_static_filter() {
        let cfg = SiftConfig {
            include_scripts: true,
            ..Default::default()
        };
        // Even a plain image passes the filter stage while scripts are
        // included; it still needs to reach the score threshold.
        let (_, stats) = run("http://cdn.example.com/logo.png\n", &cfg);
        assert_eq!(stats.static_skipped, 0);

        // A sensitive-path script now survives end to end.
        let (lines, _) = run("http://x.com/admin/app.js\n", &cfg);
        assert_eq!(lines, vec!["http://x.com/admin/app.js"]);
    }

    #[test]
    fn tracking_key_does_not_rescue_a_boring_url() {
        let (lines, _) = run(
            "http://x.com/home?utm_source=evil<script>\n",
            &SiftConfig::default(),
        );
        assert!(lines.is_empty());
    }

    #[test]
    fn score_and_verbose_annotations() {
        let cfg = SiftConfig {
            show_score: true,
            verbose: true,
            ..Default::default()
        };
        let (lines, _) = run("http://example.com/admin/login?id=1' OR '1'='1\n", &cfg);
        assert_eq!(
            lines,
            vec![
                "[6] http://example.com/admin/login?id=1' OR '1'='1 (sql-injection, sensitive-paths)"
            ]
        );
    }
}
