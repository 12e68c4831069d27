//! Immutable run configuration (SPEC_FULL.md §9: replaces the original's
//! global mutable options object) and the event-group file reader
//! (SPEC_FULL.md §6).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::flags::Plm;

/// Which processors a run targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpuSelector {
    All,
    List(Vec<usize>),
}

/// Which process a run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PidSelector {
    Any,
    Pid(i32),
}

/// A fully resolved, read-only configuration built once at startup and
/// passed by reference into [`crate::monitor::Monitor`] /
/// [`crate::top::TopEngine`]. Nothing downstream needs write access.
#[derive(Debug, Clone)]
pub struct Config {
    pub loop_count: u32,
    pub interval_secs: f64,
    /// One `String` per `;`-separated group-string from `-e`/`-i`; each
    /// element is itself a `,`-joined list of event names.
    pub groups: Vec<String>,
    pub output: Option<PathBuf>,
    pub cpu: CpuSelector,
    pub pid: PidSelector,
    pub plm: Plm,
    pub include_children: bool,
    pub skip_on_error: bool,
}

impl Config {
    /// Minimum honored interval; shorter requests are raised to
    /// [`Config::FALLBACK_INTERVAL_SECS`] (SPEC_FULL.md §4.4).
    pub const MIN_INTERVAL_SECS: f64 = 0.01;
    pub const FALLBACK_INTERVAL_SECS: f64 = 1.0;

    /// Validate cross-option constraints and clamp the interval.
    pub fn finish(mut self) -> Result<Config, Error> {
        if self.groups.is_empty() {
            return Err(Error::Config("no event groups configured".to_string()));
        }
        if self.interval_secs < Self::MIN_INTERVAL_SECS {
            log::warn!(
                "requested interval {}s is below the {}s minimum; raising to {}s",
                self.interval_secs,
                Self::MIN_INTERVAL_SECS,
                Self::FALLBACK_INTERVAL_SECS
            );
            self.interval_secs = Self::FALLBACK_INTERVAL_SECS;
        }
        if self.plm.is_empty() {
            log::warn!("privilege-level mask is empty; counters will count nothing");
        }
        Ok(self)
    }
}

/// Parse the `-e`/`--event` argument: `g1a,g1b;g2a,g2b` — `;` separates
/// groups, `,` joins event names within a group.
pub fn parse_event_flag(spec: &str) -> Vec<String> {
    spec.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse an event-group file (SPEC_FULL.md §6): blank lines and `#`
/// comments are ignored; a line consisting solely of `;` terminates the
/// current group; all other lines contribute one (trimmed) event name to
/// the current group; EOF terminates the final group.
pub fn parse_group_file(path: &Path) -> Result<Vec<String>, Error> {
    let contents = fs::read_to_string(path).map_err(Error::Io)?;
    Ok(parse_group_file_contents(&contents))
}

fn parse_group_file_contents(contents: &str) -> Vec<String> {
    let mut groups = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed == ";" {
            if !current.is_empty() {
                groups.push(current.join(","));
                current = Vec::new();
            }
            continue;
        }
        current.push(trimmed.to_string());
    }
    if !current.is_empty() {
        groups.push(current.join(","));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_event_flag_groups() {
        let groups = parse_event_flag("a,b;c,d");
        assert_eq!(groups, vec!["a,b", "c,d"]);
    }

    #[test]
    fn group_file_splits_on_semicolon_line_and_ignores_comments() {
        let contents = "\
# a comment
cycles
instructions
;
cache-misses
;
";
        let groups = parse_group_file_contents(contents);
        assert_eq!(groups, vec!["cycles,instructions", "cache-misses"]);
    }

    #[test]
    fn group_file_eof_terminates_final_group() {
        let contents = "cycles\ninstructions\n";
        let groups = parse_group_file_contents(contents);
        assert_eq!(groups, vec!["cycles,instructions"]);
    }

    #[test]
    fn group_file_ignores_blank_lines() {
        let contents = "\ncycles\n\ninstructions\n\n";
        let groups = parse_group_file_contents(contents);
        assert_eq!(groups, vec!["cycles,instructions"]);
    }

    #[test]
    fn short_interval_is_raised_to_fallback() {
        let config = Config {
            loop_count: 1,
            interval_secs: 0.001,
            groups: vec!["cycles".to_string()],
            output: None,
            cpu: CpuSelector::All,
            pid: PidSelector::Any,
            plm: Plm::ALL,
            include_children: false,
            skip_on_error: false,
        }
        .finish()
        .unwrap();
        assert_eq!(config.interval_secs, Config::FALLBACK_INTERVAL_SECS);
    }
}
