//! Command-line surface (SPEC_FULL.md §6): a `stat` subcommand driving the
//! round-robin [`perfm_core::Monitor`], and a `top` subcommand driving the
//! continuous [`perfm_core::TopEngine`].

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use perfm_core::config::{Config, CpuSelector, PidSelector};
use perfm_core::error::Error;
use perfm_core::flags::Plm;

#[derive(Debug, Parser)]
#[command(name = "perfm", version, about = "Performance-counter monitoring toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Round-robin event counting over one or more event groups.
    Stat(StatArgs),
    /// Continuous per-CPU utilization view.
    Top(TopArgs),
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Target processor(s): a comma-separated list, or `-1` for all online.
    #[arg(short = 'c', long, default_value = "-1")]
    pub cpu: String,

    /// Target process; `-1` means any.
    #[arg(short = 'p', long, default_value_t = -1)]
    pub pid: i32,

    /// Privilege-level mask, any combination of the letters u, k, h.
    #[arg(short = 'm', long, default_value = "ukh")]
    pub plm: String,
}

#[derive(Debug, Args)]
pub struct StatArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of round-robin passes.
    #[arg(short = 'l', long = "loop", default_value_t = 5)]
    pub loop_count: u32,

    /// Per-group duty cycle, in seconds.
    #[arg(short = 't', long, default_value_t = 1.0)]
    pub time: f64,

    /// `g1a,g1b;g2a,g2b`: `,` joins within a group, `;` separates groups.
    #[arg(short = 'e', long)]
    pub event: Option<String>,

    /// Event-group file; overrides `--event` when given.
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Snapshot destination; defaults to stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Enable child-task inheritance (disables group-read).
    #[arg(long = "incl-children")]
    pub incl_children: bool,

    /// Drop an event whose encoding fails instead of failing the group.
    #[arg(long)]
    pub skip_on_error: bool,
}

#[derive(Debug, Args)]
pub struct TopArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Seconds between refreshes.
    #[arg(long, default_value_t = 1.0)]
    pub delay: f64,

    /// Number of frames to render; 0 means run until interrupted.
    #[arg(long = "iter", default_value_t = 0)]
    pub iterations: u32,

    /// Print each frame as a block of lines instead of repainting in place.
    #[arg(long)]
    pub batch: bool,
}

/// Parse `-c`/`--cpu`: `-1` for all online processors, otherwise a
/// comma-separated list of processor numbers.
pub fn parse_cpu_selector(s: &str) -> Result<CpuSelector, Error> {
    let s = s.trim();
    if s == "-1" {
        return Ok(CpuSelector::All);
    }
    let mut cpus = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let cpu = part
            .parse::<i32>()
            .map_err(|_| Error::Config(format!("invalid cpu number `{part}`")))?;
        if cpu < 0 {
            return Err(Error::Config(format!(
                "cpu number must be >= 0 (use -1 alone for \"all\"), found `{part}`"
            )));
        }
        cpus.push(cpu as usize);
    }
    if cpus.is_empty() {
        return Err(Error::Config("empty --cpu list".to_string()));
    }
    Ok(CpuSelector::List(cpus))
}

pub fn parse_pid_selector(pid: i32) -> PidSelector {
    if pid < 0 {
        PidSelector::Any
    } else {
        PidSelector::Pid(pid)
    }
}

impl StatArgs {
    /// Resolve this subcommand's flags (plus an optional event-group
    /// file) into an immutable [`Config`].
    pub fn into_config(self) -> Result<Config, Error> {
        let groups = match &self.input {
            Some(path) => perfm_core::config::parse_group_file(path)?,
            None => {
                let event = self.event.ok_or_else(|| {
                    Error::Config("one of --event or --input is required".to_string())
                })?;
                perfm_core::config::parse_event_flag(&event)
            }
        };

        Config {
            loop_count: self.loop_count,
            interval_secs: self.time,
            groups,
            output: self.output,
            cpu: parse_cpu_selector(&self.common.cpu)?,
            pid: parse_pid_selector(self.common.pid),
            plm: Plm::parse(&self.common.plm)?,
            include_children: self.incl_children,
            skip_on_error: self.skip_on_error,
        }
        .finish()
    }
}
