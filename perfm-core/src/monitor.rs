//! Round-robin multiplexing across configured event groups and selected
//! processors (SPEC_FULL.md §4.4).

use std::time::Duration;

use crate::config::{Config, CpuSelector, PidSelector};
use crate::encoder::PmuEncoder;
use crate::error::Error;
use crate::group::{EventGroup, EventReading};
use crate::topology::Topology;
use crate::util::sleep_restart_on_signal;

/// One group's readings for one processor on one tick.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub cpu: i32,
    pub group_string_index: usize,
    pub iteration: u32,
    pub readings: Vec<EventReading>,
}

/// Drives a time-sliced round-robin over the configured groups, one group
/// per selected processor at a time.
pub struct Monitor<'a> {
    encoder: &'a dyn PmuEncoder,
    cpus: Vec<i32>,
    pid: i32,
    interval: Duration,
    loop_count: u32,
    /// `groups[g][c]` is the EventGroup for group-string `g` on
    /// `cpus[c]`; constructed group-major, torn down in reverse.
    groups: Vec<Vec<EventGroup>>,
}

impl<'a> Monitor<'a> {
    /// Resolve the cpu-list option into a concrete processor list,
    /// defaulting to "all online" (SPEC_FULL.md §4.4 `init`).
    fn resolve_cpus(config: &Config, topology: &Topology) -> Vec<i32> {
        match &config.cpu {
            CpuSelector::All => topology.online_cpus().into_iter().map(|c| c as i32).collect(),
            CpuSelector::List(list) => list.iter().map(|&c| c as i32).collect(),
        }
    }

    /// Construct one EventGroup per configured group string per selected
    /// processor (`|cpus| × |group_strings|` total).
    pub fn open(
        config: &'a Config,
        encoder: &'a dyn PmuEncoder,
        topology: &Topology,
    ) -> Result<Monitor<'a>, Error> {
        let cpus = Self::resolve_cpus(config, topology);
        let pid = match config.pid {
            PidSelector::Any => crate::counter::ANY,
            PidSelector::Pid(pid) => pid,
        };

        let mut groups = Vec::with_capacity(config.groups.len());
        for group_string in &config.groups {
            let mut per_cpu = Vec::with_capacity(cpus.len());
            for &cpu in &cpus {
                let group = EventGroup::open(
                    group_string,
                    encoder,
                    config.plm,
                    pid,
                    cpu,
                    !config.include_children,
                    config.include_children,
                    config.skip_on_error,
                )?;
                per_cpu.push(group);
            }
            groups.push(per_cpu);
        }

        let interval = Duration::from_secs_f64(config.interval_secs.max(Config::MIN_INTERVAL_SECS));

        Ok(Monitor {
            encoder,
            cpus,
            pid,
            interval,
            loop_count: config.loop_count,
            groups,
        })
    }

    /// Enter the round-robin loop: for each iteration, for each
    /// group-string, for each selected processor: start, sleep, stop,
    /// read, emit. Iterations proceed group-major so every processor
    /// observes the same event set simultaneously within one slice.
    pub fn run(&mut self, mut emit: impl FnMut(Snapshot)) -> Result<(), Error> {
        for iteration in 0..self.loop_count {
            for (group_idx, per_cpu) in self.groups.iter_mut().enumerate() {
                for group in per_cpu.iter() {
                    if let Err(err) = group.start() {
                        log::warn!("could not start group {group_idx}: {err}");
                    }
                }
                sleep_restart_on_signal(self.interval);
                for (cpu_idx, group) in per_cpu.iter_mut().enumerate() {
                    if let Err(err) = group.stop() {
                        log::warn!("could not stop group {group_idx}: {err}");
                    }
                    if let Err(err) = group.read() {
                        log::warn!("could not read group {group_idx}: {err}");
                        continue;
                    }
                    emit(Snapshot {
                        cpu: self.cpus.get(cpu_idx).copied().unwrap_or(crate::counter::ANY),
                        group_string_index: group_idx,
                        iteration,
                        readings: group.readings(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn encoder(&self) -> &dyn PmuEncoder {
        self.encoder
    }

    pub fn pid(&self) -> i32 {
        self.pid
    }

    pub fn cpus(&self) -> &[i32] {
        &self.cpus
    }
}

impl Drop for Monitor<'_> {
    /// Tears down all groups in reverse construction order.
    fn drop(&mut self) {
        while self.groups.pop().is_some() {}
    }
}
