//! `EventGroup`: a set of [`Counter`]s the kernel schedules onto the PMU as
//! a unit (SPEC_FULL.md §4.2).

use crate::counter::{CountAndTime, Counter, ANY};
use crate::encoder::PmuEncoder;
use crate::error::Error;
use crate::flags::Plm;

/// Hard ceiling on events per group; the PMU rarely exposes more than a
/// handful of programmable counters plus a couple of fixed ones.
pub const MAX_GROUP_SIZE: usize = 8;

/// One group-read or one row of a per-member read.
#[derive(Debug, Clone)]
pub struct EventReading {
    pub name: String,
    pub current: CountAndTime,
    pub previous: Option<CountAndTime>,
}

/// A set of Events scheduled as a unit.
pub struct EventGroup {
    names: Vec<String>,
    counters: Vec<Counter>,
    group_read: bool,
    cpu: i32,
    pid: i32,
}

impl EventGroup {
    /// Split `event_list` on commas, parse `plm_string`, and open one
    /// Counter per name in list order, wiring each non-leader to the
    /// leader's file descriptor. `skip_on_error` drops an Event whose
    /// encoding fails instead of failing the whole group.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        event_list: &str,
        encoder: &dyn PmuEncoder,
        plm: Plm,
        pid: i32,
        cpu: i32,
        group_read: bool,
        inherit: bool,
        skip_on_error: bool,
    ) -> Result<EventGroup, Error> {
        if group_read && inherit {
            return Err(Error::Config(
                "--incl-children is incompatible with group-read mode".to_string(),
            ));
        }

        let names = parse_names(event_list)?;

        let mut counters: Vec<Counter> = Vec::with_capacity(names.len());
        let mut opened_names = Vec::with_capacity(names.len());
        let mut leader_fd = None;

        for (i, name) in names.iter().enumerate() {
            let is_leader = i == 0;
            match Counter::open(
                name,
                encoder,
                plm,
                pid,
                cpu,
                leader_fd,
                is_leader,
                group_read,
                inherit,
            ) {
                Ok(counter) => {
                    if is_leader {
                        leader_fd = Some(counter.as_raw_fd());
                    }
                    opened_names.push(name.clone());
                    counters.push(counter);
                }
                Err(err) if skip_on_error && !is_leader => {
                    log::warn!("dropping event `{name}`: {err}");
                }
                Err(err) => return Err(err),
            }
        }

        if counters.is_empty() {
            return Err(Error::Config(format!(
                "every event in group `{event_list}` failed to open"
            )));
        }

        Ok(EventGroup {
            names: opened_names,
            counters,
            group_read,
            cpu,
            pid,
        })
    }

    fn leader(&self) -> &Counter {
        &self.counters[0]
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn cpu(&self) -> i32 {
        self.cpu
    }

    pub fn pid(&self) -> i32 {
        self.pid
    }

    /// `start`/`stop`/`reset` act on the leader only; the kernel applies
    /// them to every member atomically.
    pub fn start(&self) -> Result<(), Error> {
        self.leader().start()
    }

    pub fn stop(&self) -> Result<(), Error> {
        self.leader().stop()
    }

    pub fn reset(&self) -> Result<(), Error> {
        self.leader().reset()
    }

    /// Read every member's current tuple. In group-read mode this issues a
    /// single syscall on the leader's descriptor and distributes the
    /// packed layout into each member; otherwise it loops, calling each
    /// Counter's own `read`.
    pub fn read(&mut self) -> Result<(), Error> {
        if self.group_read {
            self.read_group()
        } else {
            self.read_per_member()
        }
    }

    fn read_per_member(&mut self) -> Result<(), Error> {
        for (name, counter) in self.names.iter().zip(self.counters.iter_mut()) {
            if let Err(err) = counter.read() {
                log::warn!("read failed for event `{name}`: {err}");
            }
        }
        Ok(())
    }

    /// Packed layout: `{ nr, time_enabled, time_running, value[0..nr] }`,
    /// each field a native-endian u64 (invariant 3, spec §8).
    fn read_group(&mut self) -> Result<(), Error> {
        let nr = self.counters.len();
        let mut buf = vec![0u8; (3 + nr) * 8];
        let leader_name = self.names[0].clone();
        let fd = self.leader().as_raw_fd();

        let n = unsafe { libc::read(fd, buf.as_mut_ptr() as *mut libc::c_void, buf.len()) };
        if n < 0 || n as usize != buf.len() {
            return Err(Error::Read { name: leader_name });
        }

        let read_u64 = |offset: usize| -> u64 {
            u64::from_ne_bytes(buf[offset..offset + 8].try_into().unwrap())
        };

        let reported_nr = read_u64(0) as usize;
        if reported_nr != nr {
            log::warn!(
                "group read reported {reported_nr} members, expected {nr}; trusting the group's own count"
            );
        }
        let time_enabled = read_u64(8);
        let time_running = read_u64(16);

        for (i, counter) in self.counters.iter_mut().enumerate() {
            let raw = read_u64(24 + i * 8);
            counter.set_current(CountAndTime {
                raw,
                time_enabled,
                time_running,
            });
        }
        Ok(())
    }

    /// Current readings, most useful for emitting a snapshot.
    pub fn readings(&self) -> Vec<EventReading> {
        self.names
            .iter()
            .zip(self.counters.iter())
            .map(|(name, counter)| EventReading {
                name: name.clone(),
                current: counter.current,
                previous: counter.previous,
            })
            .collect()
    }

    /// Diagnostic dump; format is unspecified by the interface contract.
    pub fn print(&self) {
        println!(
            "group leader={} size={} cpu={} pid={}",
            self.leader().as_raw_fd(),
            self.len(),
            if self.cpu == ANY { -1 } else { self.cpu },
            if self.pid == ANY { -1 } else { self.pid },
        );
        for reading in self.readings() {
            println!(
                "  {}: raw={} enabled={} running={}",
                reading.name,
                reading.current.raw,
                reading.current.time_enabled,
                reading.current.time_running,
            );
        }
    }
}

impl Drop for EventGroup {
    /// Counters are closed (their `File` dropped) in reverse creation
    /// order, per SPEC_FULL.md §4.2's group lifecycle.
    fn drop(&mut self) {
        while self.counters.pop().is_some() {}
    }
}

/// Split a comma-joined event list into trimmed, non-empty names, honoring
/// [`MAX_GROUP_SIZE`].
fn parse_names(event_list: &str) -> Result<Vec<String>, Error> {
    let mut names = Vec::new();
    for raw in event_list.split(',') {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }
        names.push(name.to_string());
    }
    if names.len() > MAX_GROUP_SIZE {
        return Err(Error::Config(format!(
            "event group `{event_list}` has {} events, exceeds the maximum of {MAX_GROUP_SIZE}",
            names.len()
        )));
    }
    if names.is_empty() {
        return Err(Error::Config(format!("empty event group `{event_list}`")));
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_comma_joined_names() {
        let names = parse_names(" cycles , instructions ").unwrap();
        assert_eq!(names, vec!["cycles", "instructions"]);
    }

    #[test]
    fn rejects_empty_group() {
        assert!(parse_names("").is_err());
        assert!(parse_names(" , ,").is_err());
    }

    #[test]
    fn rejects_oversized_group() {
        let list = (0..MAX_GROUP_SIZE + 1)
            .map(|i| format!("ev{i}"))
            .collect::<Vec<_>>()
            .join(",");
        assert!(parse_names(&list).is_err());
    }
}
