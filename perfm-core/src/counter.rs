//! One kernel counter: the `Event` of SPEC_FULL.md §4.1.
//!
//! Named `Counter` here (following the teacher's `counter.rs`) to avoid
//! colliding with [`crate::events::Event`], the symbolic-kind enum this
//! type is opened from.

use std::fs::File;
use std::io;
use std::os::fd::{AsRawFd, FromRawFd, RawFd};

use crate::encoder::PmuEncoder;
use crate::error::{Error, OpenErrorKind};
use crate::flags::{Plm, ReadFormat};

/// `-1` in both the `pid` and `cpu` arguments of `perf_event_open` ask the
/// kernel for "any process" / "any processor" respectively.
pub const ANY: i32 = -1;

/// The `(raw_count, time_enabled, time_running)` triple the kernel returns
/// from a read, exactly as SPEC_FULL.md §3 describes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountAndTime {
    pub raw: u64,
    pub time_enabled: u64,
    pub time_running: u64,
}

impl CountAndTime {
    /// Single-point scaling: `raw * time_enabled / time_running`.
    ///
    /// Returns 0 (with a warning) when `time_running == 0`, since the
    /// formula is undefined there; per SPEC_FULL.md §4.1 this is an
    /// expected boundary condition, not a bug, on a counter that was never
    /// scheduled.
    pub fn scale(&self) -> u64 {
        if self.time_running > self.time_enabled {
            log::warn!(
                "time_running ({}) > time_enabled ({}); kernel contract violated, treating as unscaled",
                self.time_running,
                self.time_enabled
            );
            return self.raw;
        }
        if self.time_running == 0 {
            if self.raw != 0 {
                log::warn!("time_running == 0 but raw count is {}; scaling undefined, reporting 0", self.raw);
            }
            return 0;
        }
        let scaled = self.raw as f64 * self.time_enabled as f64 / self.time_running as f64;
        scaled as u64
    }
}

/// One open performance counter.
pub struct Counter {
    file: File,
    id: u64,
    read_format: ReadFormat,
    /// Current and previous `(raw, enabled, running)` observations.
    pub current: CountAndTime,
    pub previous: Option<CountAndTime>,
}

impl Counter {
    /// Encode `name` via `encoder`, apply group discipline, and open the
    /// kernel counter. `leader` is `None` when this Counter is itself the
    /// leader being constructed; `Some(leader_fd)` wires a non-leader into
    /// an already-open group.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        name: &str,
        encoder: &dyn PmuEncoder,
        plm: Plm,
        pid: i32,
        cpu: i32,
        leader: Option<RawFd>,
        is_leader: bool,
        group_read: bool,
        inherit: bool,
    ) -> Result<Counter, Error> {
        let mut attr = encoder.encode(name, plm)?;

        let mut read_format = ReadFormat::default();
        if group_read && is_leader {
            read_format |= ReadFormat::GROUP;
        }
        attr.read_format = read_format.bits();
        attr.set_disabled(u64::from(is_leader));
        attr.set_inherit(u64::from(inherit));

        let group_fd = leader.unwrap_or(ANY);
        let result = unsafe { perfm_sys::perf_event_open(&mut attr, pid, cpu, group_fd, 0u64) };
        if result < 0 {
            let err = io::Error::last_os_error();
            return Err(Error::Open {
                name: name.to_string(),
                kind: OpenErrorKind::from_errno(err),
            });
        }

        let file = unsafe { File::from_raw_fd(result) };
        Ok(Counter {
            file,
            id: 0,
            read_format,
            current: CountAndTime::default(),
            previous: None,
        })
    }

    fn ioctl(&self, op: &'static str, f: impl FnOnce(RawFd) -> i32) -> Result<(), Error> {
        let ret = f(self.file.as_raw_fd());
        if ret < 0 {
            return Err(Error::Ioctl {
                op,
                name: String::new(),
                source: io::Error::last_os_error(),
            });
        }
        Ok(())
    }

    pub fn start(&self) -> Result<(), Error> {
        self.ioctl("start", |fd| unsafe {
            perfm_sys::ioctls::ENABLE(fd, 0)
        })
    }

    pub fn stop(&self) -> Result<(), Error> {
        self.ioctl("stop", |fd| unsafe { perfm_sys::ioctls::DISABLE(fd, 0) })
    }

    pub fn reset(&self) -> Result<(), Error> {
        self.ioctl("reset", |fd| unsafe { perfm_sys::ioctls::RESET(fd, 0) })
    }

    pub fn refresh(&self, n: i32) -> Result<(), Error> {
        self.ioctl("refresh", |fd| unsafe { perfm_sys::ioctls::REFRESH(fd, n) })
    }

    /// Read this Counter's own tuple (per-member mode, SPEC_FULL.md §4.2).
    /// Rotates the prior `current` into `previous`.
    pub fn read(&mut self) -> Result<(), Error> {
        use std::io::Read;
        let mut buf = [0u8; 24];
        let n = (&self.file)
            .read(&mut buf)
            .map_err(|_| Error::Read { name: String::new() })?;
        if n != buf.len() {
            return Err(Error::Read { name: String::new() });
        }
        let raw = u64::from_ne_bytes(buf[0..8].try_into().unwrap());
        let enabled = u64::from_ne_bytes(buf[8..16].try_into().unwrap());
        let running = u64::from_ne_bytes(buf[16..24].try_into().unwrap());
        self.previous = Some(self.current);
        self.current = CountAndTime {
            raw,
            time_enabled: enabled,
            time_running: running,
        };
        Ok(())
    }

    /// Install a group-read tuple directly (used by [`crate::group::EventGroup`]
    /// when it performs the single packed read on the leader's fd).
    pub(crate) fn set_current(&mut self, value: CountAndTime) {
        self.previous = Some(self.current);
        self.current = value;
    }

    /// Two-point delta scaling: `(raw_now - raw_prev) * (enabled_now -
    /// enabled_prev) / (running_now - running_prev)`.
    ///
    /// Returns 0 (with a warning) when there is no prior observation or
    /// `running_now <= running_prev`, per SPEC_FULL.md §4.1.
    pub fn delta(&self) -> u64 {
        let Some(prev) = self.previous else {
            return 0;
        };
        if self.current.time_running <= prev.time_running {
            log::warn!("non-increasing time_running across reads; reporting delta as 0");
            return 0;
        }
        let d_raw = self.current.raw.wrapping_sub(prev.raw) as f64;
        let d_enabled = (self.current.time_enabled - prev.time_enabled) as f64;
        let d_running = (self.current.time_running - prev.time_running) as f64;
        (d_raw * d_enabled / d_running) as u64
    }

    /// Single-point scaling of the current observation.
    pub fn scale(&self) -> u64 {
        self.current.scale()
    }

    pub fn read_format(&self) -> ReadFormat {
        self.read_format
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_zero_on_zero_duration_window() {
        let c = CountAndTime {
            raw: 0,
            time_enabled: 0,
            time_running: 0,
        };
        assert_eq!(c.scale(), 0);
    }

    #[test]
    fn scale_handles_full_duty_cycle() {
        let c = CountAndTime {
            raw: 1000,
            time_enabled: 500,
            time_running: 500,
        };
        assert_eq!(c.scale(), 1000);
    }

    #[test]
    fn scale_corrects_partial_duty_cycle() {
        let c = CountAndTime {
            raw: 1000,
            time_enabled: 1000,
            time_running: 500,
        };
        assert_eq!(c.scale(), 2000);
    }
}
