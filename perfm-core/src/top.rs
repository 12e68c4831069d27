//! Continuous per-CPU utilization sampling (SPEC_FULL.md §4.5).

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::config::{Config, CpuSelector};
use crate::cpufreq::CpuFrequency;
use crate::encoder::PmuEncoder;
use crate::error::Error;
use crate::group::EventGroup;
use crate::topology::Topology;
use crate::util::sleep_restart_on_signal;

/// Set by [`install_interrupt_handler`]; the top loop checks it between
/// iterations and exits cooperatively rather than being torn down
/// mid-tick (SPEC_FULL.md §5 cancellation model).
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_sigint(_signum: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Install a `SIGINT` handler that sets the cooperative interrupt flag
/// [`TopEngine::run`] polls between iterations.
pub fn install_interrupt_handler() {
    unsafe {
        libc::signal(libc::SIGINT, handle_sigint as usize);
    }
}

pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// One rendered line: `CpuNN : F.FGHz, usr: P%, sys: P%, idle: P%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub cpu: i32,
    pub freq_ghz: f64,
    pub usr: f64,
    pub sys: f64,
    pub idle: f64,
}

/// Fixed two-event (user-cycles, kernel-cycles) group-read engine,
/// specialized for the continuous "cpu-utilization" display.
pub struct TopEngine {
    cpus: Vec<i32>,
    groups: Vec<EventGroup>,
    delay: Duration,
    iterations: u32,
    freq: CpuFrequency,
}

impl TopEngine {
    pub fn open(
        config: &Config,
        encoder: &dyn PmuEncoder,
        topology: &Topology,
        iterations: u32,
        delay_secs: f64,
    ) -> Result<TopEngine, Error> {
        let cpus: Vec<i32> = match &config.cpu {
            CpuSelector::All => topology.online_cpus().into_iter().map(|c| c as i32).collect(),
            CpuSelector::List(list) => list.iter().map(|&c| c as i32).collect(),
        };

        let mut groups = Vec::with_capacity(cpus.len());
        for &cpu in &cpus {
            // Group-read is incompatible with child-task inheritance; the
            // engine always forces inherit off (spec §4.5).
            let group = EventGroup::open(
                "cycles:u,cycles:k",
                encoder,
                config.plm,
                crate::counter::ANY,
                cpu,
                true,
                false,
                config.skip_on_error,
            )?;
            groups.push(group);
        }

        Ok(TopEngine {
            cpus,
            groups,
            delay: Duration::from_secs_f64(delay_secs.max(0.0)),
            iterations,
            freq: CpuFrequency::read()?,
        })
    }

    /// Start every group once (a leader opens with `disabled` set, so
    /// nothing counts until this `ENABLE` ioctl fires), then take a priming
    /// read to seed each counter's baseline before the first delta is
    /// computed. Matches `perfm_top.cpp`'s one-time start-then-seed before
    /// its sleep loop.
    fn start_and_prime(&mut self) {
        for (cpu, group) in self.cpus.iter().zip(self.groups.iter_mut()) {
            if let Err(err) = group.start() {
                log::warn!("could not start top group for cpu{cpu}: {err}");
            }
            if let Err(err) = group.read() {
                log::warn!("could not prime top group for cpu{cpu}: {err}");
            }
        }
    }

    /// Sleep `delay - eps` (eps uniform in [-10ms, +10ms], to de-sync
    /// concurrent instances), read all groups, and emit one [`Frame`] per
    /// processor via `emit`. Stops after `iterations` frames or when the
    /// cooperative interrupt flag is observed between iterations.
    pub fn run(&mut self, mut emit: impl FnMut(&[Frame])) -> Result<(), Error> {
        self.start_and_prime();

        // `iterations == 0` means "run until interrupted".
        let mut remaining = self.iterations;
        let infinite = self.iterations == 0;
        while (infinite || remaining > 0) && !interrupted() {
            let eps = jitter_millis();
            let sleep_for = self.delay.saturating_sub(Duration::from_millis(eps.unsigned_abs()));
            sleep_restart_on_signal(sleep_for);

            let mut frames = Vec::with_capacity(self.groups.len());
            for (cpu, group) in self.cpus.iter().zip(self.groups.iter_mut()) {
                if let Err(err) = group.read() {
                    log::warn!("top read failed for cpu{cpu}: {err}");
                    continue;
                }
                let readings = group.readings();
                let Some(user) = readings.first() else { continue };
                let Some(kernel) = readings.get(1) else { continue };

                let user_delta = delta_raw(user.current.raw, user.previous.map(|p| p.raw));
                let kernel_delta = delta_raw(kernel.current.raw, kernel.previous.map(|p| p.raw));
                let freq_mhz = self.freq.mhz(*cpu as usize).unwrap_or(0.0);
                let expected = self.delay.as_secs_f64() * freq_mhz * 1e6;

                let (usr, sys) = if expected > 0.0 {
                    (
                        (100.0 * user_delta as f64 / expected).min(100.0).max(0.0),
                        (100.0 * kernel_delta as f64 / expected).min(100.0).max(0.0),
                    )
                } else {
                    (0.0, 0.0)
                };
                let idle = (100.0 - usr - sys).max(0.0);

                frames.push(Frame {
                    cpu: *cpu,
                    freq_ghz: freq_mhz / 1000.0,
                    usr,
                    sys,
                    idle,
                });
            }
            emit(&frames);
            if !infinite {
                remaining -= 1;
            }
        }
        Ok(())
    }
}

fn delta_raw(current: u64, previous: Option<u64>) -> u64 {
    match previous {
        Some(prev) if current >= prev => current - prev,
        _ => 0,
    }
}

/// A small jitter generator: derives ±10ms from the low bits of the wall
/// clock rather than pulling in a `rand` dependency this crate has no other
/// use for.
fn jitter_millis() -> i64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0) as i64;
    (nanos % 21) - 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_raw_is_zero_on_non_increasing_counts() {
        assert_eq!(delta_raw(100, Some(150)), 0);
        assert_eq!(delta_raw(100, None), 0);
        assert_eq!(delta_raw(150, Some(100)), 50);
    }

    #[test]
    fn frame_percentages_clamp_and_sum_near_100() {
        let delay = Duration::from_secs_f64(1.0);
        let freq_mhz = 1000.0;
        let expected = delay.as_secs_f64() * freq_mhz * 1e6;
        let user_delta = (expected * 0.6) as u64;
        let kernel_delta = (expected * 0.3) as u64;
        let usr = (100.0 * user_delta as f64 / expected).min(100.0).max(0.0);
        let sys = (100.0 * kernel_delta as f64 / expected).min(100.0).max(0.0);
        let idle = (100.0 - usr - sys).max(0.0);
        assert!((usr - 60.0).abs() < 1.0);
        assert!((sys - 30.0).abs() < 1.0);
        assert!((usr + sys + idle - 100.0).abs() < 1.0);
    }
}
