//! End-to-end scenarios from SPEC_FULL.md §8 (S1-S6).
//!
//! These exercise real hardware counters and, for the topology-restoration
//! scenario, a root-only sysfs write. They're `#[ignore]`d by default so a
//! plain `cargo test` doesn't fail on CI sandboxes or VMs without PMU
//! access; run with `cargo test -- --ignored` on real hardware. Mirrors
//! how `perf-event`'s own tests gate on `#[cfg(target_os = "linux")]`.

use std::process::Command;

fn perfm() -> Command {
    Command::new(env!("CARGO_BIN_EXE_perfm"))
}

/// S1 - single event, single CPU, single tick.
#[test]
#[ignore]
fn single_event_single_cpu_single_tick() {
    let output = perfm()
        .args(["stat", "--event", "cycles", "--cpu", "0", "--pid", "-1", "--time", "0.1", "--loop", "1"])
        .output()
        .expect("failed to run perfm");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("iter=")).count(), 1);
}

/// S2 - two-event group-read: both events must carry identical
/// time_enabled/time_running (single packed syscall).
#[test]
#[ignore]
fn two_event_group_read_shares_timing() {
    let output = perfm()
        .args(["stat", "--event", "instructions,cycles", "--cpu", "0", "--loop", "1"])
        .output()
        .expect("failed to run perfm");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let timings: Vec<&str> = stdout
        .lines()
        .filter(|l| l.contains("enabled="))
        .collect();
    assert_eq!(timings.len(), 2);
}

/// S3 - a malformed event name must fail strictly, with no leaked kernel
/// handles (the process simply exits; nothing survives it to leak).
#[test]
#[ignore]
fn malformed_event_is_fatal_in_strict_mode() {
    let output = perfm()
        .args(["stat", "--event", "NOT_AN_EVENT", "--cpu", "0"])
        .output()
        .expect("failed to run perfm");
    assert!(!output.status.success());
}

/// S4 - round-robin multiplex across two group-strings, three loops: six
/// snapshots total, alternating {A,B} and {C,D}.
#[test]
#[ignore]
fn round_robin_alternates_group_strings() {
    let output = perfm()
        .args([
            "stat", "--event", "cycles,instructions;cache-misses,cache-references",
            "--cpu", "0", "--time", "0.05", "--loop", "3",
        ])
        .output()
        .expect("failed to run perfm");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("iter=")).count(), 6);
}

/// S5 - top engine, two processors, batch mode: five frames, each with two
/// processor lines summing close to 100%.
#[test]
#[ignore]
fn top_two_processors_batch_mode() {
    let output = perfm()
        .args(["top", "--cpu", "0,1", "--delay", "0.2", "--iter", "5", "--batch"])
        .output()
        .expect("failed to run perfm");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Cpu")).count(), 10);
}

/// S6 - topology restoration: offlining cpu3 beforehand (root required)
/// must leave it offline after any command that triggers `Topology::build`.
/// Left as a documented manual recipe rather than an automated toggle,
/// since it requires root and a hotpluggable processor 3 to exist.
#[test]
#[ignore]
fn topology_restoration_is_manual() {
    // Manual recipe:
    //   echo 0 | sudo tee /sys/devices/system/cpu/cpu3/online
    //   perfm stat --event cycles --cpu 0 --loop 1
    //   cat /sys/devices/system/cpu/cpu3/online   # expect "0"
}
