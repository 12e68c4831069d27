//! Thin output sinks for [`perfm_core::monitor::Snapshot`] and
//! [`perfm_core::top::Frame`].
//!
//! The curses-based "top" renderer named in SPEC_FULL.md §4.5 is out of
//! scope; `TopEngine` already produces a pure `Frame` stream, and this
//! module is just one (intentionally simple) consumer of it: batch mode
//! prints a block per refresh, interactive mode repaints in place.

use std::io::Write;

use perfm_core::monitor::Snapshot;
use perfm_core::top::Frame;

/// Emit one snapshot block: the group index, cpu, and each event's current
/// and previous tuples (SPEC_FULL.md §6 "Emitted snapshot format" — exact
/// whitespace is unspecified by the interface contract).
pub fn render_snapshot(out: &mut dyn Write, snapshot: &Snapshot) -> std::io::Result<()> {
    writeln!(
        out,
        "iter={} group={} cpu={} events={}",
        snapshot.iteration,
        snapshot.group_string_index,
        snapshot.cpu,
        snapshot.readings.len()
    )?;
    for reading in &snapshot.readings {
        let prev = reading.previous.unwrap_or_default();
        writeln!(
            out,
            "  {name}: current=(raw={raw}, enabled={enabled}, running={running}) previous=(raw={praw}, enabled={penabled}, running={prunning})",
            name = reading.name,
            raw = reading.current.raw,
            enabled = reading.current.time_enabled,
            running = reading.current.time_running,
            praw = prev.raw,
            penabled = prev.time_enabled,
            prunning = prev.time_running,
        )?;
    }
    Ok(())
}

/// Render one line per processor: `CpuNN : F.FGHz, usr: P%, sys: P%, idle:
/// P%` (SPEC_FULL.md §4.5).
pub fn render_frames_batch(out: &mut dyn Write, frames: &[Frame]) -> std::io::Result<()> {
    for frame in frames {
        writeln!(
            out,
            "Cpu{:02} : {:.1}GHz, usr: {:.1}%, sys: {:.1}%, idle: {:.1}%",
            frame.cpu, frame.freq_ghz, frame.usr, frame.sys, frame.idle
        )?;
    }
    Ok(())
}

/// Same content as [`render_frames_batch`], but moves the cursor back to
/// the top of the frame first so successive refreshes repaint in place
/// instead of scrolling.
pub fn render_frames_inplace(out: &mut dyn Write, frames: &[Frame], previous_lines: usize) -> std::io::Result<()> {
    if previous_lines > 0 {
        write!(out, "\x1b[{previous_lines}A")?;
    }
    render_frames_batch(out, frames)
}
