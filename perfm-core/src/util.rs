//! Small host-independent helpers shared by the monitor and top loops
//! (SPEC_FULL.md §2, "Utilities").

use std::time::Duration;

/// Sleep for `duration`, restarting across signal interruptions until the
/// full interval has elapsed — the remaining duration after an interrupt
/// becomes the new request (SPEC_FULL.md §4.4 timing discipline).
///
/// `std::thread::sleep` already retries internally on most platforms, but
/// we make the restart-on-signal behavior explicit here (rather than
/// relying on libc specifics) by measuring elapsed wall time against a
/// monotonic clock and re-issuing the remainder.
pub fn sleep_restart_on_signal(duration: Duration) {
    let start = std::time::Instant::now();
    let mut remaining = duration;
    loop {
        std::thread::sleep(remaining);
        let elapsed = start.elapsed();
        if elapsed >= duration {
            return;
        }
        remaining = duration - elapsed;
    }
}

/// Split `s` on the whole-string delimiter `delim` (never a character
/// class — SPEC_FULL.md §9 fixes this ambiguity from the original source).
pub fn str_split<'a>(s: &'a str, delim: &str) -> Vec<&'a str> {
    if delim.is_empty() {
        return vec![s];
    }
    s.split(delim).collect()
}

/// Trim leading/trailing ASCII whitespace, matching the original's
/// `str_trim` semantics.
pub fn str_trim(s: &str) -> &str {
    s.trim()
}

/// Round `value` to `places` decimal digits.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_join_round_trip_with_no_empty_fields() {
        let s = "a,b,c";
        let parts = str_split(s, ",");
        assert_eq!(parts.join(","), s);
    }

    #[test]
    fn split_on_whole_string_delimiter_not_character_class() {
        // ";," as a delimiter must not behave like the character class
        // `[;,]`: a field containing a lone `,` must survive intact when
        // the delimiter is the two-character string ";,".
        let parts = str_split("a;,b;,c", ";,");
        assert_eq!(parts, vec!["a", "b", "c"]);

        let parts_single = str_split("a,b,c", ",");
        assert_eq!(parts_single, vec!["a", "b", "c"]);
    }

    #[test]
    fn trim_strips_whitespace() {
        assert_eq!(str_trim("  cycles  "), "cycles");
    }

    #[test]
    fn rounds_to_requested_places() {
        assert_eq!(round_to(3.14159, 2), 3.14);
    }
}
