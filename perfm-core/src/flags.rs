//! Bitflags used throughout the event/group open path.

use bitflags::bitflags;

bitflags! {
    /// Bits of `perf_event_attr::read_format` this crate cares about.
    ///
    /// `TOTAL_TIME_ENABLED`/`TOTAL_TIME_RUNNING` are requested on every
    /// event we open — without them the scaling formula in [`crate::counter`]
    /// has nothing to divide by. `GROUP` is set on the leader only, when
    /// the group is opened in group-read mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ReadFormat: u64 {
        const TOTAL_TIME_ENABLED = perfm_sys::bindings::PERF_FORMAT_TOTAL_TIME_ENABLED as u64;
        const TOTAL_TIME_RUNNING = perfm_sys::bindings::PERF_FORMAT_TOTAL_TIME_RUNNING as u64;
        const ID = perfm_sys::bindings::PERF_FORMAT_ID as u64;
        const GROUP = perfm_sys::bindings::PERF_FORMAT_GROUP as u64;
    }
}

impl Default for ReadFormat {
    fn default() -> Self {
        ReadFormat::TOTAL_TIME_ENABLED | ReadFormat::TOTAL_TIME_RUNNING
    }
}

bitflags! {
    /// Privilege-level mask: which CPU modes contribute to a count.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Plm: u8 {
        const USER = 0b001;
        const KERNEL = 0b010;
        const HYPERVISOR = 0b100;
    }
}

impl Plm {
    /// All three privilege levels; the CLI default (`-m ukh`).
    pub const ALL: Plm = Plm::USER.union(Plm::KERNEL).union(Plm::HYPERVISOR);

    /// Parse a mask string made of the letters `u`, `k`, `h` in any order.
    ///
    /// An empty string is accepted (it yields an empty mask) but the caller
    /// should warn: a privilege mask with no bits set counts nothing.
    pub fn parse(s: &str) -> Result<Plm, crate::error::Error> {
        let mut plm = Plm::empty();
        for c in s.chars() {
            plm |= match c {
                'u' | 'U' => Plm::USER,
                'k' | 'K' => Plm::KERNEL,
                'h' | 'H' => Plm::HYPERVISOR,
                other => {
                    return Err(crate::error::Error::Config(format!(
                        "invalid privilege-level character `{other}` (expected one of u, k, h)"
                    )))
                }
            };
        }
        Ok(plm)
    }
}

impl Default for Plm {
    fn default() -> Self {
        Plm::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_letter() {
        assert_eq!(Plm::parse("u").unwrap(), Plm::USER);
        assert_eq!(Plm::parse("k").unwrap(), Plm::KERNEL);
        assert_eq!(Plm::parse("h").unwrap(), Plm::HYPERVISOR);
        assert_eq!(Plm::parse("ukh").unwrap(), Plm::ALL);
        assert_eq!(Plm::parse("UKH").unwrap(), Plm::ALL);
    }

    #[test]
    fn empty_mask_is_allowed_but_empty() {
        assert_eq!(Plm::parse("").unwrap(), Plm::empty());
    }

    #[test]
    fn rejects_unknown_letters() {
        assert!(Plm::parse("x").is_err());
    }
}
