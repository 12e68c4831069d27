//! The external PMU-encoder boundary.
//!
//! The core never interprets raw event codes itself (SPEC_FULL.md §4.6,
//! carried unchanged from the original spec's Non-goals): every symbolic
//! name is resolved through a `&dyn PmuEncoder`. [`DefaultEncoder`] is the
//! one concrete implementation this crate ships, covering the
//! hardware/software/cache/raw families in [`crate::events`]. A system
//! wired up against a full symbol table (libpfm4 or similar) would supply
//! its own `PmuEncoder` instead.

use perfm_sys::bindings;

use crate::error::Error;
use crate::events::Event;
use crate::flags::Plm;

/// A per-event privilege-mask override parsed from a `name:u`/`name:k`
/// style suffix, supplementing the group-level `-m`/`--plm` mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    pub event: Event,
    pub plm_override: Option<Plm>,
}

/// Translates a symbolic event string plus a privilege mask into a kernel
/// attribute record.
pub trait PmuEncoder {
    /// Resolve `name` (optionally carrying a `:u`/`:k`/`:h` suffix) and
    /// apply `plm` (the group's mask, used when the name carries no
    /// suffix override) to a fresh `perf_event_attr`.
    fn encode(&self, name: &str, plm: Plm) -> Result<bindings::perf_event_attr, Error>;
}

/// Resolves the symbolic names in [`crate::events`] against the `Hardware`,
/// `Software`, `Cache` and `Raw` kernel event families.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultEncoder;

impl DefaultEncoder {
    /// Split a `name:u`/`name:k`/`name:h` (or any combination, e.g.
    /// `name:uk`) suffix off the bare event name.
    fn split_suffix(name: &str) -> (&str, Option<Plm>) {
        match name.rsplit_once(':') {
            Some((base, suffix)) if !suffix.is_empty() => match Plm::parse(suffix) {
                Ok(plm) => (base, Some(plm)),
                Err(_) => (name, None),
            },
            _ => (name, None),
        }
    }

    pub fn parse(name: &str) -> Result<Encoded, Error> {
        let (base, plm_override) = Self::split_suffix(name);
        let event = Event::parse(base).ok_or_else(|| Error::Encode {
            name: name.to_string(),
            reason: "unrecognized event name".to_string(),
        })?;
        Ok(Encoded { event, plm_override })
    }
}

impl PmuEncoder for DefaultEncoder {
    fn encode(&self, name: &str, plm: Plm) -> Result<bindings::perf_event_attr, Error> {
        let Encoded { event, plm_override } = Self::parse(name)?;
        let effective = plm_override.unwrap_or(plm);
        if effective.is_empty() {
            log::warn!("event `{name}` has an empty privilege-level mask; it will count nothing");
        }

        let mut attr = bindings::perf_event_attr {
            size: std::mem::size_of::<bindings::perf_event_attr>() as u32,
            ..Default::default()
        };
        event.update_attrs(&mut attr);
        attr.set_exclude_user(u64::from(!effective.contains(Plm::USER)));
        attr.set_exclude_kernel(u64::from(!effective.contains(Plm::KERNEL)));
        attr.set_exclude_hv(u64::from(!effective.contains(Plm::HYPERVISOR)));
        Ok(attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_bare_name_with_group_plm() {
        let encoder = DefaultEncoder;
        let attr = encoder.encode("cycles", Plm::ALL).unwrap();
        assert_eq!(attr.type_, bindings::PERF_TYPE_HARDWARE);
        assert_eq!(attr.exclude_user(), 0);
        assert_eq!(attr.exclude_kernel(), 0);
        assert_eq!(attr.exclude_hv(), 0);
    }

    #[test]
    fn per_event_suffix_overrides_group_plm() {
        let encoder = DefaultEncoder;
        let attr = encoder.encode("cycles:u", Plm::ALL).unwrap();
        assert_eq!(attr.exclude_user(), 0);
        assert_eq!(attr.exclude_kernel(), 1);
        assert_eq!(attr.exclude_hv(), 1);
    }

    #[test]
    fn rejects_unknown_event_name() {
        let encoder = DefaultEncoder;
        assert!(encoder.encode("bogus-event", Plm::ALL).is_err());
    }
}
