//! Symbolic event kinds and their kernel `(type, config)` encoding.
//!
//! These mirror the subset of `perf_event_attr::type`/`config` combinations
//! a userspace PMU encoder would hand back for the common hardware,
//! software and cache events; [`crate::encoder::DefaultEncoder`] is the one
//! concrete `PmuEncoder` this crate ships, and it is built entirely out of
//! the `Event::update_attrs` calls below.

use perfm_sys::bindings;

/// A generic hardware counter, same meaning on every x86 PMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hardware {
    CpuCycles,
    Instructions,
    CacheReferences,
    CacheMisses,
    BranchInstructions,
    BranchMisses,
    BusCycles,
    StalledCyclesFrontend,
    StalledCyclesBackend,
    RefCpuCycles,
}

impl Hardware {
    fn config(self) -> u64 {
        use Hardware::*;
        (match self {
            CpuCycles => bindings::PERF_COUNT_HW_CPU_CYCLES,
            Instructions => bindings::PERF_COUNT_HW_INSTRUCTIONS,
            CacheReferences => bindings::PERF_COUNT_HW_CACHE_REFERENCES,
            CacheMisses => bindings::PERF_COUNT_HW_CACHE_MISSES,
            BranchInstructions => bindings::PERF_COUNT_HW_BRANCH_INSTRUCTIONS,
            BranchMisses => bindings::PERF_COUNT_HW_BRANCH_MISSES,
            BusCycles => bindings::PERF_COUNT_HW_BUS_CYCLES,
            StalledCyclesFrontend => bindings::PERF_COUNT_HW_STALLED_CYCLES_FRONTEND,
            StalledCyclesBackend => bindings::PERF_COUNT_HW_STALLED_CYCLES_BACKEND,
            RefCpuCycles => bindings::PERF_COUNT_HW_REF_CPU_CYCLES,
        }) as u64
    }

    /// Parse one of the bare mnemonics a `-e` string may name.
    pub fn parse(name: &str) -> Option<Hardware> {
        use Hardware::*;
        Some(match name {
            "cycles" | "cpu-cycles" => CpuCycles,
            "instructions" => Instructions,
            "cache-references" => CacheReferences,
            "cache-misses" => CacheMisses,
            "branch-instructions" | "branches" => BranchInstructions,
            "branch-misses" => BranchMisses,
            "bus-cycles" => BusCycles,
            "stalled-cycles-frontend" | "idle-cycles-frontend" => StalledCyclesFrontend,
            "stalled-cycles-backend" | "idle-cycles-backend" => StalledCyclesBackend,
            "ref-cycles" => RefCpuCycles,
            _ => return None,
        })
    }
}

/// A kernel-tracked software event (not a PMU counter at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Software {
    CpuClock,
    TaskClock,
    PageFaults,
    ContextSwitches,
    CpuMigrations,
    PageFaultsMin,
    PageFaultsMaj,
    AlignmentFaults,
    EmulationFaults,
}

impl Software {
    fn config(self) -> u64 {
        use Software::*;
        (match self {
            CpuClock => bindings::PERF_COUNT_SW_CPU_CLOCK,
            TaskClock => bindings::PERF_COUNT_SW_TASK_CLOCK,
            PageFaults => bindings::PERF_COUNT_SW_PAGE_FAULTS,
            ContextSwitches => bindings::PERF_COUNT_SW_CONTEXT_SWITCHES,
            CpuMigrations => bindings::PERF_COUNT_SW_CPU_MIGRATIONS,
            PageFaultsMin => bindings::PERF_COUNT_SW_PAGE_FAULTS_MIN,
            PageFaultsMaj => bindings::PERF_COUNT_SW_PAGE_FAULTS_MAJ,
            AlignmentFaults => bindings::PERF_COUNT_SW_ALIGNMENT_FAULTS,
            EmulationFaults => bindings::PERF_COUNT_SW_EMULATION_FAULTS,
        }) as u64
    }

    pub fn parse(name: &str) -> Option<Software> {
        use Software::*;
        Some(match name {
            "cpu-clock" => CpuClock,
            "task-clock" => TaskClock,
            "page-faults" | "faults" => PageFaults,
            "context-switches" | "cs" => ContextSwitches,
            "cpu-migrations" | "migrations" => CpuMigrations,
            "minor-faults" => PageFaultsMin,
            "major-faults" => PageFaultsMaj,
            "alignment-faults" => AlignmentFaults,
            "emulation-faults" => EmulationFaults,
            _ => return None,
        })
    }
}

/// Which level of the memory hierarchy a [`Cache`] event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheId {
    L1d,
    L1i,
    Ll,
    Dtlb,
    Itlb,
    Bpu,
    Node,
}

/// Read, write, or prefetch access to a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheOp {
    Read,
    Write,
    Prefetch,
}

/// Whether a cache access counts hits or misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheResult {
    Access,
    Miss,
}

/// A `PERF_TYPE_HW_CACHE` event: `(cache, op, result)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cache {
    pub which: CacheId,
    pub operation: CacheOp,
    pub result: CacheResult,
}

impl Cache {
    fn config(self) -> u64 {
        let which = match self.which {
            CacheId::L1d => bindings::PERF_COUNT_HW_CACHE_L1D,
            CacheId::L1i => bindings::PERF_COUNT_HW_CACHE_L1I,
            CacheId::Ll => bindings::PERF_COUNT_HW_CACHE_LL,
            CacheId::Dtlb => bindings::PERF_COUNT_HW_CACHE_DTLB,
            CacheId::Itlb => bindings::PERF_COUNT_HW_CACHE_ITLB,
            CacheId::Bpu => bindings::PERF_COUNT_HW_CACHE_BPU,
            CacheId::Node => bindings::PERF_COUNT_HW_CACHE_NODE,
        } as u64;
        let op = match self.operation {
            CacheOp::Read => bindings::PERF_COUNT_HW_CACHE_OP_READ,
            CacheOp::Write => bindings::PERF_COUNT_HW_CACHE_OP_WRITE,
            CacheOp::Prefetch => bindings::PERF_COUNT_HW_CACHE_OP_PREFETCH,
        } as u64;
        let result = match self.result {
            CacheResult::Access => bindings::PERF_COUNT_HW_CACHE_RESULT_ACCESS,
            CacheResult::Miss => bindings::PERF_COUNT_HW_CACHE_RESULT_MISS,
        } as u64;
        which | (op << 8) | (result << 16)
    }

    /// Parse the conventional `l1d-load-misses` / `ll-loads` style names.
    pub fn parse(name: &str) -> Option<Cache> {
        let mut parts = name.splitn(2, '-');
        let which = match parts.next()? {
            "l1d" => CacheId::L1d,
            "l1i" => CacheId::L1i,
            "ll" | "llc" => CacheId::Ll,
            "dtlb" => CacheId::Dtlb,
            "itlb" => CacheId::Itlb,
            "branch" | "bpu" => CacheId::Bpu,
            "node" => CacheId::Node,
            _ => return None,
        };
        let rest = parts.next()?;
        let (operation, result) = if let Some(op) = rest.strip_suffix("-misses") {
            (op, CacheResult::Miss)
        } else if let Some(op) = rest.strip_suffix("-accesses") {
            (op, CacheResult::Access)
        } else {
            return None;
        };
        let operation = match operation {
            "loads" | "load" => CacheOp::Read,
            "stores" | "store" => CacheOp::Write,
            "prefetches" | "prefetch" => CacheOp::Prefetch,
            _ => return None,
        };
        Some(Cache {
            which,
            operation,
            result,
        })
    }
}

/// The fully resolved kind of one event, independent of its privilege mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Hardware(Hardware),
    Software(Software),
    Cache(Cache),
    /// A raw `type:config` pair the caller already resolved (e.g. from a
    /// `raw:0x...` or `r...` literal in an event-group file).
    Raw { kind: u32, config: u64 },
}

impl Event {
    /// Try every known symbolic family in turn; `None` means the name is
    /// unrecognized and must be rejected by the encoder as an
    /// [`crate::error::Error::Encode`].
    pub fn parse(name: &str) -> Option<Event> {
        if let Some(hw) = Hardware::parse(name) {
            return Some(Event::Hardware(hw));
        }
        if let Some(sw) = Software::parse(name) {
            return Some(Event::Software(sw));
        }
        if let Some(cache) = Cache::parse(name) {
            return Some(Event::Cache(cache));
        }
        if let Some(hex) = name.strip_prefix("raw:").or_else(|| name.strip_prefix("r")) {
            let config = u64::from_str_radix(hex.trim_start_matches("0x"), 16).ok()?;
            return Some(Event::Raw {
                kind: bindings::PERF_TYPE_RAW,
                config,
            });
        }
        None
    }

    /// Write this event's `type`/`config` fields into a fresh attribute
    /// record. The caller is responsible for the group-discipline bits
    /// (`disabled`, `read_format`, `inherit`) — this only fixes what
    /// counter is being asked for.
    pub fn update_attrs(self, attr: &mut bindings::perf_event_attr) {
        let (type_, config) = match self {
            Event::Hardware(hw) => (bindings::PERF_TYPE_HARDWARE, hw.config()),
            Event::Software(sw) => (bindings::PERF_TYPE_SOFTWARE, sw.config()),
            Event::Cache(cache) => (bindings::PERF_TYPE_HW_CACHE, cache.config()),
            Event::Raw { kind, config } => (kind, config),
        };
        attr.type_ = type_;
        attr.config = config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_hardware_mnemonics() {
        assert_eq!(Event::parse("cycles"), Some(Event::Hardware(Hardware::CpuCycles)));
        assert_eq!(
            Event::parse("instructions"),
            Some(Event::Hardware(Hardware::Instructions))
        );
    }

    #[test]
    fn parses_cache_events() {
        assert_eq!(
            Event::parse("l1d-load-misses"),
            Some(Event::Cache(Cache {
                which: CacheId::L1d,
                operation: CacheOp::Read,
                result: CacheResult::Miss,
            }))
        );
    }

    #[test]
    fn parses_raw_hex() {
        assert_eq!(
            Event::parse("raw:0x1a"),
            Some(Event::Raw {
                kind: bindings::PERF_TYPE_RAW,
                config: 0x1a,
            })
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(Event::parse("not-an-event"), None);
    }
}
