//! Per-processor clock frequency snapshot (SPEC_FULL.md §2, `CpuFrequency`).
//!
//! Used by [`crate::top`] to turn a cycle-count delta into a utilization
//! percentage: `expected_cycle_delta = seconds * frequency_mhz * 1e6`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Error;

/// `processor → MHz`, parsed from `/proc/cpuinfo`.
#[derive(Debug, Clone, Default)]
pub struct CpuFrequency {
    mhz: BTreeMap<usize, f64>,
}

impl CpuFrequency {
    pub fn read() -> Result<CpuFrequency, Error> {
        Self::read_from(Path::new("/proc/cpuinfo"))
    }

    fn read_from(path: &Path) -> Result<CpuFrequency, Error> {
        let contents = fs::read_to_string(path).map_err(Error::Io)?;
        Ok(Self::parse(&contents))
    }

    fn parse(contents: &str) -> CpuFrequency {
        let mut mhz = BTreeMap::new();
        let mut current_processor = None;
        for line in contents.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            if key == "processor" {
                current_processor = value.parse::<usize>().ok();
            } else if key == "cpu MHz" {
                if let (Some(cpu), Ok(freq)) = (current_processor, value.parse::<f64>()) {
                    mhz.insert(cpu, freq);
                }
            }
        }
        CpuFrequency { mhz }
    }

    /// Frequency in MHz, if known for this processor.
    pub fn mhz(&self, cpu: usize) -> Option<f64> {
        self.mhz.get(&cpu).copied()
    }

    /// Frequency in GHz, for display.
    pub fn ghz(&self, cpu: usize) -> Option<f64> {
        self.mhz(cpu).map(|mhz| mhz / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu MHz\t\t: 2400.123

processor\t: 1
vendor_id\t: GenuineIntel
cpu MHz\t\t: 2399.876
";

    #[test]
    fn parses_per_processor_mhz() {
        let freq = CpuFrequency::parse(SAMPLE);
        assert_eq!(freq.mhz(0), Some(2400.123));
        assert_eq!(freq.mhz(1), Some(2399.876));
        assert_eq!(freq.mhz(2), None);
    }

    #[test]
    fn ghz_is_mhz_over_a_thousand() {
        let freq = CpuFrequency::parse(SAMPLE);
        assert!((freq.ghz(0).unwrap() - 2.400123).abs() < 1e-9);
    }
}
