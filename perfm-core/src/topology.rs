//! System topology discovery and hotplug (SPEC_FULL.md §4.3).

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Error;

const CPU_ROOT: &str = "/sys/devices/system/cpu";

/// Per-(socket, core) record: the set of SMT sibling processor ids.
#[derive(Debug, Clone, Default)]
pub struct CoreRecord {
    pub threads: Vec<usize>,
}

/// Per-processor `(core_id, socket_id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorRecord {
    pub core_id: usize,
    pub socket_id: usize,
}

/// A snapshot of the machine's CPU hierarchy.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    present: Vec<bool>,
    online: Vec<bool>,
    processor: BTreeMap<usize, ProcessorRecord>,
    cores: BTreeMap<(usize, usize), CoreRecord>,
}

impl Topology {
    /// Build a fresh snapshot by reading sysfs, temporarily onlining any
    /// present-but-offline processor to read its topology files, then
    /// restoring the original online set (invariant 4, spec §8).
    pub fn build() -> Result<Topology, Error> {
        Self::build_rooted(Path::new(CPU_ROOT))
    }

    fn build_rooted(root: &Path) -> Result<Topology, Error> {
        let present = read_present(root)?;
        let online = read_online(root, &present)?;

        let _guard = OnlineGuard::online_all_present(root, &present, &online)?;

        let mut processor = BTreeMap::new();
        let mut cores: BTreeMap<(usize, usize), CoreRecord> = BTreeMap::new();
        for (cpu, is_present) in present.iter().enumerate() {
            if !*is_present {
                continue;
            }
            let core_id = read_topology_value(root, cpu, "core_id")?;
            let socket_id = read_topology_value(root, cpu, "physical_package_id")?;
            processor.insert(cpu, ProcessorRecord { core_id, socket_id });
            cores.entry((socket_id, core_id)).or_default().threads.push(cpu);
        }

        // `_guard`'s `Drop` restores the pre-build online set here, on
        // every exit path (including the `?`-propagated errors above).
        Ok(Topology {
            present,
            online,
            processor,
            cores,
        })
    }

    pub fn nr_cpu(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }

    pub fn nr_onln_cpu(&self) -> usize {
        self.online.iter().filter(|p| **p).count()
    }

    pub fn nr_core(&self) -> usize {
        self.cores.len()
    }

    pub fn nr_onln_core(&self) -> usize {
        self.cores
            .values()
            .filter(|core| core.threads.iter().any(|&cpu| self.is_online(cpu)))
            .count()
    }

    pub fn nr_socket(&self) -> usize {
        self.cores.keys().map(|(socket, _)| *socket).collect::<std::collections::BTreeSet<_>>().len()
    }

    pub fn nr_onln_socket(&self) -> usize {
        self.cores
            .iter()
            .filter(|(_, core)| core.threads.iter().any(|&cpu| self.is_online(cpu)))
            .map(|((socket, _), _)| *socket)
            .collect::<std::collections::BTreeSet<_>>()
            .len()
    }

    pub fn is_present(&self, cpu: usize) -> bool {
        self.present.get(cpu).copied().unwrap_or(false)
    }

    pub fn is_online(&self, cpu: usize) -> bool {
        self.online.get(cpu).copied().unwrap_or(false)
    }

    pub fn online_cpus(&self) -> Vec<usize> {
        self.online
            .iter()
            .enumerate()
            .filter_map(|(cpu, on)| on.then_some(cpu))
            .collect()
    }

    pub fn processor_core(&self, cpu: usize) -> Option<usize> {
        self.processor.get(&cpu).map(|r| r.core_id)
    }

    pub fn processor_socket(&self, cpu: usize) -> Option<usize> {
        self.processor.get(&cpu).map(|r| r.socket_id)
    }

    pub fn core_record(&self, socket: usize, core: usize) -> Option<&CoreRecord> {
        self.cores.get(&(socket, core))
    }

    /// Emit a human-readable three-line "processor / core_id / socket_id"
    /// table, to `path` if given, otherwise to stdout.
    pub fn print(&self, path: Option<&Path>) -> Result<(), Error> {
        let mut out = String::new();
        let processors: Vec<usize> = self.processor.keys().copied().collect();
        out.push_str("processor:");
        for cpu in &processors {
            out.push_str(&format!(" {cpu}"));
        }
        out.push('\n');
        out.push_str("core_id:  ");
        for cpu in &processors {
            out.push_str(&format!(" {}", self.processor[cpu].core_id));
        }
        out.push('\n');
        out.push_str("socket_id:");
        for cpu in &processors {
            out.push_str(&format!(" {}", self.processor[cpu].socket_id));
        }
        out.push('\n');

        match path {
            Some(path) => {
                fs::write(path, out).map_err(Error::Io)?;
            }
            None => {
                print!("{out}");
            }
        }
        Ok(())
    }
}

fn read_present(root: &Path) -> Result<Vec<bool>, Error> {
    if let Ok(range) = fs::read_to_string(root.join("present")) {
        if let Some(bits) = parse_range_into_bitset(&range) {
            return Ok(bits);
        }
    }
    // Fallback: scan directory entries matching `cpu<digits>`.
    let mut present = Vec::new();
    for entry in fs::read_dir(root).map_err(Error::Io)? {
        let entry = entry.map_err(Error::Io)?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(digits) = name.strip_prefix("cpu") {
            if let Ok(cpu) = digits.parse::<usize>() {
                if present.len() <= cpu {
                    present.resize(cpu + 1, false);
                }
                present[cpu] = true;
            }
        }
    }
    Ok(present)
}

fn read_online(root: &Path, present: &[bool]) -> Result<Vec<bool>, Error> {
    if let Ok(range) = fs::read_to_string(root.join("online")) {
        if let Some(bits) = parse_range_into_bitset(&range) {
            return Ok(pad_to(bits, present.len()));
        }
    }
    let mut online = vec![false; present.len()];
    for (cpu, is_present) in present.iter().enumerate() {
        if !*is_present {
            continue;
        }
        online[cpu] = read_cpu_online_file(root, cpu)?;
    }
    Ok(online)
}

/// Processor 0 has no `online` file on most kernels (it's always online
/// and non-hotpluggable); treat a missing file as online, and the cache
/// directory's presence as a last-resort fallback signal (spec §9 Open
/// Questions: never the primary signal).
fn read_cpu_online_file(root: &Path, cpu: usize) -> Result<bool, Error> {
    let online_path = root.join(format!("cpu{cpu}/online"));
    match fs::read_to_string(&online_path) {
        Ok(contents) => Ok(contents.trim() == "1"),
        Err(_) if cpu == 0 => Ok(true),
        Err(_) => Ok(root.join(format!("cpu{cpu}/cache")).is_dir()),
    }
}

fn read_topology_value(root: &Path, cpu: usize, file: &str) -> Result<usize, Error> {
    let path = root.join(format!("cpu{cpu}/topology/{file}"));
    let contents = fs::read_to_string(&path).map_err(Error::Io)?;
    contents
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::Parse {
            path: Some(path),
            message: format!("expected an integer, found `{}`", contents.trim()),
        })
}

/// Parse a sysfs range list like `0-3,8,10-11` into a bitset.
fn parse_range_into_bitset(spec: &str) -> Option<Vec<bool>> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Some(Vec::new());
    }
    let mut max = 0usize;
    let mut ranges = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (lo, hi) = match part.split_once('-') {
            Some((lo, hi)) => (lo.parse::<usize>().ok()?, hi.parse::<usize>().ok()?),
            None => {
                let v = part.parse::<usize>().ok()?;
                (v, v)
            }
        };
        max = max.max(hi);
        ranges.push((lo, hi));
    }
    let mut bits = vec![false; max + 1];
    for (lo, hi) in ranges {
        for b in bits.iter_mut().take(hi + 1).skip(lo) {
            *b = true;
        }
    }
    Some(bits)
}

fn pad_to(mut bits: Vec<bool>, len: usize) -> Vec<bool> {
    if bits.len() < len {
        bits.resize(len, false);
    }
    bits
}

/// Scoped hotplug acquisition: records which presently-offline processors
/// it brought online, and restores them on drop — on every exit path,
/// including an early `?` return or a panic unwinding through `build()`.
/// The boot processor (0) is assumed non-hotpluggable and is never
/// toggled.
struct OnlineGuard<'a> {
    root: &'a Path,
    toggled: Vec<usize>,
}

impl<'a> OnlineGuard<'a> {
    fn online_all_present(
        root: &'a Path,
        present: &[bool],
        online: &[bool],
    ) -> Result<OnlineGuard<'a>, Error> {
        let mut toggled = Vec::new();
        for (cpu, is_present) in present.iter().enumerate() {
            if !*is_present || cpu == 0 {
                continue;
            }
            let is_online = online.get(cpu).copied().unwrap_or(false);
            if !is_online {
                write_online(root, cpu, true)?;
                toggled.push(cpu);
            }
        }
        Ok(OnlineGuard { root, toggled })
    }
}

impl Drop for OnlineGuard<'_> {
    /// `Drop::drop` cannot return a `Result`; a failed restore is logged
    /// rather than silently swallowed.
    fn drop(&mut self) {
        for cpu in &self.toggled {
            if let Err(err) = write_online(self.root, *cpu, false) {
                log::warn!("could not restore cpu{cpu} to its prior offline state: {err}");
            }
        }
    }
}

fn write_online(root: &Path, cpu: usize, online: bool) -> Result<(), Error> {
    let path: PathBuf = root.join(format!("cpu{cpu}/online"));
    let mut file = fs::OpenOptions::new()
        .write(true)
        .open(&path)
        .map_err(|source| Error::Hotplug { cpu, source })?;
    file.write_all(if online { b"1" } else { b"0" })
        .map_err(|source| Error::Hotplug { cpu, source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_contiguous_range() {
        let bits = parse_range_into_bitset("0-3").unwrap();
        assert_eq!(bits, vec![true, true, true, true]);
    }

    #[test]
    fn parses_mixed_list_and_ranges() {
        let bits = parse_range_into_bitset("0-1,3").unwrap();
        assert_eq!(bits, vec![true, true, false, true]);
    }

    #[test]
    fn parses_empty_range_as_empty() {
        assert_eq!(parse_range_into_bitset("").unwrap(), Vec::<bool>::new());
    }
}
