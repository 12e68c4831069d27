//! The failure taxonomy shared by every stage of the measurement pipeline.
//!
//! Each variant corresponds to one of the failure kinds a caller needs to
//! tell apart: whether to retry, warn and continue, or abort the whole
//! group. Recoverable conditions (a short read, a failed ioctl on one
//! Event) are logged by the caller at `warn` level rather than returned as
//! an `Err`; this enum is reserved for conditions that stop forward
//! progress on the group or the whole run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a kernel `open` call for one event failed.
#[derive(Debug, Error)]
pub enum OpenErrorKind {
    /// The calling process lacks the privilege to open this event
    /// (`EACCES`/`EPERM`), commonly because `perf_event_paranoid` forbids it.
    #[error("permission denied")]
    Denied,
    /// The running kernel does not support the requested facility
    /// (`ENOSYS`/`ENODEV`/`EOPNOTSUPP`).
    #[error("not supported by this kernel")]
    Unsupported,
    /// The PMU has no free counter to hand out (`ENOSPC`/`EBUSY`/`EMFILE`).
    #[error("no hardware counter available")]
    NoResource,
    /// Any other `errno` the kernel returned.
    #[error("{0}")]
    Other(io::Error),
}

impl OpenErrorKind {
    /// Classify a raw `errno` from a failed `perf_event_open` call.
    pub fn from_errno(err: io::Error) -> Self {
        match err.raw_os_error() {
            Some(libc::EACCES) | Some(libc::EPERM) => OpenErrorKind::Denied,
            Some(libc::ENOSYS) | Some(libc::ENODEV) | Some(libc::EOPNOTSUPP) => {
                OpenErrorKind::Unsupported
            }
            Some(libc::ENOSPC) | Some(libc::EBUSY) | Some(libc::EMFILE) => {
                OpenErrorKind::NoResource
            }
            _ => OpenErrorKind::Other(err),
        }
    }
}

/// Everything that can go wrong while encoding, opening, reading or tearing
/// down events, groups and topology, or while parsing configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The PMU encoder rejected a symbolic event name or privilege mask.
    #[error("could not encode event `{name}`: {reason}")]
    Encode { name: String, reason: String },

    /// The kernel `perf_event_open` syscall failed for event `name`.
    #[error("could not open event `{name}`: {kind}")]
    Open { name: String, kind: OpenErrorKind },

    /// A `read` on an event or group returned fewer bytes than expected, or
    /// was interrupted in a way that could not be restarted.
    #[error("short or interrupted read on event `{name}`")]
    Read { name: String },

    /// A `start`/`stop`/`reset`/`refresh` ioctl failed.
    #[error("ioctl {op} failed on event `{name}`: {source}")]
    Ioctl {
        op: &'static str,
        name: String,
        #[source]
        source: io::Error,
    },

    /// A sysfs `online` write failed while bringing a processor online or
    /// restoring it to its prior state.
    #[error("could not toggle online state of cpu{cpu}: {source}")]
    Hotplug {
        cpu: usize,
        #[source]
        source: io::Error,
    },

    /// Malformed event-group file, bad numeric literal, or unbalanced
    /// parentheses in a metric expression.
    #[error("parse error{}: {message}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// Missing required option, or options that contradict each other.
    #[error("configuration error: {0}")]
    Config(String),

    /// Any I/O failure not otherwise classified (sysfs reads, `/proc`
    /// parsing, file output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Shorthand used throughout `perfm-core`.
pub type Result<T> = std::result::Result<T, Error>;
