//! Direct, unsafe bindings for Linux [`perf_event_open`][man] and friends.
//!
//! Linux's `perf_event_open` system call provides access to the processor's
//! performance measurement counters (things like instructions retired, cache
//! misses, and so on), kernel counters (context switches, page faults), and
//! many other sources of performance information.
//!
//! You can't get the `perf_event_open` function from the `libc` crate, as you
//! would any other system call: the GNU C library does not provide a binding
//! for this function or its associated types and constants.
//!
//! Rust analogs to the C types and constants from `<linux/perf_event.h>` and
//! `<linux/hw_breakpoint.h>`, generated with `bindgen`, are available in the
//! [`bindings`] module.
//!
//! There are several ioctls for use with `perf_event_open` file descriptors;
//! see the [`ioctls`] module for those.
//!
//! For a safe, higher-level interface to this functionality, see the
//! `perfm-core` crate, which builds the event/group/topology/monitor model
//! on top of the raw calls exposed here.
//!
//! ## Using the raw API
//!
//! As the kernel interface evolves, the struct and union types from the
//! [`bindings`] module may acquire new fields. To ensure that code continues
//! to compile against newer versions of this crate, construct values of
//! these types by calling their `Default` implementations, which return
//! zero-filled values, and then assign to the fields you care about:
//!
//! ```
//! use perfm_sys as sys;
//!
//! let mut attrs = sys::bindings::perf_event_attr {
//!     size: std::mem::size_of::<sys::bindings::perf_event_attr>() as u32,
//!     type_: sys::bindings::PERF_TYPE_HARDWARE,
//!     config: sys::bindings::PERF_COUNT_HW_INSTRUCTIONS as u64,
//!     ..Default::default()
//! };
//! attrs.set_disabled(1);
//! attrs.set_exclude_kernel(1);
//! attrs.set_exclude_hv(1);
//!
//! let result = unsafe { sys::perf_event_open(&mut attrs, 0, -1, -1, 0) };
//! if result < 0 {
//!     // ... handle error
//! }
//! // ... use `result` as a raw file descriptor
//! ```
//!
//! It is not necessary to adjust `size` to match exactly what the running
//! kernel expects: older kernels accept newer `perf_event_attr` structs and
//! vice versa, as long as `size` was properly initialized. An `E2BIG` error
//! indicates the `attrs` structure requested behavior the running kernel is
//! too old to support.
//!
//! [man]: http://man7.org/linux/man-pages/man2/perf_event_open.2.html

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[path = "bindings_x86_64.rs"]
pub mod bindings;

// Provide actual callable code only on Linux/Android; the `bindings` module
// stays available elsewhere so that code parsing perf data can still use it.
#[cfg(any(target_os = "linux", target_os = "android"))]
mod functions;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub use functions::*;
