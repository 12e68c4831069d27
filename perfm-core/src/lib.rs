//! Safe wrapper around [`perfm_sys`]: event encoding, event groups,
//! topology discovery, and the round-robin/top measurement loops.
//!
//! This crate owns the three tightly coupled subsystems that make up the
//! measurement engine — event encoding and group lifecycle
//! ([`counter`]/[`group`]/[`encoder`]/[`events`]), topology discovery and
//! per-CPU fan-out ([`topology`]/[`cpufreq`]), and the counting/sampling
//! loop with scaling correction ([`monitor`]/[`top`]) — plus the
//! configuration, error and expression-compiler code the rest of the
//! toolkit is built from.
//!
//! A single cooperative thread owns every kernel counter handle it opens;
//! multi-processor coverage comes from opening one group per target
//! processor, never from threading (see [`monitor::Monitor`] and
//! [`top::TopEngine`]).

pub mod config;
pub mod counter;
pub mod cpufreq;
pub mod encoder;
pub mod error;
pub mod events;
pub mod expr;
pub mod flags;
pub mod group;
pub mod monitor;
pub mod top;
pub mod topology;
pub mod util;

pub use encoder::{DefaultEncoder, PmuEncoder};
pub use error::{Error, Result};
pub use group::EventGroup;
pub use monitor::Monitor;
pub use top::TopEngine;
pub use topology::Topology;
