#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` wires the workspace's `tracing` events to a subscriber and
//! defines the subsystem targets every crate logs under.
//!
//! # Design
//!
//! Each stage of a synchronization session logs under its own target
//! ([`Subsystem`]): block hashing, delta generation, reconstruction and the
//! producer/consumer session. [`LogConfig`] maps a `-v` style verbosity level
//! to a default level and allows per-subsystem overrides, which are rendered
//! as [`EnvFilter`](tracing_subscriber::EnvFilter) directives. `RUST_LOG`
//! takes precedence when set.
//!
//! # Examples
//!
//! ```
//! use logging::{LogConfig, Subsystem};
//!
//! let config = LogConfig::from_verbose_level(1).with_subsystem(Subsystem::Delta, 3);
//! assert_eq!(config.directives(), "info,delta_sync::delta=trace");
//! ```

mod config;
mod init;
mod tracing_macros;

pub use config::{LogConfig, Subsystem, level_for_verbosity};
pub use init::{LoggingError, init_tracing};
