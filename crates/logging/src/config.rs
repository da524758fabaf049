//! crates/logging/src/config.rs
//! Verbosity configuration with per-subsystem overrides.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{LevelFilter, ParseError};

/// Logging targets used across the workspace.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Subsystem {
    /// Block hashing of the reference content.
    Signature,
    /// Scanning target content and emitting operations.
    Delta,
    /// Rebuilding content from an operation stream.
    Apply,
    /// Producer/consumer stream lifecycle.
    Session,
    /// End-of-run statistics.
    Stats,
}

impl Subsystem {
    /// Every subsystem, in target order.
    pub const ALL: [Self; 5] = [
        Self::Signature,
        Self::Delta,
        Self::Apply,
        Self::Session,
        Self::Stats,
    ];

    /// The `tracing` target events for this subsystem are emitted under.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Signature => "delta_sync::signature",
            Self::Delta => "delta_sync::delta",
            Self::Apply => "delta_sync::apply",
            Self::Session => "delta_sync::session",
            Self::Stats => "delta_sync::stats",
        }
    }
}

/// Maps a verbosity count to the most detailed level it enables.
///
/// `0` keeps warnings and errors only, each additional level opens one more
/// tier, and anything from `3` up enables `TRACE`.
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Subscriber configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Verbosity applied to every target without an override.
    pub verbose: u8,
    /// Per-subsystem verbosity overrides.
    pub subsystems: BTreeMap<Subsystem, u8>,
    /// Emit ANSI colour codes.
    pub ansi: bool,
}

impl LogConfig {
    /// Creates a configuration with the given global verbosity.
    #[must_use]
    pub fn from_verbose_level(verbose: u8) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Overrides the verbosity of one subsystem.
    #[must_use]
    pub fn with_subsystem(mut self, subsystem: Subsystem, verbose: u8) -> Self {
        self.subsystems.insert(subsystem, verbose);
        self
    }

    /// Enables or disables ANSI colour codes.
    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Effective level for `subsystem`.
    #[must_use]
    pub fn level(&self, subsystem: Subsystem) -> LevelFilter {
        let verbose = self
            .subsystems
            .get(&subsystem)
            .copied()
            .unwrap_or(self.verbose);
        level_for_verbosity(verbose)
    }

    /// Renders the configuration as `EnvFilter` directives.
    #[must_use]
    pub fn directives(&self) -> String {
        let mut rendered = level_name(level_for_verbosity(self.verbose)).to_owned();
        for (subsystem, &verbose) in &self.subsystems {
            let _ = write!(
                rendered,
                ",{}={}",
                subsystem.target(),
                level_name(level_for_verbosity(verbose))
            );
        }
        rendered
    }

    /// Builds the filter, preferring a non-empty `RUST_LOG` over the configured directives.
    pub fn env_filter(&self) -> Result<EnvFilter, ParseError> {
        match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(from_env) if !from_env.trim().is_empty() => EnvFilter::try_new(from_env),
            _ => EnvFilter::try_new(self.directives()),
        }
    }
}

fn level_name(level: LevelFilter) -> &'static str {
    if level == LevelFilter::OFF {
        "off"
    } else if level == LevelFilter::ERROR {
        "error"
    } else if level == LevelFilter::WARN {
        "warn"
    } else if level == LevelFilter::INFO {
        "info"
    } else if level == LevelFilter::DEBUG {
        "debug"
    } else {
        "trace"
    }
}
