//! Rolling checksum used as the first-pass block filter.
//!
//! For a window `x[0..n]` the checksum keeps two halves, both reduced
//! modulo 2^16:
//!
//! - `a = sum(x[i])`
//! - `b = sum((n - i) * x[i])`
//!
//! and packs them as `a | (b << 16)`. Sliding the window by one byte only
//! needs the outgoing byte, the incoming byte, and the window length.

mod checksum;
mod digest;
mod error;

pub use self::checksum::RollingChecksum;
pub use self::digest::RollingDigest;
pub use self::error::RollingError;

#[cfg(test)]
mod tests;
