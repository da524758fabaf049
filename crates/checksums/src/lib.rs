#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Weak and strong checksums used by block-level delta synchronization.
//!
//! - [`RollingChecksum`] maintains the two 16-bit halves of the weak checksum
//!   and updates them in O(1) as a window slides over content.
//! - [`RollingDigest`] is the immutable snapshot stored alongside each block.
//! - [`strong`] provides the digests that confirm a weak-checksum hit.
//!
//! # Example
//!
//! ```
//! use checksums::{RollingChecksum, RollingDigest};
//!
//! let content = b"abcdef";
//! let mut rolling = RollingChecksum::new();
//! rolling.update(&content[..4]);
//! rolling.roll(b'a', b'e').unwrap();
//!
//! assert_eq!(rolling.digest(), RollingDigest::from_bytes(&content[1..5]));
//! ```

mod rolling;
pub mod strong;

pub use rolling::{RollingChecksum, RollingDigest, RollingError};
