#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Block hashing of reference content.
//!
//! The receiver splits its content into fixed-length blocks (the last one may
//! be shorter) and computes a weak rolling checksum plus a strong digest for
//! each. The resulting [`ContentSignature`] is what the sender scans against.
//!
//! - [`BlockLayout`] describes how content of a given length is divided.
//! - [`SignatureParams`] carries the block length and strong checksum choice.
//! - [`generate_signature`] hashes content sequentially; with the `parallel`
//!   feature, [`parallel::generate_signature_parallel`] produces an identical
//!   signature using rayon.
//!
//! ```
//! use std::num::NonZeroU32;
//! use signature::{SignatureParams, generate_signature};
//!
//! let params = SignatureParams::new(NonZeroU32::new(4).unwrap());
//! let signature = generate_signature(b"0123456789", params).unwrap();
//!
//! assert_eq!(signature.blocks().len(), 3);
//! assert_eq!(signature.blocks()[2].len(), 2);
//! ```

mod algorithm;
mod block;
mod content;
mod generation;
mod layout;
#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub mod parallel;

pub use algorithm::StrongAlgorithm;
pub use block::BlockHash;
pub use content::ContentSignature;
pub use generation::{SignatureError, SignatureParams, generate_signature};
pub use layout::{BlockLayout, DEFAULT_BLOCK_LENGTH, MAX_BLOCK_LENGTH, derive_block_length};
