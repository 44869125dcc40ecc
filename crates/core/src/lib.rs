//! huffpack-core: byte-frequency prefix-code compression with a
//! self-describing archive format.
//!
//! This library builds a Huffman tree from the frequency distribution of
//! bytes in an input, serializes that tree plus an encoded bitstream into
//! an archive, and reconstructs the original bytes by replaying the tree
//! against the bitstream.
//!
//! # Architecture
//!
//! The codec is built from small modules with clear boundaries:
//! - `freq`: byte-frequency counting
//! - `tree`: deterministic greedy Huffman construction
//! - `codebook`: byte-to-bit-path table, bitstream encode/decode
//! - `wordio`: 32-bit word packing for the payload
//! - `archive`: the on-disk format (leaf listing, sentinel, count, words)
//! - `codec`: encode/decode orchestration and file I/O
//! - `metrics`: run statistics for callers that report them
//!
//! # Design Principles
//!
//! - **No panics**: corrupt archives and degenerate inputs return
//!   structured errors
//! - **Deterministic**: encode and decode rebuild the tree with the same
//!   algorithm, so the code assignment always lines up
//! - **Pure core**: decode returns bytes; writing to a stream is the
//!   caller's concern

pub mod archive;
pub mod codebook;
pub mod codec;
pub mod error;
pub mod freq;
pub mod metrics;
pub mod tree;
pub mod wordio;

// Re-export commonly used items
pub use codec::{decode_from_file, decode_from_slice, encode_to_file, encode_to_vec};
pub use error::{Error, Result};
