//! High-level encode/decode orchestration.
//!
//! Encoding runs the pipeline input → frequency table → tree → codebook →
//! packed payload → archive bytes; decoding inverts it, rebuilding the
//! tree from the archive's leaf section through the identical construction
//! path. Both directions are single-threaded with blocking I/O, and every
//! failure surfaces to the caller; nothing is retried.

use crate::archive;
use crate::codebook::{self, Codebook};
use crate::error::Result;
use crate::freq::FrequencyTable;
use crate::tree::Tree;
use std::fs;
use std::path::Path;

/// Encode `input` into archive bytes.
///
/// Empty input is a degenerate archive: no leaf lines, the sentinel, a
/// count of zero, and no payload.
pub fn encode_to_vec(input: &[u8]) -> Result<Vec<u8>> {
    let frequencies = FrequencyTable::from_bytes(input);
    if frequencies.is_empty() {
        return Ok(archive::serialize_archive(&[], 0, &[]));
    }

    let tree = Tree::from_frequencies(&frequencies)?;
    let codebook = Codebook::from_tree(&tree);
    let payload = codebook.encode(input)?;

    Ok(archive::serialize_archive(
        &tree.leaves(),
        input.len() as u64,
        &payload,
    ))
}

/// Decode archive bytes back into the original input.
pub fn decode_from_slice(bytes: &[u8]) -> Result<Vec<u8>> {
    let archive = archive::parse_archive(bytes)?;
    if archive.symbol_count == 0 {
        return Ok(Vec::new());
    }

    let tree = Tree::from_frequencies(&archive.frequencies)?;
    codebook::decode(&tree, archive.payload, archive.symbol_count)
}

/// Encode `input` and write the archive to `path`, overwriting any
/// existing file.
pub fn encode_to_file<P: AsRef<Path>>(input: &[u8], path: P) -> Result<()> {
    let bytes = encode_to_vec(input)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Read the archive at `path` and decode it.
pub fn decode_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let bytes = fs::read(path)?;
    decode_from_slice(&bytes)
}
