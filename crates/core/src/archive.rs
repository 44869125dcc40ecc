//! The on-disk archive format.
//!
//! An archive interleaves a textual tree description with a packed binary
//! bitstream:
//!
//! ```text
//! +----------------------+
//! | leaf lines           |  one per leaf: raw symbol byte, ASCII decimal
//! |                      |  frequency, '\n', in post-order (left subtree
//! |                      |  first, then right, then the leaf itself)
//! +----------------------+
//! | '|' "-1" '\n'        |  sentinel terminating the leaf section
//! +----------------------+
//! | ASCII decimal count  |  original symbol count, no trailing newline
//! +----------------------+
//! | packed words         |  32-bit little-endian words, LSB-first bits
//! +----------------------+
//! ```
//!
//! There is no magic number, version field, or checksum: the format is
//! self-describing only through the sentinel and the leaf frequencies.
//! The decoder does not read a tree shape; it rebuilds the tree from the
//! leaf frequencies with the same deterministic construction the encoder
//! used, which is what makes the code assignment line up.
//!
//! # Parsing hazards
//!
//! Two quirks of the format are handled here rather than changed, to keep
//! written archives byte-compatible:
//!
//! - A leaf line for the byte `|` collides with the sentinel in its first
//!   byte; it stays parseable because real frequencies are never `-1`.
//! - The symbol count has no trailing delimiter and the first payload byte
//!   may itself be an ASCII digit, so a greedy digit scan could swallow
//!   payload. The count is redundant with the leaf-frequency sum, so the
//!   parser computes the sum, renders it in decimal, and requires the file
//!   to contain exactly those bytes.

use crate::error::{ArchiveError, Result};
use crate::freq::FrequencyTable;

/// Raw byte opening the sentinel line.
pub const SENTINEL_SYMBOL: u8 = b'|';

/// Frequency field of the sentinel line.
const SENTINEL_FIELD: &[u8] = b"-1";

/// A parsed archive: rebuilt frequencies, declared symbol count, and the
/// borrowed bitstream payload.
#[derive(Debug)]
pub struct Archive<'a> {
    /// Frequencies recovered from the leaf section
    pub frequencies: FrequencyTable,

    /// Number of symbols the payload decodes to
    pub symbol_count: u64,

    /// Packed word payload (possibly shorter than the bitstream implies;
    /// missing trailing words read as zero)
    pub payload: &'a [u8],
}

/// Serialize the leaf listing, sentinel, symbol count, and payload into a
/// single buffer ready to be written to disk.
///
/// `leaves` must already be in serialization order. An empty leaf slice
/// with a zero count produces the degenerate empty-input archive.
pub fn serialize_archive(leaves: &[(u8, u64)], symbol_count: u64, payload: &[u8]) -> Vec<u8> {
    // Leaf lines average a handful of bytes; reserve roughly enough.
    let mut out = Vec::with_capacity(leaves.len() * 8 + 24 + payload.len());

    for &(symbol, freq) in leaves {
        out.push(symbol);
        out.extend_from_slice(freq.to_string().as_bytes());
        out.push(b'\n');
    }

    out.push(SENTINEL_SYMBOL);
    out.extend_from_slice(SENTINEL_FIELD);
    out.push(b'\n');

    out.extend_from_slice(symbol_count.to_string().as_bytes());
    out.extend_from_slice(payload);
    out
}

/// Parse an archive from bytes.
///
/// # Errors
/// - `ArchiveError::MissingSentinel` if the file ends inside the leaf section
/// - `ArchiveError::InvalidFrequency` for a non-positive or non-numeric field
/// - `ArchiveError::DuplicateLeaf` if a byte value is listed twice
/// - `ArchiveError::MissingLength` if the file ends right after the sentinel
/// - `ArchiveError::LengthMismatch` if the count disagrees with the leaf sum
pub fn parse_archive(bytes: &[u8]) -> Result<Archive<'_>> {
    let mut frequencies = FrequencyTable::new();
    let mut pos = 0;

    loop {
        if pos >= bytes.len() {
            return Err(ArchiveError::MissingSentinel.into());
        }

        // One raw symbol byte (any value, including '\n' and '|'), then the
        // frequency field up to the line's newline.
        let symbol = bytes[pos];
        pos += 1;

        let newline = match bytes[pos..].iter().position(|&b| b == b'\n') {
            Some(i) => pos + i,
            None => return Err(ArchiveError::MissingSentinel.into()),
        };
        let field = &bytes[pos..newline];
        pos = newline + 1;

        if symbol == SENTINEL_SYMBOL && field == SENTINEL_FIELD {
            break;
        }

        let freq = parse_frequency(symbol, field)?;
        if frequencies.count(symbol) != 0 {
            return Err(ArchiveError::DuplicateLeaf { symbol }.into());
        }
        frequencies.record(symbol, freq);
    }

    // The payload follows the count with no delimiter, so match the count
    // against the digits the encoder must have written: the leaf sum.
    let expected = frequencies.total();
    let digits = expected.to_string();
    let end = pos + digits.len();
    if end > bytes.len() {
        return Err(ArchiveError::MissingLength.into());
    }
    if &bytes[pos..end] != digits.as_bytes() {
        return Err(ArchiveError::LengthMismatch { expected }.into());
    }

    Ok(Archive {
        frequencies,
        symbol_count: expected,
        payload: &bytes[end..],
    })
}

fn parse_frequency(symbol: u8, field: &[u8]) -> Result<u64> {
    let invalid = || ArchiveError::InvalidFrequency {
        symbol,
        field: String::from_utf8_lossy(field).into_owned(),
    };

    let text = std::str::from_utf8(field).map_err(|_| invalid())?;
    let freq: u64 = text.parse().map_err(|_| invalid())?;
    // The encoder only writes leaves for symbols that occur.
    if freq == 0 {
        return Err(invalid().into());
    }
    Ok(freq)
}
