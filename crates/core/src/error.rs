//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! This keeps corrupt archives and degenerate inputs reportable to the
//! caller instead of looping or reading past buffers.

use thiserror::Error;

/// Top-level error type for all operations in the codec.
///
/// Each variant corresponds to a specific failure domain:
/// - Tree: frequency-table and tree-construction failures
/// - Archive: malformed or truncated archive files
/// - Word I/O: bitstream payloads that cannot be framed into words
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Tree construction or code lookup failed
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// Archive parsing failed (corrupt or truncated file)
    #[error("corrupt archive: {0}")]
    Archive(#[from] ArchiveError),

    /// Bitstream payload could not be framed into 32-bit words
    #[error("word I/O error: {0}")]
    WordIo(#[from] WordIoError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tree construction and codebook errors.
#[derive(Debug, Error)]
pub enum TreeError {
    /// No symbols with non-zero frequency (cannot build a tree)
    #[error("empty frequency table: cannot build a tree")]
    EmptyFrequencyTable,

    /// A byte to encode has no code in the tree's codebook
    #[error("symbol {symbol:#04x} has no code in this tree")]
    UnknownSymbol { symbol: u8 },
}

/// Archive format errors.
///
/// The archive has no magic number or checksum, so these are the only
/// corruption signals available to the parser.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// End of file reached before the leaf-section sentinel
    #[error("leaf section not terminated: no sentinel before end of file")]
    MissingSentinel,

    /// A leaf line's frequency field is not a positive decimal integer
    #[error("invalid frequency {field:?} for symbol {symbol:#04x}")]
    InvalidFrequency { symbol: u8, field: String },

    /// The same byte value appears in two leaf lines
    #[error("symbol {symbol:#04x} listed twice in leaf section")]
    DuplicateLeaf { symbol: u8 },

    /// File ends after the sentinel, before the symbol count
    #[error("symbol count missing after leaf section")]
    MissingLength,

    /// The symbol-count field disagrees with the sum of leaf frequencies
    #[error("symbol count does not match leaf frequencies (expected {expected})")]
    LengthMismatch { expected: u64 },
}

/// Word-level bitstream errors.
#[derive(Debug, Error)]
pub enum WordIoError {
    /// Payload length is not a whole number of 32-bit words
    #[error("payload length {len} is not a whole number of 32-bit words")]
    TrailingBytes { len: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
