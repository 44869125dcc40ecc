//! Code table construction and bitstream encode/decode.
//!
//! One traversal after tree construction assigns every symbol its
//! root-to-leaf path (left = 0, right = 1), so encoding is a table lookup
//! per input byte instead of a tree descent. Decoding replays the tree
//! bit-by-bit: each leaf arrival emits a symbol and resets the cursor to
//! the root, until the counted number of symbols has been produced.

use crate::error::{Result, TreeError};
use crate::tree::{Node, Tree};
use crate::wordio::{WordReader, WordWriter};

/// A symbol's bit path from root to leaf.
///
/// Zero-length for the single-leaf degenerate tree: the lone symbol is
/// encoded by position alone and consumes no bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// The path bits, root-first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Path length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the degenerate zero-bit code.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

/// Precomputed byte-to-code table for one tree.
#[derive(Debug, Clone)]
pub struct Codebook {
    codes: Vec<Option<Code>>,
}

impl Codebook {
    /// Collect every leaf's path from a built tree.
    pub fn from_tree(tree: &Tree) -> Self {
        let mut codes = vec![None; 256];
        collect_codes(tree.root(), &mut Vec::new(), &mut codes);
        Codebook { codes }
    }

    /// The code assigned to `symbol`, if it occurs in the tree.
    pub fn code(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Encode `input` into a packed word payload.
    ///
    /// # Errors
    /// `TreeError::UnknownSymbol` if a byte has no code. Cannot happen when
    /// the tree was built from this same input's frequencies.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut writer = WordWriter::new();
        for &symbol in input {
            let code = self.codes[symbol as usize]
                .as_ref()
                .ok_or(TreeError::UnknownSymbol { symbol })?;
            for &bit in code.bits() {
                writer.push_bit(bit);
            }
        }
        Ok(writer.finish())
    }
}

fn collect_codes(node: &Node, path: &mut Vec<bool>, codes: &mut [Option<Code>]) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes[*symbol as usize] = Some(Code { bits: path.clone() });
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            collect_codes(left, path, codes);
            path.pop();
            path.push(true);
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}

/// Decode `symbol_count` symbols by walking `tree` against the payload.
///
/// A single-leaf tree emits its symbol `symbol_count` times without
/// touching the payload. Otherwise the cursor descends one bit at a time;
/// bits past the end of the payload read as zero (see [`crate::wordio`]),
/// so every descent terminates within the tree's depth and the loop is
/// bounded by the symbol count.
///
/// # Errors
/// `WordIoError::TrailingBytes` if the payload is not whole words.
pub fn decode(tree: &Tree, payload: &[u8], symbol_count: u64) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(symbol_count as usize);
    if symbol_count == 0 {
        return Ok(output);
    }

    if let Node::Leaf { symbol, .. } = tree.root() {
        output.resize(symbol_count as usize, *symbol);
        return Ok(output);
    }

    let mut reader = WordReader::new(payload)?;
    let mut cursor = tree.root();
    while (output.len() as u64) < symbol_count {
        match cursor {
            Node::Internal { left, right, .. } => {
                cursor = if reader.next_bit() { right } else { left };
            }
            Node::Leaf { symbol, .. } => {
                output.push(*symbol);
                cursor = tree.root();
            }
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    fn tree_for(input: &[u8]) -> Tree {
        Tree::from_frequencies(&FrequencyTable::from_bytes(input)).unwrap()
    }

    fn code_bits(codebook: &Codebook, symbol: u8) -> Vec<u8> {
        codebook
            .code(symbol)
            .unwrap()
            .bits()
            .iter()
            .map(|&b| b as u8)
            .collect()
    }

    #[test]
    fn test_paths_for_skewed_frequencies() {
        // a=4 b=3 c=2 d=1 gives a=0, b=10, d=110, c=111.
        let tree = tree_for(b"aaaabbbccd");
        let codebook = Codebook::from_tree(&tree);

        assert_eq!(code_bits(&codebook, b'a'), vec![0]);
        assert_eq!(code_bits(&codebook, b'b'), vec![1, 0]);
        assert_eq!(code_bits(&codebook, b'd'), vec![1, 1, 0]);
        assert_eq!(code_bits(&codebook, b'c'), vec![1, 1, 1]);
        assert!(codebook.code(b'e').is_none());
    }

    #[test]
    fn test_no_code_is_a_prefix_of_another() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let codebook = Codebook::from_tree(&tree_for(input));

        let codes: Vec<Vec<u8>> = (0u16..256)
            .filter_map(|s| codebook.code(s as u8))
            .map(|c| c.bits().iter().map(|&b| b as u8).collect())
            .collect();

        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{a:?} is a prefix of {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_single_symbol_zero_length_code() {
        let tree = tree_for(b"AAAA");
        let codebook = Codebook::from_tree(&tree);

        let code = codebook.code(b'A').unwrap();
        assert!(code.is_empty());
        assert_eq!(code.len(), 0);

        // Encoding produces no bits and therefore no words.
        assert_eq!(codebook.encode(b"AAAA").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_symbol_decode_ignores_payload() {
        let tree = tree_for(b"AAAA");
        let decoded = decode(&tree, &[], 4).unwrap();
        assert_eq!(decoded, b"AAAA");
    }

    #[test]
    fn test_unknown_symbol_is_an_error() {
        let codebook = Codebook::from_tree(&tree_for(b"ab"));
        let result = codebook.encode(b"abc");
        assert!(matches!(
            result,
            Err(crate::error::Error::Tree(TreeError::UnknownSymbol {
                symbol: b'c'
            }))
        ));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let input = b"aaaabbbccd";
        let tree = tree_for(input);
        let codebook = Codebook::from_tree(&tree);

        let payload = codebook.encode(input).unwrap();
        // 19 bits fit one word.
        assert_eq!(payload.len(), 4);

        let decoded = decode(&tree, &payload, input.len() as u64).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_decode_zero_symbols() {
        let tree = tree_for(b"xy");
        assert_eq!(decode(&tree, &[], 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_relies_on_zero_synthesis_for_dropped_tail() {
        // Equal counts tie-break to a=0, b=1. Twenty b's then twenty a's
        // puts bits 32..39 all zero, so the writer drops the second word
        // and the decoder must synthesize it.
        let mut input = vec![b'b'; 20];
        input.extend_from_slice(&[b'a'; 20]);

        let tree = tree_for(&input);
        let codebook = Codebook::from_tree(&tree);
        let payload = codebook.encode(&input).unwrap();
        assert_eq!(payload.len(), 4); // 40 bits, second word dropped

        let decoded = decode(&tree, &payload, input.len() as u64).unwrap();
        assert_eq!(decoded, input);
    }
}
