//! Text to bits and back.
//!
//! Every character is hidden as one byte, most significant bit first. Only code points
//! up to `U+00FF` fit into a byte, everything above is rejected instead of truncated.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::error::StegoError;
use crate::result::Result;

/// ordered sequence of single bits as they are hidden in a carrier
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BitSequence(Vec<bool>);

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self(Vec::with_capacity(bits))
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, bool> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for BitSequence {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = &'a bool;
    type IntoIter = std::slice::Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// maps each character onto exactly one byte
pub fn text_to_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(character)
                .map_err(|_| StegoError::UnsupportedCharacter { character, position })
        })
        .collect()
}

/// encodes a text into bits, 8 per character, big endian
pub fn encode(text: &str) -> Result<BitSequence> {
    let bytes = text_to_bytes(text)?;
    let bit_count = bytes.len() << 3;
    let mut reader = BitReader::endian(Cursor::new(bytes), BigEndian);

    let mut bits = BitSequence::with_capacity(bit_count);
    for _ in 0..bit_count {
        bits.push(reader.read_bit()?);
    }

    Ok(bits)
}

/// decodes bits back into text, a trailing group of less than 8 bits is dropped
pub fn decode(bits: &BitSequence) -> String {
    bits.as_slice()
        .chunks_exact(8)
        .map(|byte| {
            byte.iter()
                .fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit))
        })
        .map(char::from)
        .collect()
}
