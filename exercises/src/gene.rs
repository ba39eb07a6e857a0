//! 2-bit packing of nucleotide strings.
//!
//! A=00, C=01, G=10, T=11, four nucleotides per byte, lowest bits first.
//! Input is case-insensitive. Any other character is logged and dropped.

use std::fmt;

use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedGene {
    bits: Vec<u8>,
    len: usize,
    skipped: usize,
}

impl CompressedGene {
    pub fn compress(gene: &str) -> Self {
        let mut bits = Vec::with_capacity(gene.len().div_ceil(4));
        let mut len = 0;
        let mut skipped = 0;

        for (position, ch) in gene.chars().enumerate() {
            let code: u8 = match ch.to_ascii_uppercase() {
                'A' => 0b00,
                'C' => 0b01,
                'G' => 0b10,
                'T' => 0b11,
                other => {
                    warn!(character = %other, position, "skipping invalid nucleotide");
                    skipped += 1;
                    continue;
                }
            };
            let shift = (len % 4) * 2;
            if shift == 0 {
                bits.push(0u8);
            }
            if let Some(byte) = bits.last_mut() {
                *byte |= code << shift;
            }
            len += 1;
        }

        Self { bits, len, skipped }
    }

    pub fn decompress(&self) -> String {
        (0..self.len)
            .map(|i| match (self.bits[i / 4] >> ((i % 4) * 2)) & 0b11 {
                0b00 => 'A',
                0b01 => 'C',
                0b10 => 'G',
                _ => 'T',
            })
            .collect()
    }

    /// Number of nucleotides stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Characters dropped during compression.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Packed size in bytes.
    pub fn byte_len(&self) -> usize {
        self.bits.len()
    }
}

impl fmt::Display for CompressedGene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decompress())
    }
}
