//! Byte-stream coding with Golay(24,12).
//!
//! Every 3 data bytes hold two 12-bit messages and encode to 6 bytes holding
//! two 24-bit codewords, so no padding is ever needed. Chunks are independent
//! and are processed on the rayon pool when the `parallel` feature is on.

use crate::cs::ecc::gf2::BitVector;
use crate::cs::ecc::golay::{Decoded, GolayCode, CODEWORD_BITS, MESSAGE_BITS};
use crate::cs::ecc::{ErrorCorrection, Result};
use crate::cs::error::Error;
use bitvec::prelude::*;

/// Data bytes per chunk (two messages)
pub const DATA_CHUNK_BYTES: usize = 3;

/// Encoded bytes per chunk (two codewords)
pub const CODED_CHUNK_BYTES: usize = 6;

const BLOCKS_PER_CHUNK: usize = 2;

fn vector_from_bits<const N: usize>(bits: &BitSlice<u8, Msb0>) -> BitVector<N> {
    let mut vector = BitVector::zeros();
    for (i, bit) in bits.iter().by_vals().take(N).enumerate() {
        vector.set_bit(i, bit);
    }
    vector
}

fn map_chunks<const IN: usize, const OUT: usize, F>(data: &[u8], f: F) -> Result<Vec<u8>>
where
    F: Fn(usize, &[u8]) -> Result<[u8; OUT]> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    let chunks: Result<Vec<[u8; OUT]>> = {
        use rayon::prelude::*;
        data.par_chunks_exact(IN)
            .enumerate()
            .map(|(i, chunk)| f(i, chunk))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let chunks: Result<Vec<[u8; OUT]>> = data
        .chunks_exact(IN)
        .enumerate()
        .map(|(i, chunk)| f(i, chunk))
        .collect();

    Ok(chunks?.concat())
}

impl GolayCode {
    fn encode_chunk(&self, chunk: &[u8]) -> [u8; CODED_CHUNK_BYTES] {
        let mut out = [0u8; CODED_CHUNK_BYTES];
        let out_bits = out.view_bits_mut::<Msb0>();

        for (input, output) in chunk
            .view_bits::<Msb0>()
            .chunks_exact(MESSAGE_BITS)
            .zip(out_bits.chunks_exact_mut(CODEWORD_BITS))
        {
            let codeword = self.encode(&vector_from_bits(input));
            for (i, &bit) in codeword.bits().iter().enumerate() {
                output.set(i, bit);
            }
        }
        out
    }

    fn decode_chunk(&self, index: usize, chunk: &[u8]) -> Result<[u8; DATA_CHUNK_BYTES]> {
        let mut out = [0u8; DATA_CHUNK_BYTES];
        let out_bits = out.view_bits_mut::<Msb0>();

        for (k, (input, output)) in chunk
            .view_bits::<Msb0>()
            .chunks_exact(CODEWORD_BITS)
            .zip(out_bits.chunks_exact_mut(MESSAGE_BITS))
            .enumerate()
        {
            let block = index * BLOCKS_PER_CHUNK + k;
            let correction = match self.decode(&vector_from_bits(input)) {
                Decoded::Corrected(correction) => correction,
                Decoded::Uncorrectable { .. } => return Err(Error::Uncorrectable { block }),
            };

            if correction.corrected_bits() > 0 {
                log::debug!(
                    "block {}: corrected {} bit(s)",
                    block,
                    correction.corrected_bits()
                );
            }
            for (i, &bit) in correction.message.bits().iter().enumerate() {
                output.set(i, bit);
            }
        }
        Ok(out)
    }
}

impl ErrorCorrection for GolayCode {
    /// Encodes `data`, whose length must be a multiple of 3 bytes.
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() % DATA_CHUNK_BYTES != 0 {
            return Err(Error::InvalidInput(format!(
                "Data length must be a multiple of {} bytes, got {}",
                DATA_CHUNK_BYTES,
                data.len()
            )));
        }

        map_chunks::<DATA_CHUNK_BYTES, CODED_CHUNK_BYTES, _>(data, |_, chunk| {
            Ok(self.encode_chunk(chunk))
        })
    }

    /// Decodes `data`, whose length must be a multiple of 6 bytes.
    ///
    /// Fails with `Error::Uncorrectable` naming the first bad 24-bit block.
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() % CODED_CHUNK_BYTES != 0 {
            return Err(Error::InvalidInput(format!(
                "Encoded length must be a multiple of {} bytes, got {}",
                CODED_CHUNK_BYTES,
                data.len()
            )));
        }

        map_chunks::<CODED_CHUNK_BYTES, DATA_CHUNK_BYTES, _>(data, |index, chunk| {
            self.decode_chunk(index, chunk)
        })
    }
}

/// Encodes bytes using the shared standard codec
pub fn golay_encode_bytes(data: &[u8]) -> Result<Vec<u8>> {
    ErrorCorrection::encode(GolayCode::standard(), data)
}

/// Decodes bytes using the shared standard codec
pub fn golay_decode_bytes(encoded: &[u8]) -> Result<Vec<u8>> {
    ErrorCorrection::decode(GolayCode::standard(), encoded)
}
