//! Packed-integer entry points.
//!
//! Messages and codewords are packed most-significant-bit first: bit 0 of a
//! vector is the highest bit of the 12-bit or 24-bit field. Values wider than
//! the field are rejected rather than truncated.

use crate::cs::ecc::gf2::{BitMatrix, BitVector};
use crate::cs::ecc::golay::{GolayCode, CODEWORD_BITS, MESSAGE_BITS};
use crate::cs::ecc::Result;
use crate::cs::error::Error;
use bitvec::prelude::*;

const WORD_BITS: usize = u32::BITS as usize;

fn unpack<const N: usize>(value: u32) -> Result<BitVector<N>> {
    if value.checked_shr(N as u32).unwrap_or(0) != 0 {
        return Err(Error::SymbolOutOfRange {
            value: u64::from(value),
            bits: N,
        });
    }

    let bits = value.view_bits::<Msb0>();
    let mut vector = BitVector::<N>::zeros();
    for (i, bit) in bits[WORD_BITS - N..].iter().by_vals().enumerate() {
        vector.set_bit(i, bit);
    }
    Ok(vector)
}

fn pack<const N: usize>(vector: &BitVector<N>) -> u32 {
    let mut value = 0u32;
    let bits = value.view_bits_mut::<Msb0>();
    for (i, &bit) in vector.bits().iter().enumerate() {
        bits.set(WORD_BITS - N + i, bit);
    }
    value
}

impl BitMatrix<1, MESSAGE_BITS> {
    /// Unpacks a 12-bit message.
    ///
    /// # Arguments
    ///
    /// * `value` - Message in the low 12 bits, first bit highest
    ///
    /// # Returns
    ///
    /// The message vector or an error if `value` is too wide
    ///
    /// # Errors
    ///
    /// Returns `Error::SymbolOutOfRange` if `value` does not fit in 12 bits
    pub fn from_packed(value: u16) -> Result<Self> {
        unpack(u32::from(value))
    }

    /// Packs the message into the low 12 bits, first bit highest.
    pub fn to_packed(&self) -> u16 {
        // 12 bits always fit
        pack(self) as u16
    }
}

impl BitMatrix<1, CODEWORD_BITS> {
    /// Unpacks a 24-bit word.
    ///
    /// # Arguments
    ///
    /// * `value` - Word in the low 24 bits, first bit highest
    ///
    /// # Returns
    ///
    /// The word vector or an error if `value` is too wide
    ///
    /// # Errors
    ///
    /// Returns `Error::SymbolOutOfRange` if `value` does not fit in 24 bits
    pub fn from_packed(value: u32) -> Result<Self> {
        unpack(value)
    }

    /// Packs the word into the low 24 bits, first bit highest.
    pub fn to_packed(&self) -> u32 {
        pack(self)
    }
}

impl GolayCode {
    /// Encodes a 12-bit message held in the low bits of `symbol`.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Packed message
    ///
    /// # Returns
    ///
    /// The packed 24-bit codeword
    ///
    /// # Errors
    ///
    /// Returns `Error::SymbolOutOfRange` if `symbol` is 2^12 or larger
    pub fn encode_symbol(&self, symbol: u32) -> Result<u32> {
        let message = unpack::<MESSAGE_BITS>(symbol)?;
        Ok(self.encode(&message).to_packed())
    }

    /// Decodes a 24-bit received word held in the low bits of `symbol`.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Packed received word
    ///
    /// # Returns
    ///
    /// The packed message, or `None` if the word is uncorrectable
    ///
    /// # Errors
    ///
    /// Returns `Error::SymbolOutOfRange` if `symbol` is 2^24 or larger
    pub fn decode_symbol(&self, symbol: u32) -> Result<Option<u16>> {
        let received = unpack::<CODEWORD_BITS>(symbol)?;
        Ok(self.decode(&received).message().map(|m| m.to_packed()))
    }
}

/// Encodes a packed 12-bit message using the shared standard codec
pub fn golay_encode_symbol(symbol: u32) -> Result<u32> {
    GolayCode::standard().encode_symbol(symbol)
}

/// Decodes a packed 24-bit word using the shared standard codec
pub fn golay_decode_symbol(symbol: u32) -> Result<Option<u16>> {
    GolayCode::standard().decode_symbol(symbol)
}
