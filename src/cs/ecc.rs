//! Error correction code implementations.
//!
//! This module provides the extended binary Golay(24,12) code together with
//! the GF(2) matrix algebra it is built on.
//!
//! # Error Correction Algorithms
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! # Examples
//!
//! ```rust
//! use golay_codec::cs::ecc::golay::{GolayCode, Message};
//!
//! let code = GolayCode::new();
//! let message = Message::from_packed(0xB3A).unwrap();
//!
//! let mut received = code.encode(&message);
//! received.flip(2);
//! received.flip(15);
//! received.flip(21);
//!
//! assert_eq!(code.decode(&received).message(), Some(message));
//! ```

use crate::cs::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Binary matrices and vectors over GF(2)
pub mod gf2;
pub use gf2::{BitMatrix, BitVector};

/// Extended binary Golay(24,12) code
pub mod golay;
pub use golay::stream::{golay_decode_bytes, golay_encode_bytes};
pub use golay::symbol::{golay_decode_symbol, golay_encode_symbol};
pub use golay::{
    create_golay, golay_decode, golay_encode, Codeword, Correction, DecodeStage, DecodeStatus,
    Decoded, GolayCode, Message, Syndrome,
};
