//! Extended binary Golay(24,12) error correction code.
//!
//! The extended Golay code is a `[24, 12, 8]` linear block code discovered by
//! Marcel Golay in 1949. Each 12-bit message is mapped to a 24-bit codeword,
//! and since any two codewords differ in at least 8 positions the decoder can
//! correct every pattern of up to 3 bit errors and detect every pattern of 4.
//!
//! The code is systematic: with the generator matrix `G = [P | I12]` the last
//! 12 bits of a codeword are the message itself. Decoding computes the
//! syndrome `s = H * r^T` against the parity-check matrix `H = [I12 | P]` and
//! runs a short staged search for the coset leader (see [`decoder`]), so no
//! 4096-entry syndrome table is needed.
//!
//! This implementation provides:
//! - A fixed, symmetric 12x12 structure matrix `P`
//! - Generator and parity-check matrix construction
//! - Bit-vector encoding and syndrome decoding
//! - Packed-integer entry points ([`symbol`])
//! - Byte-stream encoding through [`ErrorCorrection`](crate::cs::ecc::ErrorCorrection) ([`stream`])
//!
//! # Applications
//!
//! - Deep-space telemetry (Voyager image data)
//! - Automatic link establishment in HF radio
//! - Land mobile radio headers

use crate::cs::ecc::gf2::{BitMatrix, BitVector};
use crate::cs::ecc::Result;
use crate::cs::error::Error;
use once_cell::sync::Lazy;
use std::fmt::{Display, Formatter};

pub mod decoder;
pub mod stream;
pub mod symbol;


pub use decoder::{Correction, DecodeStage, DecodeStatus, Decoded};

/// Number of information bits per codeword
pub const MESSAGE_BITS: usize = 12;

/// Number of bits in a codeword
pub const CODEWORD_BITS: usize = 24;

/// Minimum Hamming distance between distinct codewords
pub const MIN_DISTANCE: usize = 8;

/// Number of bit errors the decoder always corrects
pub const CORRECTABLE_ERRORS: usize = 3;

/// A 12-bit message
pub type Message = BitVector<MESSAGE_BITS>;

/// A 24-bit codeword, received word or error pattern
pub type Codeword = BitVector<CODEWORD_BITS>;

/// A 12-bit syndrome
pub type Syndrome = BitVector<MESSAGE_BITS>;

/// The 12x12 structure matrix shared by `G` and `H`
pub type StructureMatrix = BitMatrix<MESSAGE_BITS, MESSAGE_BITS>;

/// A 12x24 generator or parity-check matrix
pub type CodeMatrix = BitMatrix<MESSAGE_BITS, CODEWORD_BITS>;

/// Rows of the structure matrix `P`. The matrix is symmetric and `P * P = I`.
const STRUCTURE_ROWS: [[u8; MESSAGE_BITS]; MESSAGE_BITS] = [
    [1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [0, 0, 0, 1, 1, 1, 0, 1, 1, 0, 1, 1],
    [0, 0, 1, 1, 1, 0, 1, 1, 0, 1, 0, 1],
    [0, 1, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1],
    [1, 1, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1],
    [1, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 1],
    [1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1],
    [0, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1, 1],
    [1, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1],
    [0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
];

static STANDARD: Lazy<GolayCode> = Lazy::new(GolayCode::new);

/// The standard structure matrix `P`.
pub fn structure_matrix() -> StructureMatrix {
    BitMatrix::from_binary(STRUCTURE_ROWS)
}

/// Builds the generator matrix `G = [P | I12]`.
///
/// # Arguments
///
/// * `p` - The 12x12 structure matrix
///
/// # Returns
///
/// The 12x24 generator matrix
pub fn build_generator(p: &StructureMatrix) -> CodeMatrix {
    side_by_side(p, &StructureMatrix::identity())
}

/// Builds the parity-check matrix `H = [I12 | P]`.
///
/// # Arguments
///
/// * `p` - The 12x12 structure matrix
///
/// # Returns
///
/// The 12x24 parity-check matrix
pub fn build_parity_check(p: &StructureMatrix) -> CodeMatrix {
    side_by_side(&StructureMatrix::identity(), p)
}

/// Places two 12-column blocks next to each other.
fn side_by_side<const R: usize>(
    left: &BitMatrix<R, MESSAGE_BITS>,
    right: &BitMatrix<R, MESSAGE_BITS>,
) -> BitMatrix<R, CODEWORD_BITS> {
    let mut out = BitMatrix::zeros();
    for r in 0..R {
        for c in 0..MESSAGE_BITS {
            out.set(r, c, left.get(r, c));
            out.set(r, c + MESSAGE_BITS, right.get(r, c));
        }
    }
    out
}

/// Concatenates two 12-bit halves into a 24-bit word.
pub(crate) fn join(left: &Syndrome, right: &Syndrome) -> Codeword {
    side_by_side(left, right)
}

/// Splits a 24-bit word into its first and last 12 bits.
pub(crate) fn split(word: &Codeword) -> (Syndrome, Syndrome) {
    let mut left = Syndrome::zeros();
    let mut right = Syndrome::zeros();
    for i in 0..MESSAGE_BITS {
        left.set_bit(i, word.bit(i));
        right.set_bit(i, word.bit(i + MESSAGE_BITS));
    }
    (left, right)
}

/// A Golay(24,12) encoder/decoder.
///
/// Holds the structure matrix and the generator and parity-check matrices
/// derived from it. The value is immutable once built, so a single instance
/// can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GolayCode {
    p: StructureMatrix,
    generator: CodeMatrix,
    parity_check: CodeMatrix,
}

impl GolayCode {
    /// Creates a codec over the standard structure matrix.
    ///
    /// # Returns
    ///
    /// A new `GolayCode` with `G` and `H` built from the standard `P`
    pub fn new() -> Self {
        Self::from_symmetric(structure_matrix())
    }

    /// Creates a codec over a caller-supplied structure matrix.
    ///
    /// # Arguments
    ///
    /// * `p` - Symmetric 12x12 structure matrix
    ///
    /// # Returns
    ///
    /// A new `GolayCode` or an error if `p` is not symmetric
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `p` is not symmetric; the decoder
    /// reads rows of `P` where the syndrome equations use its columns.
    pub fn with_structure(p: StructureMatrix) -> Result<Self> {
        if !p.is_symmetric() {
            return Err(Error::InvalidInput(
                "Structure matrix must be symmetric".to_string(),
            ));
        }
        Ok(Self::from_symmetric(p))
    }

    fn from_symmetric(p: StructureMatrix) -> Self {
        GolayCode {
            generator: build_generator(&p),
            parity_check: build_parity_check(&p),
            p,
        }
    }

    /// The process-wide codec over the standard structure matrix, built on
    /// first use.
    pub fn standard() -> &'static GolayCode {
        &STANDARD
    }

    /// The structure matrix `P`.
    pub fn structure(&self) -> &StructureMatrix {
        &self.p
    }

    /// The generator matrix `G = [P | I12]`.
    pub fn generator(&self) -> &CodeMatrix {
        &self.generator
    }

    /// The parity-check matrix `H = [I12 | P]`.
    pub fn parity_check(&self) -> &CodeMatrix {
        &self.parity_check
    }

    /// Encodes a message as `v = m * G`.
    ///
    /// # Arguments
    ///
    /// * `message` - The 12 information bits
    ///
    /// # Returns
    ///
    /// The 24-bit codeword, whose last 12 bits equal `message`
    pub fn encode(&self, message: &Message) -> Codeword {
        message.multiply(&self.generator)
    }

    /// Computes the syndrome `s = H * r^T` as a row vector.
    ///
    /// # Arguments
    ///
    /// * `received` - A possibly corrupted 24-bit word
    ///
    /// # Returns
    ///
    /// The 12-bit syndrome, zero iff `received` is a codeword
    pub fn syndrome(&self, received: &Codeword) -> Syndrome {
        self.parity_check.multiply(&received.transpose()).transpose()
    }

    /// Returns true if `word` is a codeword.
    pub fn is_codeword(&self, word: &Codeword) -> bool {
        self.syndrome(word).is_zero()
    }

    /// Extracts the message from a codeword (its last 12 bits).
    pub fn extract_message(codeword: &Codeword) -> Message {
        split(codeword).1
    }
}

impl Default for GolayCode {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for GolayCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Golay({},{},{})",
            CODEWORD_BITS, MESSAGE_BITS, MIN_DISTANCE
        )
    }
}

/// Creates a Golay(24,12) codec over the standard structure matrix
pub fn create_golay() -> GolayCode {
    GolayCode::new()
}

/// Encodes a message using the shared standard codec
pub fn golay_encode(message: &Message) -> Codeword {
    GolayCode::standard().encode(message)
}

/// Decodes a received word using the shared standard codec
pub fn golay_decode(received: &Codeword) -> Decoded {
    GolayCode::standard().decode(received)
}
