//! Syndrome decoding for Golay(24,12).
//!
//! Every received word `r = v + e` has syndrome `s = H * r^T = H * e^T`, so
//! the syndrome identifies the error pattern's coset. Instead of a full
//! coset-leader table the decoder tests the syndrome against a fixed
//! sequence of candidate leader shapes, accepting the first one that fits:
//!
//! 1. `w(s) <= 3`: the error is `[s, 0]`.
//! 2. `w(s + p_j) <= 2` for some row `p_j` of `P`: the error is `[s + p_j, u_j]`.
//! 3. `w(s * P)` is 2 or 3: the error is `[0, s * P]`.
//! 4. `w(s * P + p_j) == 2` for some row: the error is `[u_j, s * P + p_j]`.
//!
//! Searches over rows always take the lowest matching index. If no stage
//! fits, more than 3 errors occurred and the word is reported as
//! uncorrectable.

use crate::cs::ecc::golay::{
    join, Codeword, GolayCode, Message, StructureMatrix, Syndrome, CORRECTABLE_ERRORS,
    MESSAGE_BITS,
};

/// Residue weight tested against by both row searches
const ROW_MATCH_WEIGHT: usize = 2;

/// Which stage of the search produced the error estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStage {
    /// The syndrome itself was light enough to be the error
    LightSyndrome,
    /// The syndrome matched a row of `P` within two bits
    RowSearch { row: usize },
    /// The transformed syndrome `s * P` was the error
    ColumnTransform,
    /// The transformed syndrome matched a row of `P` in exactly two bits
    ColumnRowSearch { row: usize },
}

/// Outcome class of a decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStatus {
    Corrected,
    Uncorrectable,
}

/// A successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    /// Recovered message (last 12 bits of `codeword`)
    pub message: Message,
    /// Estimated transmitted codeword
    pub codeword: Codeword,
    /// Estimated error pattern
    pub error: Codeword,
    pub stage: DecodeStage,
}

impl Correction {
    /// Number of bits the decoder flipped.
    pub fn corrected_bits(&self) -> usize {
        self.error.weight()
    }
}

/// Result of decoding one received word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Corrected(Correction),
    /// The error pattern lies outside the correction radius.
    Uncorrectable { syndrome: Syndrome },
}

impl Decoded {
    /// Whether the word was corrected or found uncorrectable.
    pub fn status(&self) -> DecodeStatus {
        match self {
            Decoded::Corrected(_) => DecodeStatus::Corrected,
            Decoded::Uncorrectable { .. } => DecodeStatus::Uncorrectable,
        }
    }

    /// Returns true for `Decoded::Corrected`.
    pub fn is_corrected(&self) -> bool {
        matches!(self, Decoded::Corrected(_))
    }

    /// The recovered message, if decoding succeeded.
    pub fn message(&self) -> Option<Message> {
        self.correction().map(|c| c.message)
    }

    /// The full correction, if decoding succeeded.
    pub fn correction(&self) -> Option<&Correction> {
        match self {
            Decoded::Corrected(correction) => Some(correction),
            Decoded::Uncorrectable { .. } => None,
        }
    }
}

impl GolayCode {
    /// Decodes a received word, correcting up to three bit errors.
    ///
    /// # Arguments
    ///
    /// * `received` - The 24-bit word read from the channel
    ///
    /// # Returns
    ///
    /// `Decoded::Corrected` with the recovered message, or
    /// `Decoded::Uncorrectable` if more than three bits were flipped. An
    /// uncorrectable word is an expected outcome on a noisy channel, not an
    /// error.
    pub fn decode(&self, received: &Codeword) -> Decoded {
        let syndrome = self.syndrome(received);
        log::trace!("syndrome {} (weight {})", syndrome, syndrome.weight());

        match self.estimate_error(&syndrome) {
            Some((error, stage)) => {
                let codeword = *received ^ error;
                log::trace!("{:?}: flipping bits {:?}", stage, error.support());
                Decoded::Corrected(Correction {
                    message: GolayCode::extract_message(&codeword),
                    codeword,
                    error,
                    stage,
                })
            }
            None => {
                log::debug!("uncorrectable word, syndrome {}", syndrome);
                Decoded::Uncorrectable { syndrome }
            }
        }
    }

    /// Runs the staged coset-leader search for `syndrome`.
    ///
    /// Returns the estimated error pattern and the stage that found it, or
    /// `None` if the syndrome belongs to no coset of weight at most 3.
    pub fn estimate_error(&self, syndrome: &Syndrome) -> Option<(Codeword, DecodeStage)> {
        light_syndrome(syndrome)
            .map(|error| (error, DecodeStage::LightSyndrome))
            .or_else(|| {
                row_search(syndrome, &self.p).map(|(row, residue)| {
                    (
                        join(&residue, &Syndrome::unit(row)),
                        DecodeStage::RowSearch { row },
                    )
                })
            })
            .or_else(|| {
                let transformed = syndrome.multiply(&self.p);
                log::trace!(
                    "s*P = {} (weight {})",
                    transformed,
                    transformed.weight()
                );

                column_transform(&transformed)
                    .map(|error| (error, DecodeStage::ColumnTransform))
                    .or_else(|| {
                        column_row_search(&transformed, &self.p).map(|(row, residue)| {
                            (
                                join(&Syndrome::unit(row), &residue),
                                DecodeStage::ColumnRowSearch { row },
                            )
                        })
                    })
            })
    }
}

/// Accepts `[s, 0]` when `w(s) <= 3`. A zero syndrome yields the zero error.
pub fn light_syndrome(syndrome: &Syndrome) -> Option<Codeword> {
    (syndrome.weight() <= CORRECTABLE_ERRORS).then(|| join(syndrome, &Syndrome::zeros()))
}

/// First row `j` of `P` with `w(s + p_j) <= 2`, with the residue `s + p_j`.
pub fn row_search(syndrome: &Syndrome, p: &StructureMatrix) -> Option<(usize, Syndrome)> {
    first_row_match(syndrome, p, |weight| weight <= ROW_MATCH_WEIGHT)
}

/// Accepts `[0, s*P]` when `w(s*P)` is 2 or 3.
pub fn column_transform(transformed: &Syndrome) -> Option<Codeword> {
    matches!(transformed.weight(), 2 | 3).then(|| join(&Syndrome::zeros(), transformed))
}

/// First row `j` of `P` with `w(s*P + p_j) == 2`, with the residue.
pub fn column_row_search(transformed: &Syndrome, p: &StructureMatrix) -> Option<(usize, Syndrome)> {
    first_row_match(transformed, p, |weight| weight == ROW_MATCH_WEIGHT)
}

fn first_row_match(
    target: &Syndrome,
    p: &StructureMatrix,
    accept: impl Fn(usize) -> bool,
) -> Option<(usize, Syndrome)> {
    (0..MESSAGE_BITS)
        .map(|j| (j, *target ^ p.row(j)))
        .find(|(_, residue)| accept(residue.weight()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::ecc::golay::structure_matrix;

    #[test]
    fn test_light_syndrome() {
        let zero = light_syndrome(&Syndrome::zeros()).unwrap();
        assert!(zero.is_zero());

        let s = Syndrome::from_array([1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1]);
        let error = light_syndrome(&s).unwrap();
        assert_eq!(error.support(), vec![0, 5, 11]);

        let heavy = Syndrome::from_array([1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(light_syndrome(&heavy).is_none());
    }

    #[test]
    fn test_row_search_accepts_up_to_two() {
        let p = structure_matrix();

        // s = p_3 exactly: residue is zero
        let (row, residue) = row_search(&p.row(3), &p).unwrap();
        assert_eq!(row, 3);
        assert!(residue.is_zero());

        // s = p_0 + u_3: residue of weight one at row 0
        let target = p.row(0) ^ Syndrome::unit(3);
        let (row, residue) = row_search(&target, &p).unwrap();
        assert_eq!(row, 0);
        assert_eq!(residue, Syndrome::unit(3));
    }

    #[test]
    fn test_column_row_search_requires_exactly_two() {
        let p = structure_matrix();

        let one_off = p.row(0) ^ Syndrome::unit(3);
        assert!(column_row_search(&one_off, &p).is_none());

        let two_off = p.row(4) ^ Syndrome::unit(1) ^ Syndrome::unit(2);
        let (row, residue) = column_row_search(&two_off, &p).unwrap();
        assert_eq!(row, 4);
        assert_eq!(residue.support(), vec![1, 2]);
    }

    /// Symmetric matrix whose rows 3, 5 and 11 all lie within two bits of
    /// `tie_break_syndrome()`; row 3 is one bit away, rows 5 and 11 two.
    fn tie_break_structure() -> StructureMatrix {
        StructureMatrix::from_binary([
            [1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 1],
            [0, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1],
            [1, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0],
            [1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1],
            [0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0],
            [1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1],
            [0, 0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 1],
            [0, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0],
            [0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1],
            [0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0],
            [1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1, 0],
            [1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1],
        ])
    }

    fn tie_break_syndrome() -> Syndrome {
        Syndrome::from_array([1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0, 1])
    }

    #[test]
    fn test_row_search_takes_lowest_row() {
        let p = tie_break_structure();
        let s = tie_break_syndrome();
        assert!(p.is_symmetric());

        let matching: Vec<usize> = (0..MESSAGE_BITS)
            .filter(|&j| (s ^ p.row(j)).weight() <= 2)
            .collect();
        assert_eq!(matching, vec![3, 5, 11]);

        let (row, residue) = row_search(&s, &p).unwrap();
        assert_eq!(row, 3);
        assert_eq!(residue.support(), vec![10]);
    }

    #[test]
    fn test_column_row_search_takes_lowest_exact_row() {
        let p = tie_break_structure();
        let s = tie_break_syndrome();

        // Row 3 is within two bits but not exactly two, so it is skipped
        let matching: Vec<usize> = (0..MESSAGE_BITS)
            .filter(|&j| (s ^ p.row(j)).weight() == 2)
            .collect();
        assert_eq!(matching, vec![5, 11]);

        let (row, residue) = column_row_search(&s, &p).unwrap();
        assert_eq!(row, 5);
        assert_eq!(residue.support(), vec![2, 8]);
    }

    #[test]
    fn test_column_transform_weights() {
        assert!(column_transform(&Syndrome::zeros()).is_none());
        assert!(column_transform(&Syndrome::unit(7)).is_none());

        let two = Syndrome::unit(0) ^ Syndrome::unit(11);
        let error = column_transform(&two).unwrap();
        assert_eq!(error.support(), vec![12, 23]);

        let three = two ^ Syndrome::unit(5);
        assert_eq!(column_transform(&three).unwrap().support(), vec![12, 17, 23]);

        let four = three ^ Syndrome::unit(6);
        assert!(column_transform(&four).is_none());
    }

    #[test]
    fn test_decoded_accessors() {
        let code = GolayCode::new();
        let decoded = code.decode(&Codeword::zeros());
        assert_eq!(decoded.status(), DecodeStatus::Corrected);
        assert!(decoded.is_corrected());
        assert_eq!(decoded.message(), Some(Message::zeros()));
        let correction = decoded.correction().unwrap();
        assert_eq!(correction.stage, DecodeStage::LightSyndrome);
        assert_eq!(correction.corrected_bits(), 0);

        let uncorrectable = Decoded::Uncorrectable {
            syndrome: Syndrome::zeros(),
        };
        assert_eq!(uncorrectable.status(), DecodeStatus::Uncorrectable);
        assert!(uncorrectable.message().is_none());
        assert!(uncorrectable.correction().is_none());
    }
}
