//! Dense matrices and row vectors over GF(2).
//!
//! Entries are bits: addition is XOR and multiplication is AND. Dimensions
//! are const generics, so every product is shape-checked by the compiler and
//! a mismatched multiplication does not build. Matrices assembled from
//! runtime data go through [`BitMatrix::try_from_rows`], which validates the
//! shape before anything is stored.
//!
//! Row vectors are `1 x N` matrices ([`BitVector`]), so vector-matrix
//! products use the same [`BitMatrix::multiply`] primitive.

use crate::cs::error::{Error, Result};
use std::fmt::{self, Display, Formatter};
use std::ops::{BitXor, BitXorAssign};

/// An `R x C` matrix over GF(2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitMatrix<const R: usize, const C: usize> {
    rows: [[bool; C]; R],
}

/// A `1 x N` row vector over GF(2).
pub type BitVector<const N: usize> = BitMatrix<1, N>;

impl<const R: usize, const C: usize> BitMatrix<R, C> {
    /// The all-zero matrix.
    pub fn zeros() -> Self {
        BitMatrix {
            rows: [[false; C]; R],
        }
    }

    /// Builds a matrix from a row-major literal. Any nonzero entry is a 1.
    pub fn from_binary(rows: [[u8; C]; R]) -> Self {
        let mut matrix = Self::zeros();
        for (dst, src) in matrix.rows.iter_mut().zip(rows.iter()) {
            for (bit, &value) in dst.iter_mut().zip(src.iter()) {
                *bit = value != 0;
            }
        }
        matrix
    }

    /// Builds a matrix from runtime rows, checking the shape and that every
    /// entry is 0 or 1.
    ///
    /// # Arguments
    ///
    /// * `rows` - Exactly `R` rows of `C` entries each
    ///
    /// # Returns
    ///
    /// The validated matrix
    ///
    /// # Errors
    ///
    /// * `Error::DimensionMismatch` if there are not exactly `R` rows of `C`
    ///   entries each
    /// * `Error::InvalidInput` if an entry is neither 0 nor 1
    pub fn try_from_rows<T: AsRef<[u8]>>(rows: &[T]) -> Result<Self> {
        let ragged = rows
            .iter()
            .map(|row| row.as_ref().len())
            .find(|&len| len != C);
        if rows.len() != R || ragged.is_some() {
            return Err(Error::DimensionMismatch {
                expected: (R, C),
                found: (rows.len(), ragged.unwrap_or(C)),
            });
        }

        let mut matrix = Self::zeros();
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.as_ref().iter().enumerate() {
                match value {
                    0 => {}
                    1 => matrix.rows[i][j] = true,
                    other => {
                        return Err(Error::InvalidInput(format!(
                            "Entry ({}, {}) is {}, expected 0 or 1",
                            i, j, other
                        )))
                    }
                }
            }
        }
        Ok(matrix)
    }

    /// Returns the entry at (`row`, `col`). Panics if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    /// Sets the entry at (`row`, `col`). Panics if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, bit: bool) {
        self.rows[row][col] = bit;
    }

    /// Row `index` as a row vector.
    pub fn row(&self, index: usize) -> BitVector<C> {
        BitMatrix {
            rows: [self.rows[index]],
        }
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[[bool; C]; R] {
        &self.rows
    }

    /// Returns the `C x R` transpose.
    pub fn transpose(&self) -> BitMatrix<C, R> {
        let mut out = BitMatrix::<C, R>::zeros();
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &bit) in row.iter().enumerate() {
                out.rows[j][i] = bit;
            }
        }
        out
    }

    /// Matrix product modulo 2.
    ///
    /// Entry `(r, k)` of the result is the parity of the elementwise AND of
    /// row `r` of `self` and column `k` of `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - Right-hand factor; its row count must equal `C`
    ///
    /// # Returns
    ///
    /// The `R x K` product
    pub fn multiply<const K: usize>(&self, other: &BitMatrix<C, K>) -> BitMatrix<R, K> {
        let mut out = BitMatrix::<R, K>::zeros();
        for (r, row) in self.rows.iter().enumerate() {
            for k in 0..K {
                let ones = row
                    .iter()
                    .zip(other.rows.iter())
                    .filter(|&(&x, y)| x && y[k])
                    .count();
                out.rows[r][k] = ones % 2 == 1;
            }
        }
        out
    }

    /// Hamming weight: the number of 1 entries.
    pub fn weight(&self) -> usize {
        self.rows.iter().flatten().filter(|&&bit| bit).count()
    }

    /// Returns true if every entry is 0.
    pub fn is_zero(&self) -> bool {
        self.rows.iter().flatten().all(|&bit| !bit)
    }
}

impl<const N: usize> BitMatrix<N, N> {
    /// The `N x N` identity matrix.
    pub fn identity() -> Self {
        let mut matrix = Self::zeros();
        for i in 0..N {
            matrix.rows[i][i] = true;
        }
        matrix
    }

    /// Returns true if the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        (0..N).all(|i| (i + 1..N).all(|j| self.rows[i][j] == self.rows[j][i]))
    }
}

impl<const N: usize> BitMatrix<1, N> {
    /// Builds a row vector from a literal. Any nonzero entry is a 1.
    pub fn from_array(bits: [u8; N]) -> Self {
        Self::from_binary([bits])
    }

    /// Builds a row vector from its bits.
    pub fn from_bits(bits: [bool; N]) -> Self {
        BitMatrix { rows: [bits] }
    }

    /// The unit vector with a single 1 at `index`.
    pub fn unit(index: usize) -> Self {
        let mut vector = Self::zeros();
        vector.rows[0][index] = true;
        vector
    }

    /// Returns bit `index`. Panics if out of bounds.
    pub fn bit(&self, index: usize) -> bool {
        self.rows[0][index]
    }

    /// Sets bit `index`. Panics if out of bounds.
    pub fn set_bit(&mut self, index: usize, bit: bool) {
        self.rows[0][index] = bit;
    }

    /// Inverts bit `index`, as a channel error would.
    pub fn flip(&mut self, index: usize) {
        self.rows[0][index] = !self.rows[0][index];
    }

    /// The bits of the vector, in order.
    pub fn bits(&self) -> &[bool; N] {
        &self.rows[0]
    }

    /// Positions of the 1 entries, in increasing order.
    pub fn support(&self) -> Vec<usize> {
        self.rows[0]
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i))
            .collect()
    }
}

impl<const R: usize, const C: usize> Default for BitMatrix<R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const R: usize, const C: usize> BitXorAssign for BitMatrix<R, C> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for (dst, src) in self.rows.iter_mut().zip(rhs.rows.iter()) {
            for (a, &b) in dst.iter_mut().zip(src.iter()) {
                *a ^= b;
            }
        }
    }
}

impl<const R: usize, const C: usize> BitXor for BitMatrix<R, C> {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self {
        self ^= rhs;
        self
    }
}

impl<const R: usize, const C: usize> Display for BitMatrix<R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &bit) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if bit { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_known_product() {
        let a = BitMatrix::from_binary([[1, 1, 0], [0, 1, 1]]);
        let b = BitMatrix::from_binary([[1, 0], [1, 1], [0, 1]]);

        // [1 1 0] . cols -> (1+1, 0+1) = (0, 1); [0 1 1] -> (1, 1+1) = (1, 0)
        let expected = BitMatrix::from_binary([[0, 1], [1, 0]]);
        assert_eq!(a.multiply(&b), expected);
    }

    #[test]
    fn test_multiply_by_identity() {
        let a = BitMatrix::from_binary([[1, 0, 1, 1], [0, 1, 1, 0], [1, 1, 1, 1]]);
        assert_eq!(a.multiply(&BitMatrix::<4, 4>::identity()), a);
        assert_eq!(BitMatrix::<3, 3>::identity().multiply(&a), a);
    }

    #[test]
    fn test_vector_matrix_product() {
        let v = BitVector::from_array([1, 0, 1]);
        let m = BitMatrix::from_binary([[1, 1, 0, 0], [0, 1, 1, 0], [1, 1, 1, 1]]);
        assert_eq!(v.multiply(&m), BitVector::from_array([0, 0, 1, 1]));
    }

    #[test]
    fn test_weight() {
        assert_eq!(BitVector::<12>::zeros().weight(), 0);
        assert_eq!(BitVector::from_array([1, 0, 1, 1, 0]).weight(), 3);
        assert_eq!(BitMatrix::<5, 5>::identity().weight(), 5);
        assert_eq!(BitVector::<0>::zeros().weight(), 0);
    }

    #[test]
    fn test_transpose() {
        let a = BitMatrix::from_binary([[1, 0, 0], [1, 1, 0]]);
        let t = a.transpose();
        assert_eq!(t, BitMatrix::from_binary([[1, 1], [0, 1], [0, 0]]));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_xor_and_unit() {
        let a = BitVector::from_array([1, 1, 0, 0]);
        let b = BitVector::from_array([0, 1, 1, 0]);
        assert_eq!(a ^ b, BitVector::from_array([1, 0, 1, 0]));
        assert!((a ^ a).is_zero());

        let u = BitVector::<4>::unit(2);
        assert_eq!(u.weight(), 1);
        assert!(u.bit(2));
        assert_eq!(u.support(), vec![2]);
    }

    #[test]
    fn test_flip_and_set() {
        let mut v = BitVector::<6>::zeros();
        v.flip(1);
        v.flip(4);
        v.set_bit(5, true);
        assert_eq!(v.support(), vec![1, 4, 5]);
        v.flip(4);
        assert_eq!(v.support(), vec![1, 5]);
    }

    #[test]
    fn test_symmetry() {
        assert!(BitMatrix::<4, 4>::identity().is_symmetric());
        assert!(BitMatrix::from_binary([[0, 1], [1, 1]]).is_symmetric());
        assert!(!BitMatrix::from_binary([[0, 1], [0, 1]]).is_symmetric());
    }

    #[test]
    fn test_try_from_rows() {
        let rows = vec![vec![1u8, 0, 1], vec![0, 1, 0]];
        let m = BitMatrix::<2, 3>::try_from_rows(&rows).unwrap();
        assert_eq!(m, BitMatrix::from_binary([[1, 0, 1], [0, 1, 0]]));

        let short = vec![vec![1u8, 0, 1]];
        assert_eq!(
            BitMatrix::<2, 3>::try_from_rows(&short),
            Err(Error::DimensionMismatch {
                expected: (2, 3),
                found: (1, 3),
            })
        );

        let ragged = vec![vec![1u8, 0, 1], vec![0, 1]];
        assert_eq!(
            BitMatrix::<2, 3>::try_from_rows(&ragged),
            Err(Error::DimensionMismatch {
                expected: (2, 3),
                found: (2, 2),
            })
        );

        let non_binary = vec![vec![1u8, 0, 2], vec![0, 1, 0]];
        assert!(matches!(
            BitMatrix::<2, 3>::try_from_rows(&non_binary),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_display() {
        let m = BitMatrix::from_binary([[1, 0, 1], [0, 1, 1]]);
        assert_eq!(m.to_string(), "1 0 1\n0 1 1");
        assert_eq!(BitVector::from_array([0, 1]).to_string(), "0 1");
    }
}
