//! A rectangular occupancy bitboard.
//!
//! The type is `no_std` friendly and avoids heap allocations. A board of
//! `rows × cols` cells is packed row-major into an unsigned integer `T`, so
//! the whole grid must fit in `T::BITS`. Dimensions are chosen at runtime
//! because every size tier uses a different grid.

use core::ops::{BitAnd, BitOr};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested `rows * cols` exceeds the capacity of `T::BITS`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Row or column index is outside `[0, rows) × [0, cols)`.
    IndexOutOfBounds { row: usize, col: usize },
    /// Operands of a bitwise operation have different dimensions.
    DimensionMismatch,
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: rows*cols={} exceeds T::BITS={}", cells, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            BitBoardError::DimensionMismatch => write!(f, "DimensionMismatch"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// Number of bits available in `T`.
#[inline]
pub fn capacity<T: PrimInt>() -> usize {
    mem::size_of::<T>() * 8
}

/// A `rows × cols` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    rows: usize,
    cols: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty board, failing with `SizeTooLarge` if the grid does
    /// not fit in `T`.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, BitBoardError> {
        let capacity = capacity::<T>();
        let cells = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if cells > capacity {
            Err(BitBoardError::SizeTooLarge { cells, capacity })
        } else {
            Ok(BitBoard {
                bits: T::zero(),
                rows,
                cols,
            })
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = self.index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Returns true if both boards share at least one set bit.
    pub fn intersects(&self, other: &Self) -> Result<bool, BitBoardError> {
        self.check_same_dims(other)?;
        Ok(!(self.bits & other.bits).is_zero())
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= self.rows || col >= self.cols {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.cols + col)
        }
    }

    #[inline]
    fn check_same_dims(&self, other: &Self) -> Result<(), BitBoardError> {
        if self.rows != other.rows || self.cols != other.cols {
            Err(BitBoardError::DimensionMismatch)
        } else {
            Ok(())
        }
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    pub fn from_cells<I>(rows: usize, cols: usize, iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::try_new(rows, cols)?;
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits of the board.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", self.rows, self.cols)?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard, in row-major order.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cols = self.board.cols;
        while self.idx < self.board.rows * cols {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / cols, idx % cols));
            }
        }
        None
    }
}

/// Bitwise AND. Panics if the operands have different dimensions.
impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        assert!(self.check_same_dims(&rhs).is_ok(), "bitboard dimensions differ");
        BitBoard {
            bits: self.bits & rhs.bits,
            ..self
        }
    }
}

/// Bitwise OR. Panics if the operands have different dimensions.
impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        assert!(self.check_same_dims(&rhs).is_ok(), "bitboard dimensions differ");
        BitBoard {
            bits: self.bits | rhs.bits,
            ..self
        }
    }
}

/// Occupancy mask used by the board generator.
pub type OccupancyMask = BitBoard<u128>;
