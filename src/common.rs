//! Error types shared by layout validation and board generation.

use alloc::string::String;
use core::fmt;

use crate::bitboard::BitBoardError;

/// Reasons a layout cannot be generated at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Grid has zero rows or zero columns.
    EmptyGrid,
    /// Grid has more cells than the occupancy mask can track.
    GridTooLarge { cells: usize, capacity: usize },
    /// Layout lists no ship classes.
    NoShips,
    /// A ship class has length zero.
    ZeroLengthShip { ship_id: String },
    /// Two ship classes share an id.
    DuplicateShipId { ship_id: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptyGrid => write!(f, "Grid must have at least one row and column"),
            LayoutError::GridTooLarge { cells, capacity } => write!(
                f,
                "Grid of {} cells exceeds the supported maximum of {}",
                cells, capacity
            ),
            LayoutError::NoShips => write!(f, "Layout contains no ships"),
            LayoutError::ZeroLengthShip { ship_id } => {
                write!(f, "Ship class {:?} has zero length", ship_id)
            }
            LayoutError::DuplicateShipId { ship_id } => {
                write!(f, "Ship class id {:?} is used more than once", ship_id)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

/// Errors returned by board generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Layout failed validation.
    Layout(LayoutError),
    /// Occupancy mask rejected an operation.
    BitBoard(BitBoardError),
    /// Strict mode: no free span was found for an instance of this class.
    PlacementExhausted { ship_id: String },
}

impl From<LayoutError> for GenerateError {
    fn from(err: LayoutError) -> Self {
        GenerateError::Layout(err)
    }
}

impl From<BitBoardError> for GenerateError {
    fn from(err: BitBoardError) -> Self {
        GenerateError::BitBoard(err)
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Layout(e) => write!(f, "Invalid layout: {}", e),
            GenerateError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GenerateError::PlacementExhausted { ship_id } => {
                write!(f, "Unable to place ship {:?}", ship_id)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GenerateError {}
