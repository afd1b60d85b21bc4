//! Cell lookup used by renderers to draw ship segments.

use crate::board::Board;
use crate::ship::Orientation;

/// Which part of a ship covers a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The anchor cell. Length-1 ships are all front.
    Front,
    Middle,
    /// The last cell along the orientation axis.
    Back,
}

impl Segment {
    /// Segment at `offset` within a ship of `length` cells.
    pub fn classify(offset: usize, length: usize) -> Segment {
        if offset == 0 {
            Segment::Front
        } else if offset + 1 == length {
            Segment::Back
        } else {
            Segment::Middle
        }
    }
}

/// Answer to an occupied-cell lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentInfo<'a> {
    pub ship_id: &'a str,
    pub segment: Segment,
    pub orientation: Orientation,
}

/// Find the ship segment at (`row`, `col`), scanning placements in order.
pub fn lookup(board: &Board, row: usize, col: usize) -> Option<SegmentInfo<'_>> {
    board.placements().iter().find_map(|p| {
        p.offset_of(row, col).map(|offset| SegmentInfo {
            ship_id: p.ship_id(),
            segment: Segment::classify(offset, p.length()),
            orientation: p.orientation(),
        })
    })
}
