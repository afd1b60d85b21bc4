#![cfg(feature = "std")]

//! Plain-text printable sheets.
//!
//! Each captain gets one page: their own fleet with ships drawn, the ship
//! legend, then a blank radar for every opponent. A final answer-key page
//! shows every fleet. Pages are separated by form feeds so a printer starts
//! each on a new sheet.

use std::fmt;

use crate::board::Board;
use crate::config::{column_label, Layout};
use crate::occupancy::{lookup, Segment, SegmentInfo};
use crate::ship::Orientation;

/// Page separator understood by printers.
pub const PAGE_BREAK: char = '\u{0c}';

const WATER: char = '.';

/// Character drawn for one ship segment.
pub fn segment_glyph(info: &SegmentInfo<'_>) -> char {
    match (info.orientation, info.segment) {
        (Orientation::Horizontal, Segment::Front) => '<',
        (Orientation::Horizontal, Segment::Middle) => '=',
        (Orientation::Horizontal, Segment::Back) => '>',
        (Orientation::Vertical, Segment::Front) => '^',
        (Orientation::Vertical, Segment::Middle) => '|',
        (Orientation::Vertical, Segment::Back) => 'v',
    }
}

/// A board grid with column letters and row numbers.
///
/// With `reveal` off no ship is drawn, which is how opponents' radars look.
pub struct GridView<'a> {
    pub board: &'a Board,
    pub reveal: bool,
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .board
            .cols()
            .checked_sub(1)
            .map_or(1, |last| column_label(last).len());
        write!(f, " #  ")?;
        for c in 0..self.board.cols() {
            write!(f, " {:>width$}", column_label(c))?;
        }
        writeln!(f)?;
        for r in 0..self.board.rows() {
            write!(f, "{:2}  ", r + 1)?;
            for c in 0..self.board.cols() {
                let ch = if self.reveal {
                    lookup(self.board, r, c)
                        .map(|info| segment_glyph(&info))
                        .unwrap_or(WATER)
                } else {
                    WATER
                };
                write!(f, " {:>width$}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Ship classes with their lengths and counts.
pub struct Legend<'a>(pub &'a Layout);

impl fmt::Display for Legend<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ship in &self.0.ships {
            writeln!(
                f,
                "  * {:<24} {} cells x{}",
                ship.name(),
                ship.length(),
                ship.count()
            )?;
        }
        Ok(())
    }
}

/// One captain's page: defense fleet plus a radar per opponent.
pub struct CaptainPage<'a> {
    pub boards: &'a [Board],
    pub index: usize,
    pub layout: &'a Layout,
    pub format_label: &'a str,
}

impl fmt::Display for CaptainPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.boards.get(self.index).ok_or(fmt::Error)?;
        writeln!(
            f,
            "=== NAVAL BATTLE | {} | Format: {} | Page #{} ===",
            board.id(),
            self.format_label,
            self.index + 1
        )?;
        writeln!(f)?;
        writeln!(f, "DEFENSE FLEET (your positions)")?;
        write!(f, "{}", GridView { board, reveal: true })?;
        writeln!(f)?;
        writeln!(
            f,
            "Mark your opponents' shots on this map. A ship sinks once every cell is hit."
        )?;
        write!(f, "{}", Legend(self.layout))?;
        writeln!(f)?;
        writeln!(f, "ATTACK RADARS (mark your shots here)")?;
        for (i, other) in self.boards.iter().enumerate() {
            if i == self.index {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "TARGET: {}", other.id())?;
            write!(
                f,
                "{}",
                GridView {
                    board: other,
                    reveal: false,
                }
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Key: X = hit, O = water")
    }
}

/// Final page revealing every fleet.
pub struct MasterSheet<'a>(pub &'a [Board]);

impl fmt::Display for MasterSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== ADMIRAL'S ANSWER KEY ===")?;
        writeln!(f, "Actual position of every fleet")?;
        for board in self.0 {
            writeln!(f)?;
            writeln!(f, "[{}]", board.id())?;
            write!(f, "{}", GridView { board, reveal: true })?;
        }
        Ok(())
    }
}

/// Every captain page followed by the answer key.
pub struct SheetSet<'a> {
    pub boards: &'a [Board],
    pub layout: &'a Layout,
    pub format_label: &'a str,
}

impl fmt::Display for SheetSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.boards.len() {
            let page = CaptainPage {
                boards: self.boards,
                index,
                layout: self.layout,
                format_label: self.format_label,
            };
            write!(f, "{}{}", page, PAGE_BREAK)?;
        }
        if !self.boards.is_empty() {
            write!(f, "{}", MasterSheet(self.boards))?;
        }
        Ok(())
    }
}
