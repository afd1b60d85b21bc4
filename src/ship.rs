//! Ship classes and placed ship instances.

use alloc::string::String;
use core::fmt;

/// Axis along which a placement extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends towards increasing columns.
    #[cfg_attr(feature = "std", serde(rename = "H"))]
    Horizontal,
    /// Extends towards increasing rows.
    #[cfg_attr(feature = "std", serde(rename = "V"))]
    Vertical,
}

impl Orientation {
    /// Single-letter tag used in the serialized board.
    pub fn tag(&self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A category of ship: identifier, display name, length and how many of
/// them appear on each board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipClass {
    id: String,
    name: String,
    #[cfg_attr(feature = "std", serde(rename = "size"))]
    length: usize,
    count: usize,
}

impl ShipClass {
    pub fn new(id: impl Into<String>, name: impl Into<String>, length: usize, count: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            length,
            count,
        }
    }

    /// Identifier written into grid cells.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name for legends.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cells the ship covers.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Instances of this class per board.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// One ship instance located on a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Placement {
    ship_id: String,
    row: usize,
    col: usize,
    orientation: Orientation,
    #[cfg_attr(feature = "std", serde(rename = "size"))]
    length: usize,
}

impl Placement {
    pub fn new(
        ship_id: impl Into<String>,
        row: usize,
        col: usize,
        orientation: Orientation,
        length: usize,
    ) -> Self {
        Self {
            ship_id: ship_id.into(),
            row,
            col,
            orientation,
            length,
        }
    }

    pub fn ship_id(&self) -> &str {
        &self.ship_id
    }

    /// Anchor cell (row, col); always the front of the ship.
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Cell at `offset` cells from the anchor along the orientation axis.
    pub fn cell(&self, offset: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.row, self.col + offset),
            Orientation::Vertical => (self.row + offset, self.col),
        }
    }

    /// Occupied cells from front to back.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| self.cell(i))
    }

    /// Offset of (`row`, `col`) within this ship, if the ship covers it.
    pub fn offset_of(&self, row: usize, col: usize) -> Option<usize> {
        let (along, across, anchor_along, anchor_across) = match self.orientation {
            Orientation::Horizontal => (col, row, self.col, self.row),
            Orientation::Vertical => (row, col, self.row, self.col),
        };
        if across != anchor_across || along < anchor_along {
            return None;
        }
        let offset = along - anchor_along;
        (offset < self.length).then_some(offset)
    }

    /// Returns true if every cell lies inside a `rows × cols` grid.
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                self.row < rows && self.col < cols && self.length <= cols - self.col
            }
            Orientation::Vertical => {
                self.col < cols && self.row < rows && self.length <= rows - self.row
            }
        }
    }
}
