//! Size tiers, fleet layouts and generation constants.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::bitboard;
use crate::common::LayoutError;
use crate::ship::ShipClass;

/// Random trials per ship instance before it is given up.
pub const TRIAL_BOUND: usize = 200;

/// Fewest captains a sheet set is generated for.
pub const MIN_CAPTAINS: usize = 2;
/// Most captains a sheet set is generated for.
pub const MAX_CAPTAINS: usize = 25;
/// Captains generated when none are requested.
pub const DEFAULT_CAPTAINS: usize = 4;

/// Named board-size tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "UPPERCASE"))]
pub enum SizeVariant {
    Small,
    Medium,
    #[default]
    Large,
}

impl SizeVariant {
    pub const ALL: [SizeVariant; 3] = [SizeVariant::Small, SizeVariant::Medium, SizeVariant::Large];

    /// Grid dimensions as (rows, cols).
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            SizeVariant::Small => (6, 7),
            SizeVariant::Medium => (8, 9),
            SizeVariant::Large => (10, 11),
        }
    }

    /// Ship classes in placement order, largest first.
    pub fn ship_classes(&self) -> Vec<ShipClass> {
        match self {
            SizeVariant::Small => alloc::vec![
                ShipClass::new("bergantim", "Bergantim", 3, 1),
                ShipClass::new("escuna", "Escuna", 3, 1),
                ShipClass::new("bote", "Bote", 2, 2),
            ],
            SizeVariant::Medium => alloc::vec![
                ShipClass::new("caravela", "Caravela Imperial", 4, 1),
                ShipClass::new("bergantim", "Bergantim Rápido", 3, 1),
                ShipClass::new("escuna", "Escuna Pirata", 3, 1),
                ShipClass::new("bote", "Bote de Saque", 2, 2),
            ],
            SizeVariant::Large => alloc::vec![
                ShipClass::new("galeao", "Galeão de Guerra", 5, 1),
                ShipClass::new("caravela", "Caravela Imperial", 4, 1),
                ShipClass::new("bergantim", "Bergantim Rápido", 3, 1),
                ShipClass::new("escuna", "Escuna Pirata", 3, 1),
                ShipClass::new("bote", "Bote de Saque", 2, 2),
            ],
        }
    }

    /// Preset layout for this tier.
    pub fn layout(&self) -> Layout {
        let (rows, cols) = self.dimensions();
        Layout {
            rows,
            cols,
            ships: self.ship_classes(),
        }
    }

    /// Label shown in sheet headers.
    pub fn label(&self) -> &'static str {
        match self {
            SizeVariant::Small => "Small",
            SizeVariant::Medium => "Medium",
            SizeVariant::Large => "Large",
        }
    }
}

/// Returned when a size key names no known tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown board size {:?} (expected small, medium or large)",
            self.0
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownVariant {}

impl FromStr for SizeVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(SizeVariant::Small),
            "medium" => Ok(SizeVariant::Medium),
            "large" => Ok(SizeVariant::Large),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Grid dimensions plus the ordered fleet placed on every board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub ships: Vec<ShipClass>,
}

impl Layout {
    pub fn new(rows: usize, cols: usize, ships: Vec<ShipClass>) -> Self {
        Self { rows, cols, ships }
    }

    /// Ship instances per board: the sum of every class count.
    pub fn total_ships(&self) -> usize {
        self.ships.iter().map(ShipClass::count).sum()
    }

    /// Cells covered when every instance is placed.
    pub fn total_cells(&self) -> usize {
        self.ships
            .iter()
            .map(|s| s.length().saturating_mul(s.count()))
            .fold(0, usize::saturating_add)
    }

    /// Look up a class by id.
    pub fn ship_class(&self, id: &str) -> Option<&ShipClass> {
        self.ships.iter().find(|s| s.id() == id)
    }

    /// Reject layouts the generator cannot run on.
    ///
    /// Fleets that merely do not fit are accepted; the generator reports
    /// those instances as unplaced.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LayoutError::EmptyGrid);
        }
        let capacity = bitboard::capacity::<u128>();
        let cells = self.rows.checked_mul(self.cols).unwrap_or(usize::MAX);
        if cells > capacity {
            return Err(LayoutError::GridTooLarge { cells, capacity });
        }
        if self.ships.is_empty() {
            return Err(LayoutError::NoShips);
        }
        for (i, ship) in self.ships.iter().enumerate() {
            if ship.length() == 0 {
                return Err(LayoutError::ZeroLengthShip {
                    ship_id: ship.id().to_string(),
                });
            }
            if self.ships[..i].iter().any(|s| s.id() == ship.id()) {
                return Err(LayoutError::DuplicateShipId {
                    ship_id: ship.id().to_string(),
                });
            }
        }
        Ok(())
    }
}

impl From<SizeVariant> for Layout {
    fn from(variant: SizeVariant) -> Self {
        variant.layout()
    }
}

/// Clamp a requested captain count into `[MIN_CAPTAINS, MAX_CAPTAINS]`.
pub fn clamp_captains(requested: usize) -> usize {
    requested.clamp(MIN_CAPTAINS, MAX_CAPTAINS)
}

/// Label for the captain at zero-based `index`.
pub fn captain_label(index: usize) -> String {
    alloc::format!("CAPTAIN #{}", index + 1)
}

/// Column header for zero-based column `col`: `A`..`Z`, then `AA`, `AB`, ...
pub fn column_label(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col;
    loop {
        letters.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}
