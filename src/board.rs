//! Board model and random fleet placement.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::OccupancyMask;
use crate::common::GenerateError;
use crate::config::{Layout, TRIAL_BOUND};
use crate::rng::RandomSource;
use crate::ship::{Orientation, Placement, ShipClass};

/// What to do with a ship instance that found no free span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementPolicy {
    /// Skip it and report it in [`Generation::unplaced`].
    #[default]
    Lenient,
    /// Abort with [`GenerateError::PlacementExhausted`].
    Strict,
}

/// One captain's fleet on a grid. Immutable once generated.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Board {
    id: String,
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Option<String>>>,
    ships: Vec<Placement>,
}

impl Board {
    /// Place every ship of `layout` at random, skipping instances that do
    /// not fit after [`TRIAL_BOUND`] trials.
    pub fn generate<R: RandomSource + ?Sized>(
        id: impl Into<String>,
        layout: &Layout,
        rng: &mut R,
    ) -> Result<Generation, GenerateError> {
        Self::generate_with(id, layout, PlacementPolicy::Lenient, rng)
    }

    /// Like [`Board::generate`], but fails on the first ship that cannot be
    /// placed.
    pub fn generate_strict<R: RandomSource + ?Sized>(
        id: impl Into<String>,
        layout: &Layout,
        rng: &mut R,
    ) -> Result<Board, GenerateError> {
        Self::generate_with(id, layout, PlacementPolicy::Strict, rng).map(|g| g.board)
    }

    /// Place every ship of `layout` in declared order, each class repeated
    /// `count` times.
    pub fn generate_with<R: RandomSource + ?Sized>(
        id: impl Into<String>,
        layout: &Layout,
        policy: PlacementPolicy,
        rng: &mut R,
    ) -> Result<Generation, GenerateError> {
        layout.validate()?;
        let mut builder = BoardBuilder::new(id.into(), layout.rows, layout.cols)?;
        let mut unplaced = Vec::new();

        for class in &layout.ships {
            for _ in 0..class.count() {
                match builder.random_placement(rng, class)? {
                    Some(placement) => builder.place(placement)?,
                    None if policy == PlacementPolicy::Strict => {
                        return Err(GenerateError::PlacementExhausted {
                            ship_id: class.id().to_string(),
                        });
                    }
                    None => {
                        log::warn!(
                            "{}: no room for {} (length {}) after {} trials",
                            builder.id,
                            class.id(),
                            class.length(),
                            TRIAL_BOUND
                        );
                        unplaced.push(class.id().to_string());
                    }
                }
            }
        }

        Ok(Generation {
            board: builder.finish(),
            unplaced,
        })
    }

    /// Captain label.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major grid of ship-class ids.
    pub fn grid(&self) -> &[Vec<Option<String>>] {
        &self.grid
    }

    /// Ship-class id at (`row`, `col`); `None` for water or out-of-grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.grid.get(row)?.get(col)?.as_deref()
    }

    /// Placements in the order they were made.
    pub fn placements(&self) -> &[Placement] {
        &self.ships
    }

    /// Number of grid cells holding a ship.
    pub fn occupied_cells(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.is_some()).count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {:?} ({}x{}) {{", self.id, self.rows, self.cols)?;
        for p in &self.ships {
            let (r, c) = p.origin();
            writeln!(
                f,
                "  {} at ({}, {}) {} len {}",
                p.ship_id(),
                r,
                c,
                p.orientation(),
                p.length()
            )?;
        }
        write!(f, "}}")
    }
}

/// A generated board plus the ship instances that could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub board: Board,
    /// Ship-class id of every skipped instance, in placement order.
    pub unplaced: Vec<String>,
}

impl Generation {
    /// Returns `true` when every configured ship made it onto the board.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Mutable board under construction.
struct BoardBuilder {
    id: String,
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Option<String>>>,
    ships: Vec<Placement>,
    ship_map: OccupancyMask,
}

impl BoardBuilder {
    fn new(id: String, rows: usize, cols: usize) -> Result<Self, GenerateError> {
        Ok(Self {
            id,
            rows,
            cols,
            grid: vec![vec![None; cols]; rows],
            ships: Vec::new(),
            ship_map: OccupancyMask::try_new(rows, cols)?,
        })
    }

    /// Returns `true` if `placement` stays on the grid and touches no ship.
    fn can_place(&self, placement: &Placement) -> Result<bool, GenerateError> {
        if !placement.fits(self.rows, self.cols) {
            return Ok(false);
        }
        let mask = OccupancyMask::from_cells(self.rows, self.cols, placement.cells())?;
        Ok(!self.ship_map.intersects(&mask)?)
    }

    /// First free span found within [`TRIAL_BOUND`] random trials.
    ///
    /// Each trial draws orientation, anchor row and anchor column in that
    /// order, uniformly over the whole grid whatever the ship length.
    fn random_placement<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        class: &ShipClass,
    ) -> Result<Option<Placement>, GenerateError> {
        for _ in 0..TRIAL_BOUND {
            let orientation = if rng.next_below(2) == 0 {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.next_below(self.rows);
            let col = rng.next_below(self.cols);
            let candidate = Placement::new(class.id(), row, col, orientation, class.length());
            if self.can_place(&candidate)? {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    fn place(&mut self, placement: Placement) -> Result<(), GenerateError> {
        for (r, c) in placement.cells() {
            self.ship_map.set(r, c)?;
            self.grid[r][c] = Some(placement.ship_id().to_string());
        }
        let (r, c) = placement.origin();
        log::debug!(
            "{}: placed {} at ({}, {}) {}",
            self.id,
            placement.ship_id(),
            r,
            c,
            placement.orientation()
        );
        self.ships.push(placement);
        Ok(())
    }

    fn finish(self) -> Board {
        Board {
            id: self.id,
            rows: self.rows,
            cols: self.cols,
            grid: self.grid,
            ships: self.ships,
        }
    }
}

/// Generate one board per captain, labelled `CAPTAIN #1`, `CAPTAIN #2`, ...
///
/// Boards are built one after another from the same random source, so a
/// seeded source reproduces the whole set.
pub fn generate_fleet<R: RandomSource + ?Sized>(
    captains: usize,
    layout: &Layout,
    policy: PlacementPolicy,
    rng: &mut R,
) -> Result<Vec<Generation>, GenerateError> {
    (0..captains)
        .map(|i| Board::generate_with(crate::config::captain_label(i), layout, policy, &mut *rng))
        .collect()
}
