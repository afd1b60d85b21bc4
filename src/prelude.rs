//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate_fleet, lookup, Board, Generation, Layout, Orientation, PlacementPolicy,
    RandomSource, Segment, SizeVariant,
};

#[cfg(feature = "std")]
pub use crate::sheet::SheetSet;
