#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod occupancy;
pub mod prelude;
mod rng;
#[cfg(feature = "std")]
pub mod sheet;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, OccupancyMask, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use occupancy::{lookup, Segment, SegmentInfo};
pub use rng::RandomSource;
pub use ship::*;
