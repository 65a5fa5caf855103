#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use command::*;
pub use engine::*;
pub use error::*;
pub use seed::*;
pub use types::*;

mod cell;
mod command;
mod engine;
mod error;
mod seed;
mod types;

/// Fixed set of mine positions for one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    size: Coord2,
    mine_count: CellCount,
}

impl MineLayout {
    /// Checks that both sides lie in `MIN_SIDE..=MAX_SIDE`.
    pub fn check_size(rows: i32, cols: i32) -> Result<Coord2, ConfigError> {
        match (Coord::try_from(rows), Coord::try_from(cols)) {
            (Ok(r), Ok(c)) if side_in_range(r) && side_in_range(c) => Ok((r, c)),
            _ => Err(ConfigError::InvalidDimensions { rows, cols }),
        }
    }

    /// Checks that `mines` leaves at least one safe cell and is not zero.
    pub fn check_mine_count(size: Coord2, mines: i32) -> Result<CellCount, ConfigError> {
        let max = mult(size.0, size.1).saturating_sub(1);
        match CellCount::try_from(mines) {
            Ok(count) if (1..=max).contains(&count) => Ok(count),
            _ => Err(ConfigError::InvalidMineCount { mines, max }),
        }
    }

    /// Builds the layout from a list of positions. The list length is what gets range checked, repeated positions
    /// collapse into a single mine.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self, ConfigError> {
        let size = Self::check_size(size.0.into(), size.1.into())?;
        let declared = i32::try_from(mine_coords.len()).unwrap_or(i32::MAX);
        Self::check_mine_count(size, declared)?;

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(ConfigError::MineOutOfBounds {
                    row: coords.0.into(),
                    col: coords.1.into(),
                });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        if mine_count != mine_coords.len() {
            log::warn!(
                "Ignoring {} repeated mine positions, {} distinct mines placed",
                mine_coords.len() - mine_count,
                mine_count
            );
        }

        Ok(Self {
            mine_mask,
            size,
            mine_count: CellCount::try_from(mine_count).unwrap_or(CellCount::MAX),
        })
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Number of distinct mine positions.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Strict bounds check over signed coordinates, row first.
    pub fn check_bounds(&self, row: i32, col: i32) -> Result<Coord2, BoundsError> {
        let (rows, cols) = self.size;
        let row = in_bounds(row, rows).ok_or(BoundsError {
            axis: Axis::Row,
            value: row,
            limit: rows,
        })?;
        let col = in_bounds(col, cols).ok_or(BoundsError {
            axis: Axis::Col,
            value: col,
            limit: cols,
        })?;
        Ok((row, col))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2, BoundsError> {
        self.check_bounds(coords.0.into(), coords.1.into())
    }

    /// Never fails: anything off the grid is simply not a mine.
    pub fn is_mine(&self, row: i32, col: i32) -> bool {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => self.mine_mask.get([row, col]).copied().unwrap_or(false),
            _ => false,
        }
    }

    /// Mines in the 3x3 block centred on `(row, col)`, the centre included.
    pub fn adjacent_mine_count(&self, row: i32, col: i32) -> u8 {
        BlockIter::new((row, col))
            .filter(|&(r, c)| self.is_mine(r, c))
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

fn in_bounds(value: i32, limit: Coord) -> Option<Coord> {
    Coord::try_from(value).ok().filter(|&value| value < limit)
}

/// Result of a move as far as the session is concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continue,
    Loss,
}
