use alloc::string::String;
use core::fmt;
use thiserror::Error;

use crate::{Axis, CellCount, Coord};

/// Construction parameters that cannot describe a playable mine field.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cannot create a mine field with {rows} rows and {cols} columns")]
    InvalidDimensions { rows: i32, cols: i32 },
    #[error("Cannot create a mine field with {mines} mines, it fits between 1 and {max}")]
    InvalidMineCount { mines: i32, max: CellCount },
    #[error("Mine at ({row}, {col}) lies outside the mine field")]
    MineOutOfBounds { row: i32, col: i32 },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Index {value} out of bounds for length {limit}")]
pub struct BoundsError {
    pub axis: Axis,
    pub value: i32,
    pub limit: Coord,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidCommand {
    #[error("Expected a command followed by integer row and column")]
    Malformed,
    #[error("Command not recognized")]
    Unrecognized,
}

/// Which value of the seed text a [`SeedError`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SeedField {
    Rows,
    Cols,
    MineCount,
    MineRow(usize),
    MineCol(usize),
}

impl fmt::Display for SeedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows => f.write_str("the row count"),
            Self::Cols => f.write_str("the column count"),
            Self::MineCount => f.write_str("the mine count"),
            Self::MineRow(index) => write!(f, "the row of mine #{}", index + 1),
            Self::MineCol(index) => write!(f, "the column of mine #{}", index + 1),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed ended before {what}")]
    MissingValue { what: SeedField },
    #[error("Expected an integer for {what}, found `{token}`")]
    NotAnInteger { what: SeedField, token: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown flag accounting `{0}`, expected `cumulative` or `current`")]
pub struct UnknownFlagAccounting(pub String);
