use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid sides and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Smallest allowed number of rows or columns.
pub const MIN_SIDE: Coord = 5;

/// Largest allowed number of rows or columns.
pub const MAX_SIDE: Coord = 10;

pub const fn side_in_range(side: Coord) -> bool {
    side >= MIN_SIDE && side <= MAX_SIDE
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Col,
}

impl Axis {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Col => "col",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const BLOCK: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walks the 3x3 block centred on a position, the centre included. Positions are not bounds checked, callers pair
/// this with a lookup that tolerates anything off the grid.
#[derive(Debug)]
pub struct BlockIter {
    center: (i32, i32),
    index: u8,
}

impl BlockIter {
    pub fn new(center: (i32, i32)) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for BlockIter {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let (dr, dc) = *BLOCK.get(usize::from(self.index))?;
        self.index += 1;
        let (row, col) = self.center;
        Some((row.saturating_add(dr), col.saturating_add(dc)))
    }
}
