use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::*;

/// Validated contents of a seed file: the grid size followed by the mine positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: Vec<Coord2>,
}

impl Seed {
    /// Reads `rows cols count` and then `count` pairs of `row col`, all whitespace separated. Anything after the last
    /// pair is ignored.
    pub fn parse(text: &str) -> Result<Self, SeedError> {
        let mut tokens = text.split_whitespace();

        let rows = next_int(&mut tokens, SeedField::Rows)?;
        let cols = next_int(&mut tokens, SeedField::Cols)?;
        let declared = next_int(&mut tokens, SeedField::MineCount)?;

        let size = MineLayout::check_size(rows, cols)?;
        let count = MineLayout::check_mine_count(size, declared)?;

        let mut mines = Vec::with_capacity(count.into());
        for index in 0..usize::from(count) {
            let row = next_int(&mut tokens, SeedField::MineRow(index))?;
            let col = next_int(&mut tokens, SeedField::MineCol(index))?;
            match (Coord::try_from(row), Coord::try_from(col)) {
                (Ok(r), Ok(c)) if r < size.0 && c < size.1 => mines.push((r, c)),
                _ => return Err(ConfigError::MineOutOfBounds { row, col }.into()),
            }
        }

        Ok(Self {
            rows: size.0,
            cols: size.1,
            mines,
        })
    }

    pub fn into_model(self, options: ModelOptions) -> Result<MinefieldModel, ConfigError> {
        MinefieldModel::with_options(self.rows, self.cols, &self.mines, options)
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: SeedField) -> Result<i32, SeedError> {
    let token = tokens.next().ok_or(SeedError::MissingValue { what })?;
    token.parse().map_err(|_| SeedError::NotAnInteger {
        what,
        token: token.to_string(),
    })
}
