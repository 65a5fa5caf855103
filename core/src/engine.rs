use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::num::Saturating;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// How correctly placed flags are tallied for the win check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlagAccounting {
    /// Every mark that lands on a mine adds one, repeated marks on the same mine included. Never goes down.
    Cumulative,
    /// Mines that are flagged right now. More flags than mines blocks the win.
    Current,
}

impl FlagAccounting {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cumulative => "cumulative",
            Self::Current => "current",
        }
    }
}

impl Default for FlagAccounting {
    fn default() -> Self {
        Self::Cumulative
    }
}

impl fmt::Display for FlagAccounting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FlagAccounting {
    type Err = UnknownFlagAccounting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cumulative" => Ok(Self::Cumulative),
            "current" => Ok(Self::Current),
            other => Err(UnknownFlagAccounting(other.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ModelOptions {
    pub flag_accounting: FlagAccounting,
}

/// Efficiency score `100 * cells / rounds`, higher is better. Displays with two decimals, ties rounded up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    cells: CellCount,
    rounds: u32,
}

impl Score {
    pub fn value(self) -> f64 {
        match self.rounds {
            0 => 0.0,
            rounds => 100.0 * f64::from(self.cells) / f64::from(rounds),
        }
    }

    /// Score in hundredths, rounded half up.
    pub fn hundredths(self) -> u64 {
        match u64::from(self.rounds) {
            0 => 0,
            rounds => (20_000 * u64::from(self.cells) + rounds) / (2 * rounds),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hundredths = self.hundredths();
        write!(f, "{}.{:02}", hundredths / 100, hundredths % 100)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MinefieldModel {
    mine_layout: MineLayout,
    board: Array2<Cell>,
    options: ModelOptions,
    rounds: Saturating<u32>,
    flagged_mines: Saturating<CellCount>,
    fog: Option<Vec<(Coord2, Cell)>>,
    triggered_mine: Option<Coord2>,
}

impl MinefieldModel {
    pub fn new(rows: Coord, cols: Coord, mine_positions: &[Coord2]) -> Result<Self, ConfigError> {
        Self::with_options(rows, cols, mine_positions, ModelOptions::default())
    }

    pub fn with_options(
        rows: Coord,
        cols: Coord,
        mine_positions: &[Coord2],
        options: ModelOptions,
    ) -> Result<Self, ConfigError> {
        let mine_layout = MineLayout::from_mine_coords((rows, cols), mine_positions)?;
        Ok(Self::from_layout(mine_layout, options))
    }

    pub fn from_layout(mine_layout: MineLayout, options: ModelOptions) -> Self {
        let size = mine_layout.size();
        log::debug!(
            "New {}x{} mine field with {} mines, {} flag accounting",
            size.0,
            size.1,
            mine_layout.mine_count(),
            options.flag_accounting
        );
        Self {
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            options,
            rounds: Saturating(0),
            flagged_mines: Saturating(0),
            fog: None,
            triggered_mine: None,
        }
    }

    pub fn options(&self) -> ModelOptions {
        self.options
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds.0
    }

    pub fn flagged_mine_count(&self) -> CellCount {
        self.flagged_mines.0
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell, BoundsError> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.board[coords.to_nd_index()])
    }

    /// Row-major view of every cell, for rendering.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.board
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    /// The mine that ended the game, if one was revealed.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn is_lost(&self) -> bool {
        self.triggered_mine.is_some()
    }

    pub fn is_fogged(&self) -> bool {
        self.fog.is_some()
    }

    /// Never fails, coordinates off the grid are not mines.
    pub fn is_mine(&self, row: i32, col: i32) -> bool {
        self.mine_layout.is_mine(row, col)
    }

    pub fn adjacent_mine_count(&self, row: i32, col: i32) -> u8 {
        self.mine_layout.adjacent_mine_count(row, col)
    }

    pub fn check_bounds(&self, row: i32, col: i32) -> Result<Coord2, BoundsError> {
        self.mine_layout.check_bounds(row, col)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<Outcome, BoundsError> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.mine_layout[coords] {
            log::debug!("Revealed mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            return Ok(Outcome::Loss);
        }

        let adjacent_mines = self
            .mine_layout
            .adjacent_mine_count(coords.0.into(), coords.1.into());
        self.board[coords.to_nd_index()] = Cell::Revealed(adjacent_mines);
        self.rounds += 1;
        log::debug!("Revealed cell at {:?}, adjacent mines: {}", coords, adjacent_mines);
        Ok(Outcome::Continue)
    }

    pub fn mark(&mut self, coords: Coord2) -> Result<(), BoundsError> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.mine_layout[coords] {
            let already_flagged = self.board[coords.to_nd_index()].is_flagged();
            match self.options.flag_accounting {
                FlagAccounting::Cumulative => self.flagged_mines += 1,
                FlagAccounting::Current if !already_flagged => self.flagged_mines += 1,
                FlagAccounting::Current => {}
            }
        }

        self.board[coords.to_nd_index()] = Cell::Flagged;
        self.rounds += 1;
        log::debug!(
            "Flagged cell at {:?}, flagged mines: {}",
            coords,
            self.flagged_mines.0
        );
        Ok(())
    }

    pub fn guess(&mut self, coords: Coord2) -> Result<(), BoundsError> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.options.flag_accounting == FlagAccounting::Current
            && self.mine_layout[coords]
            && self.board[coords.to_nd_index()].is_flagged()
        {
            self.flagged_mines -= 1;
        }

        self.board[coords.to_nd_index()] = Cell::Guessed;
        self.rounds += 1;
        log::debug!("Guessed cell at {:?}", coords);
        Ok(())
    }

    /// Shows (`on`) or hides the mine overlay. Showing counts a round, hiding puts back whatever each overlaid cell
    /// held before, unless a move has replaced it since.
    pub fn toggle_fog(&mut self, on: bool) {
        if on {
            if self.fog.is_none() {
                let mut covered = Vec::new();
                for ((row, col), cell) in self.board.indexed_iter_mut() {
                    let coords = (row as Coord, col as Coord);
                    if !self.mine_layout[coords] {
                        continue;
                    }
                    covered.push((coords, *cell));
                    *cell = if cell.is_flagged() {
                        Cell::FlaggedFog
                    } else {
                        Cell::HiddenFog
                    };
                }
                log::trace!("Mine overlay shown over {} cells", covered.len());
                self.fog = Some(covered);
            }
            self.rounds += 1;
        } else if let Some(covered) = self.fog.take() {
            for (coords, previous) in covered {
                let cell = &mut self.board[coords.to_nd_index()];
                if cell.is_fog() {
                    *cell = previous;
                }
            }
            log::trace!("Mine overlay hidden");
        }
    }

    pub fn is_won(&self) -> bool {
        if self.board.iter().any(|cell| cell.is_unresolved()) {
            return false;
        }

        if self.flagged_mines.0 < self.mine_layout.mine_count() {
            return false;
        }

        match self.options.flag_accounting {
            FlagAccounting::Cumulative => true,
            FlagAccounting::Current => {
                let flags = self.board.iter().filter(|cell| cell.is_flagged()).count();
                flags <= usize::from(self.mine_layout.mine_count())
            }
        }
    }

    pub fn score(&self) -> Score {
        Score {
            cells: self.mine_layout.total_cells(),
            rounds: self.rounds.0,
        }
    }

    pub(crate) fn count_round(&mut self) {
        self.rounds += 1;
    }
}
