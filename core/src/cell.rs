use serde::{Deserialize, Serialize};

/// Player-visible state of one grid slot. Mines are never recorded here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Hidden,
    Revealed(u8),
    Flagged,
    Guessed,
    // only while the mine overlay is shown:
    FlaggedFog,
    HiddenFog,
}

impl Cell {
    /// Hidden or guessed, including a hidden mine under the overlay. These block a win.
    pub const fn is_unresolved(self) -> bool {
        matches!(self, Self::Hidden | Self::Guessed | Self::HiddenFog)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged | Self::FlaggedFog)
    }

    pub const fn is_fog(self) -> bool {
        matches!(self, Self::FlaggedFog | Self::HiddenFog)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Hidden
    }
}
