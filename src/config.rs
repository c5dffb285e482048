//! Game configuration: grid-size parsing and engine tunables.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{instrument, warn};

/// How long a mismatched pair stays face-up before flipping back.
pub const FLIP_BACK_DELAY: Duration = Duration::from_millis(800);

/// Board dimensions parsed from a `"<rows>x<cols>"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    rows: u32,
    cols: u32,
}

impl GridSize {
    /// The fallback board when no size is configured.
    pub const DEFAULT: Self = Self { rows: 3, cols: 4 };

    /// Creates a grid size from explicit dimensions.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Parses a size string such as `"3x4"` or `"3 X 4"`.
    ///
    /// Whitespace- and case-insensitive. An empty or missing string yields
    /// the 3x4 default. A component that is not a number parses to 0,
    /// degrading to an empty board rather than an error; the degradation
    /// is logged but never surfaced to the player.
    #[instrument]
    pub fn parse(input: &str) -> Self {
        let cleaned: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if cleaned.is_empty() {
            return Self::DEFAULT;
        }

        let mut parts = cleaned.split('x');
        let rows = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
        let cols = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
        let grid = Self { rows, cols };

        if grid.total() == 0 {
            warn!(input, "Unparseable grid size, board will be empty");
        } else if grid.total() % 2 != 0 {
            warn!(input, total = grid.total(), "Odd cell count, dropping one cell");
        }
        grid
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total cell count.
    pub fn total(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Pairs that fit on the board; an odd total floors down.
    pub fn pair_count(&self) -> usize {
        self.total() / 2
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::str::FromStr for GridSize {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Per-session engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    grid: GridSize,
    flip_back_delay: Duration,
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(grid: GridSize, flip_back_delay: Duration) -> Self {
        Self {
            grid,
            flip_back_delay,
        }
    }

    /// Board dimensions.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Mismatch flip-back delay.
    pub fn flip_back_delay(&self) -> Duration {
        self.flip_back_delay
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::DEFAULT,
            flip_back_delay: FLIP_BACK_DELAY,
        }
    }
}
