pub mod cell;
pub mod maker;
mod parse;

use std::{fmt, fs, io, path::Path};

use serde::{Deserialize, Serialize};

pub use cell::MazeCell;
pub use maker::{MAX_RADIUS, MazeMaker};

pub const WALL: char = '#';
pub const OPEN: char = '.';
pub const START: char = 'A';
pub const END: char = 'B';
pub const PATH: char = '*';

/// Rectangular grid of cells with a distinguished start and end.
///
/// `start` and `end` always lie inside the grid on open cells; every
/// constructor checks this before handing out a `Maze`. Deserializing goes
/// through `from_walls` as well, and only the wall map and endpoints are
/// stored, never search state.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "MazeData", try_from = "MazeData")]
pub struct Maze {
    grid: Vec<Vec<MazeCell>>,
    start: (usize, usize),
    end: (usize, usize),
}

impl Maze {
    /// Builds a maze from a row-major wall map, `true` marking a wall.
    pub fn from_walls(
        walls: Vec<Vec<bool>>,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Result<Self, MazeError> {
        let rows = walls.len();
        let cols = walls.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MazeError::Empty);
        }

        if let Some((row, line)) = walls
            .iter()
            .enumerate()
            .find(|(_, line)| line.len() != cols)
        {
            return Err(MazeError::RowWidth {
                row,
                expected: cols,
                got: line.len(),
            });
        }

        let is_open = |(row, col): (usize, usize)| row < rows && col < cols && !walls[row][col];
        if !is_open(start) {
            return Err(MazeError::BadStart(start.0, start.1));
        }
        if !is_open(end) {
            return Err(MazeError::BadEnd(end.0, end.1));
        }

        let grid = walls
            .into_iter()
            .enumerate()
            .map(|(row, line)| {
                line.into_iter()
                    .enumerate()
                    .map(|(col, is_wall)| MazeCell::new(row, col, is_wall))
                    .collect()
            })
            .collect();

        Ok(Self::from_grid(grid, start, end))
    }

    // Callers guarantee the start/end invariant.
    pub(crate) fn from_grid(
        grid: Vec<Vec<MazeCell>>,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Self {
        Self { grid, start, end }
    }

    /// Reads a maze file in the `rows cols` header format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let text = fs::read_to_string(path)?;
        text.parse()
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid[0].len()
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// True if `(row, col)` is inside the grid and not a wall. Signed so that
    /// neighbours of edge cells can be checked without underflow.
    pub fn is_valid_cell(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.cell(row as usize, col as usize)
            .is_some_and(|cell| !cell.is_wall())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&MazeCell> {
        self.grid.get(row).and_then(|line| line.get(col))
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut MazeCell> {
        self.grid.get_mut(row).and_then(|line| line.get_mut(col))
    }

    pub fn start_cell(&self) -> &MazeCell {
        &self.grid[self.start.0][self.start.1]
    }

    pub fn end_cell(&self) -> &MazeCell {
        &self.grid[self.end.0][self.end.1]
    }

    /// Clears visited flags and parent links so the maze can be solved again.
    pub fn reset(&mut self) {
        for cell in self.grid.iter_mut().flatten() {
            cell.clear();
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &MazeCell> {
        self.grid.iter().flatten()
    }

    pub fn log(&self) -> String {
        self.render(|_| false)
    }

    /// Renders the maze with every cell of `path` marked by `*`.
    pub fn solution_log(&self, path: &[MazeCell]) -> String {
        let mut on_path = vec![vec![false; self.cols()]; self.rows()];
        for cell in path {
            if let Some(flag) = on_path
                .get_mut(cell.row())
                .and_then(|line| line.get_mut(cell.col()))
            {
                *flag = true;
            }
        }

        self.render(|cell| on_path[cell.row()][cell.col()])
    }

    fn render(&self, on_path: impl Fn(&MazeCell) -> bool) -> String {
        self.grid
            .iter()
            .map(|line| {
                line.iter()
                    .map(|cell| self.symbol(cell, on_path(cell)))
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn symbol(&self, cell: &MazeCell, on_path: bool) -> char {
        if cell.coords() == self.start {
            START
        } else if cell.coords() == self.end {
            END
        } else if cell.is_wall() {
            WALL
        } else if on_path {
            PATH
        } else {
            OPEN
        }
    }
}

#[derive(Serialize, Deserialize)]
struct MazeData {
    walls: Vec<Vec<bool>>,
    start: (usize, usize),
    end: (usize, usize),
}

impl From<Maze> for MazeData {
    fn from(maze: Maze) -> Self {
        let walls = maze
            .grid
            .iter()
            .map(|line| line.iter().map(MazeCell::is_wall).collect())
            .collect();
        MazeData {
            walls,
            start: maze.start,
            end: maze.end,
        }
    }
}

impl TryFrom<MazeData> for Maze {
    type Error = MazeError;

    fn try_from(data: MazeData) -> Result<Self, Self::Error> {
        Maze::from_walls(data.walls, data.start, data.end)
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}

#[derive(Debug)]
pub enum MazeError {
    Io(io::Error),
    MissingHeader,
    InvalidHeader(String),
    Empty,
    RowCount { expected: usize, got: usize },
    RowWidth { row: usize, expected: usize, got: usize },
    UnknownSymbol { row: usize, col: usize, symbol: char },
    MissingStart,
    MissingEnd,
    DuplicateStart { row: usize, col: usize },
    DuplicateEnd { row: usize, col: usize },
    BadStart(usize, usize),
    BadEnd(usize, usize),
    TooLarge { radius: usize, max: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::Io(e) => write!(f, "failed to read maze: {}", e),
            MazeError::MissingHeader => write!(f, "maze is missing its `rows cols` header"),
            MazeError::InvalidHeader(line) => write!(f, "invalid maze header '{}'", line),
            MazeError::Empty => write!(f, "maze has no cells"),
            MazeError::RowCount { expected, got } => {
                write!(f, "expected {} rows, found {}", expected, got)
            }
            MazeError::RowWidth { row, expected, got } => {
                write!(f, "row {} has {} columns, expected {}", row, got, expected)
            }
            MazeError::UnknownSymbol { row, col, symbol } => {
                write!(f, "unknown symbol '{}' at ({}, {})", symbol, row, col)
            }
            MazeError::MissingStart => write!(f, "maze has no start cell '{}'", START),
            MazeError::MissingEnd => write!(f, "maze has no end cell '{}'", END),
            MazeError::DuplicateStart { row, col } => {
                write!(f, "second start cell at ({}, {})", row, col)
            }
            MazeError::DuplicateEnd { row, col } => {
                write!(f, "second end cell at ({}, {})", row, col)
            }
            MazeError::BadStart(row, col) => {
                write!(f, "start ({}, {}) is outside the maze or a wall", row, col)
            }
            MazeError::BadEnd(row, col) => {
                write!(f, "end ({}, {}) is outside the maze or a wall", row, col)
            }
            MazeError::TooLarge { radius, max } => {
                write!(f, "radius {} exceeds the maximum of {}", radius, max)
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MazeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MazeError {
    fn from(e: io::Error) -> Self {
        MazeError::Io(e)
    }
}
