mod frontier;

use std::{collections::VecDeque, fmt};

use tracing::debug;

use crate::maze::{Maze, MazeCell};
pub use frontier::{Frontier, Strategy};

// Up, right, down, left. Admission order decides which branch DFS takes.
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    NoMaze,
    NoPath,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NoMaze => f.write_str("no maze has been set"),
            SolveError::NoPath => f.write_str("no path exists from start to end"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Finds a start-to-end path through a borrowed maze.
///
/// Solving records visited flags and parent links in the maze itself, so
/// call `Maze::reset` before solving the same maze a second time.
#[derive(Default)]
pub struct MazeSolver<'a> {
    maze: Option<&'a mut Maze>,
}

impl<'a> MazeSolver<'a> {
    pub fn new() -> Self {
        Self { maze: None }
    }

    pub fn with_maze(maze: &'a mut Maze) -> Self {
        Self { maze: Some(maze) }
    }

    pub fn set_maze(&mut self, maze: &'a mut Maze) {
        self.maze = Some(maze);
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_deref()
    }

    pub fn maze_mut(&mut self) -> Option<&mut Maze> {
        self.maze.as_deref_mut()
    }

    pub fn solve_dfs(&mut self) -> Result<Vec<MazeCell>, SolveError> {
        self.solve(Strategy::Dfs)
    }

    pub fn solve_bfs(&mut self) -> Result<Vec<MazeCell>, SolveError> {
        self.solve(Strategy::Bfs)
    }

    /// Explores from the start until the end is popped off the frontier, then
    /// walks parent links back to the start.
    pub fn solve(&mut self, strategy: Strategy) -> Result<Vec<MazeCell>, SolveError> {
        let maze = self.maze.as_deref_mut().ok_or(SolveError::NoMaze)?;

        let explored = match strategy {
            Strategy::Dfs => explore(maze, Vec::<(usize, usize)>::new()),
            Strategy::Bfs => explore(maze, VecDeque::<(usize, usize)>::new()),
        };
        let expanded = match explored {
            Ok(expanded) => expanded,
            Err(expanded) => {
                debug!(%strategy, expanded, "frontier exhausted before reaching the end");
                return Err(SolveError::NoPath);
            }
        };

        let path = reconstruct_path(maze)?;
        debug!(%strategy, expanded, path_len = path.len(), "maze solved");
        Ok(path)
    }
}

/// Runs the traversal and returns how many cells were expanded, as `Err` if
/// the frontier ran dry first.
fn explore<F: Frontier>(maze: &mut Maze, mut frontier: F) -> Result<usize, usize> {
    let end = maze.end();
    let mut current = maze.start();
    let mut expanded = 0;

    // The start is the root of the discovery forest and never gets a parent.
    if let Some(start) = maze.cell_mut(current.0, current.1) {
        start.visit(None);
    }

    while current != end {
        expanded += 1;

        let (row, col) = (current.0 as isize, current.1 as isize);
        for (dr, dc) in DIRECTIONS {
            admit(maze, &mut frontier, current, row + dr, col + dc);
        }

        current = match frontier.pop_next() {
            Some(next) => next,
            None => return Err(expanded),
        };
    }

    Ok(expanded)
}

// Checks and marks in one step, so a cell enters the frontier at most once.
fn admit<F: Frontier>(
    maze: &mut Maze,
    frontier: &mut F,
    parent: (usize, usize),
    row: isize,
    col: isize,
) {
    if !maze.is_valid_cell(row, col) {
        return;
    }

    let coords = (row as usize, col as usize);
    let Some(cell) = maze.cell_mut(coords.0, coords.1) else {
        return;
    };
    if cell.is_visited() {
        return;
    }

    cell.visit(Some(parent));
    frontier.push(coords);
}

fn reconstruct_path(maze: &Maze) -> Result<Vec<MazeCell>, SolveError> {
    let start = maze.start();
    let mut current = maze.end_cell();
    let mut reverse = vec![*current];

    while current.coords() != start {
        let (row, col) = current.parent().ok_or(SolveError::NoPath)?;
        current = maze.cell(row, col).ok_or(SolveError::NoPath)?;
        reverse.push(*current);
    }

    reverse.reverse();
    Ok(reverse)
}
