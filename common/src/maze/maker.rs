use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use tracing::debug;

use super::{Maze, MazeCell, MazeError};
use crate::solver::DIRECTIONS;

/// Largest radius, in rooms, the generator accepts along either axis.
pub const MAX_RADIUS: usize = 1024;

const FIRST_ROOM: (usize, usize) = (1, 1);

/// Carves a perfect maze with a randomized depth-first backtracker.
///
/// Rooms sit at odd coordinates and the outer ring is always wall, so the grid
/// is `2 * radius + 1` cells on each side. Carving starts in the top-left room
/// and every room ends up reachable from it.
pub struct MazeMaker {
    walls: Vec<Vec<bool>>,
    rng: StdRng,
}

impl MazeMaker {
    pub fn new(vertical_radius: usize, horizontal_radius: usize) -> Result<Self, MazeError> {
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::with_rng(vertical_radius, horizontal_radius, rng)
    }

    /// Same as `new` but reproducible.
    pub fn seeded(
        vertical_radius: usize,
        horizontal_radius: usize,
        seed: u64,
    ) -> Result<Self, MazeError> {
        let rng = StdRng::seed_from_u64(seed);
        Self::with_rng(vertical_radius, horizontal_radius, rng)
    }

    fn with_rng(
        vertical_radius: usize,
        horizontal_radius: usize,
        rng: StdRng,
    ) -> Result<Self, MazeError> {
        let rows = side(vertical_radius)?;
        let cols = side(horizontal_radius)?;

        let mut maker = MazeMaker {
            walls: vec![vec![true; cols]; rows],
            rng,
        };
        maker.carve();
        debug!(rows, cols, "maze carved");
        Ok(maker)
    }

    pub fn rows(&self) -> usize {
        self.walls.len()
    }

    pub fn cols(&self) -> usize {
        self.walls[0].len()
    }

    /// Start is the top-left room, end the bottom-right room.
    pub fn into_maze(self) -> Maze {
        let end = (self.rows() - 2, self.cols() - 2);
        let grid = self
            .walls
            .into_iter()
            .enumerate()
            .map(|(row, line)| {
                line.into_iter()
                    .enumerate()
                    .map(|(col, is_wall)| MazeCell::new(row, col, is_wall))
                    .collect()
            })
            .collect();

        Maze::from_grid(grid, FIRST_ROOM, end)
    }

    fn carve(&mut self) {
        self.open(FIRST_ROOM);
        let mut trail = vec![FIRST_ROOM];

        while let Some(&room) = trail.last() {
            let closed: Vec<(usize, usize)> = DIRECTIONS
                .iter()
                .filter_map(|&step| self.closed_room_towards(room, step))
                .collect();

            match closed.choose(&mut self.rng) {
                Some(&next) => {
                    self.open(((room.0 + next.0) / 2, (room.1 + next.1) / 2));
                    self.open(next);
                    trail.push(next);
                }
                None => {
                    trail.pop();
                }
            }
        }
    }

    // The room two cells away in `step`'s direction, if it exists and is
    // still solid.
    fn closed_room_towards(
        &self,
        (row, col): (usize, usize),
        (dr, dc): (isize, isize),
    ) -> Option<(usize, usize)> {
        let row = row.checked_add_signed(2 * dr)?;
        let col = col.checked_add_signed(2 * dc)?;
        let inside = row < self.rows() - 1 && col < self.cols() - 1;
        (inside && self.walls[row][col]).then_some((row, col))
    }

    fn open(&mut self, (row, col): (usize, usize)) {
        self.walls[row][col] = false;
    }
}

fn side(radius: usize) -> Result<usize, MazeError> {
    if radius > MAX_RADIUS {
        return Err(MazeError::TooLarge {
            radius,
            max: MAX_RADIUS,
        });
    }
    Ok(2 * radius.max(1) + 1)
}
