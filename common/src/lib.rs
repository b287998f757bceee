pub mod maze;
pub mod solver;

pub use maze::{Maze, MazeCell, MazeError};
pub use solver::{MazeSolver, SolveError, Strategy};
