use std::{fmt, io, io::Write};

use tracing::info;

use crate::config::{Command, Config};
use common::{Maze, MazeError, MazeSolver, SolveError, maze::MazeMaker};

/// Loads or generates the maze, then solves it once per configured strategy,
/// resetting between solves, and prints every solution to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<(), RunError> {
    let mut maze = build_maze(&config.command)?;
    writeln!(out, "{}\n", maze)?;

    let mut solver = MazeSolver::new();
    solver.set_maze(&mut maze);

    for (i, &strategy) in config.strategies.iter().enumerate() {
        if i > 0 {
            if let Some(maze) = solver.maze_mut() {
                maze.reset();
            }
        }

        let path = solver.solve(strategy)?;
        let label = strategy.to_string().to_uppercase();
        writeln!(out, "{} solution, {} cells:", label, path.len())?;
        if let Some(maze) = solver.maze() {
            writeln!(out, "{}\n", maze.solution_log(&path))?;
        }
    }

    Ok(())
}

fn build_maze(command: &Command) -> Result<Maze, RunError> {
    match command {
        Command::Solve { path } => {
            info!(path = %path.display(), "loading maze");
            Ok(Maze::load(path)?)
        }
        Command::Generate { rows, cols, seed } => {
            info!(rows, cols, ?seed, "generating maze");
            let maker = match seed {
                Some(seed) => MazeMaker::seeded(*rows, *cols, *seed)?,
                None => MazeMaker::new(*rows, *cols)?,
            };
            Ok(maker.into_maze())
        }
    }
}

#[derive(Debug)]
pub enum RunError {
    Maze(MazeError),
    Solve(SolveError),
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Maze(e) => write!(f, "{}", e),
            RunError::Solve(e) => write!(f, "{}", e),
            RunError::Io(e) => write!(f, "failed to write output: {}", e),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Maze(e) => Some(e),
            RunError::Solve(e) => Some(e),
            RunError::Io(e) => Some(e),
        }
    }
}

impl From<MazeError> for RunError {
    fn from(e: MazeError) -> Self {
        RunError::Maze(e)
    }
}

impl From<SolveError> for RunError {
    fn from(e: SolveError) -> Self {
        RunError::Solve(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        RunError::Io(e)
    }
}
