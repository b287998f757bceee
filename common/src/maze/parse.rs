use std::str::FromStr;

use super::{END, Maze, MazeError, OPEN, START, WALL};

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses a `rows cols` header followed by one line per row, using `#`
    /// for walls, `.` for open cells, `A` for the start and `B` for the end.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text.lines().map(str::trim_end).filter(|line| !line.is_empty());

        let header = lines.next().ok_or(MazeError::MissingHeader)?;
        let (rows, cols) = parse_header(header)?;

        let body: Vec<&str> = lines.collect();
        if body.len() != rows {
            return Err(MazeError::RowCount {
                expected: rows,
                got: body.len(),
            });
        }

        let mut walls = Vec::with_capacity(rows);
        let mut start = None;
        let mut end = None;

        for (row, line) in body.into_iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != cols {
                return Err(MazeError::RowWidth {
                    row,
                    expected: cols,
                    got: symbols.len(),
                });
            }

            let mut wall_row = Vec::with_capacity(cols);
            for (col, symbol) in symbols.into_iter().enumerate() {
                let is_wall = match symbol {
                    WALL => true,
                    OPEN => false,
                    START => {
                        if start.replace((row, col)).is_some() {
                            return Err(MazeError::DuplicateStart { row, col });
                        }
                        false
                    }
                    END => {
                        if end.replace((row, col)).is_some() {
                            return Err(MazeError::DuplicateEnd { row, col });
                        }
                        false
                    }
                    _ => return Err(MazeError::UnknownSymbol { row, col, symbol }),
                };
                wall_row.push(is_wall);
            }
            walls.push(wall_row);
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        let end = end.ok_or(MazeError::MissingEnd)?;
        Maze::from_walls(walls, start, end)
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), MazeError> {
    let invalid = || MazeError::InvalidHeader(line.to_string());

    let mut parts = line.split_whitespace();
    let rows: usize = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    let cols: usize = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;

    if parts.next().is_some() {
        return Err(invalid());
    }
    if rows == 0 || cols == 0 {
        return Err(MazeError::Empty);
    }

    Ok((rows, cols))
}
