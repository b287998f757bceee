/// One square of the maze.
///
/// `parent` holds the coordinates of the cell this one was discovered from,
/// so the discovery forest lives inside the grid without any references.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeCell {
    row: usize,
    col: usize,
    is_wall: bool,
    visited: bool,
    parent: Option<(usize, usize)>,
}

impl MazeCell {
    pub fn new(row: usize, col: usize, is_wall: bool) -> Self {
        Self {
            row,
            col,
            is_wall,
            visited: false,
            parent: None,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn coords(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn parent(&self) -> Option<(usize, usize)> {
        self.parent
    }

    /// True if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &MazeCell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    pub(crate) fn visit(&mut self, parent: Option<(usize, usize)>) {
        self.visited = true;
        self.parent = parent;
    }

    pub(crate) fn clear(&mut self) {
        self.visited = false;
        self.parent = None;
    }
}
