use std::collections::VecDeque;

use strum::{Display, EnumString};

/// Working set of discovered cells that have not been expanded yet.
pub trait Frontier {
    fn push(&mut self, coords: (usize, usize));
    fn pop_next(&mut self) -> Option<(usize, usize)>;
}

// Last in, first out.
impl Frontier for Vec<(usize, usize)> {
    fn push(&mut self, coords: (usize, usize)) {
        Vec::push(self, coords);
    }

    fn pop_next(&mut self) -> Option<(usize, usize)> {
        self.pop()
    }
}

// First in, first out.
impl Frontier for VecDeque<(usize, usize)> {
    fn push(&mut self, coords: (usize, usize)) {
        self.push_back(coords);
    }

    fn pop_next(&mut self) -> Option<(usize, usize)> {
        self.pop_front()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    Dfs, // Stack frontier.
    Bfs, // Queue frontier, shortest paths.
}
