use crate::grid::Grid;

/// A named seed, given as `(row, col)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// `(rows, cols)` of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

/// Clears the grid and places `pattern` in its middle. Patterns larger than
/// the grid are clipped on the bottom/right.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();
    let (h, w) = pattern.extent();
    let origin = (
        grid.rows().saturating_sub(h) / 2,
        grid.cols().saturating_sub(w) / 2,
    );
    grid.stamp(pattern.cells, origin);
}

#[cfg(test)]
mod test {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::{engine::Automaton, grid::CellState};

    fn grid(rows: usize, cols: usize) -> Grid {
        Grid::new(NonZeroUsize::new(rows).unwrap(), NonZeroUsize::new(cols).unwrap())
    }

    #[test]
    fn extents() {
        assert_eq!(PATTERNS[0].extent(), (3, 3));
        assert_eq!(PATTERNS[1].extent(), (1, 3));
        assert_eq!(PATTERNS[3].extent(), (4, 4));
    }

    #[test]
    fn pattern_is_centred_and_replaces_contents() {
        let mut g = grid(5, 5);
        g.set(0, 0, CellState::Dead);
        apply_pattern(&mut g, &PATTERNS[1]);
        let alive: Vec<_> = g
            .cells()
            .filter(|c| c.state.is_alive())
            .map(|c| (c.row, c.col))
            .collect();
        assert_eq!(alive, vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(g.get(0, 0).unwrap().state, CellState::Empty);
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let mut g = grid(2, 2);
        apply_pattern(&mut g, &PATTERNS[3]);
        assert_eq!(g.population(), 4);
    }

    #[test]
    fn glider_keeps_five_cells() {
        let mut g = grid(10, 10);
        apply_pattern(&mut g, &PATTERNS[0]);
        let mut life = Automaton::default();
        for _ in 0..4 {
            let report = life.step(&mut g).unwrap();
            assert_eq!(report.population, 5);
        }
    }
}
