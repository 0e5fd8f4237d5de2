//! The transition rule and the two-pass generation step.
//!
//! A step first plans one [`Mutation`] per cell from an untouched grid and only
//! then writes them back, so every neighbour count sees the previous
//! generation and never a half-updated one.

use bevy::prelude::Resource;

use crate::{
    error::LifeError,
    grid::{CellState, Grid},
};

/// What happens to one cell in the coming generation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    ToAlive,
    ToDead,
    ToEmpty,
    #[default]
    NoChange,
}

/// Rule for a single cell given its current state and live neighbour count.
///
/// Alive cells survive on 2 or 3 neighbours and otherwise die. Any non-living
/// cell with exactly 3 neighbours is born. Dead cells that are not reborn fade
/// to empty.
pub fn next_mutation(state: CellState, live_neighbours: u8) -> Mutation {
    match (state, live_neighbours) {
        (CellState::Alive, 2..=3) => Mutation::NoChange,
        (CellState::Alive, _) => Mutation::ToDead,
        (CellState::Dead | CellState::Empty, 3) => Mutation::ToAlive,
        (CellState::Dead, _) => Mutation::ToEmpty,
        (CellState::Empty, _) => Mutation::NoChange,
    }
}

/// Instructions for a whole grid, laid out like the grid it was planned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationMap {
    rows: usize,
    cols: usize,
    mutations: Vec<Mutation>,
}

impl MutationMap {
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mutation> {
        (row < self.rows && col < self.cols).then(|| self.mutations[row * self.cols + col])
    }

    /// True when applying the map would leave the grid untouched.
    pub fn is_still(&self) -> bool {
        self.mutations.iter().all(|m| *m == Mutation::NoChange)
    }
}

/// First pass: read the grid, write nothing.
pub fn plan(grid: &Grid) -> MutationMap {
    let mutations = grid
        .cells()
        .map(|cell| next_mutation(cell.state, grid.live_neighbours(cell.row, cell.col)))
        .collect();
    MutationMap {
        rows: grid.rows(),
        cols: grid.cols(),
        mutations,
    }
}

/// How many cells each kind of transition touched during one step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepCounts {
    pub births: usize,
    pub deaths: usize,
    pub decays: usize,
}

/// Second pass: write every planned mutation back.
///
/// The map must have been planned from a grid of the same dimensions; if not,
/// the grid is left as it was.
pub fn apply(grid: &mut Grid, map: &MutationMap) -> Result<StepCounts, LifeError> {
    let expected = (grid.rows(), grid.cols());
    if map.dims() != expected {
        return Err(LifeError::MapMismatch {
            expected,
            found: map.dims(),
        });
    }

    let mut counts = StepCounts::default();
    for (i, mutation) in map.mutations.iter().enumerate() {
        let (row, col) = (i / map.cols, i % map.cols);
        let state = match mutation {
            Mutation::NoChange => continue,
            Mutation::ToAlive => {
                counts.births += 1;
                CellState::Alive
            }
            Mutation::ToDead => {
                counts.deaths += 1;
                CellState::Dead
            }
            Mutation::ToEmpty => {
                counts.decays += 1;
                CellState::Empty
            }
        };
        grid.set(row, col, state);
    }
    Ok(counts)
}

/// Summary of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Generation number reached by this step (the first step yields 1).
    pub generation: u64,
    pub counts: StepCounts,
    /// Alive cells after the step.
    pub population: usize,
}

/// Advances a grid one generation at a time and counts generations.
#[derive(Resource, Debug, Default, Clone)]
pub struct Automaton {
    generation: u64,
}

impl Automaton {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Restarts the generation counter, e.g. after the grid was reseeded.
    pub fn reset(&mut self) {
        self.generation = 0;
    }

    /// Plans and applies exactly one generation.
    pub fn step(&mut self, grid: &mut Grid) -> Result<StepReport, LifeError> {
        let map = plan(grid);
        let counts = apply(grid, &map)?;
        self.generation += 1;
        Ok(StepReport {
            generation: self.generation,
            counts,
            population: grid.population(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn grid(lines: &[&str]) -> Grid {
        Grid::from_pattern(lines).unwrap()
    }

    fn alive(grid: &Grid) -> Vec<(usize, usize)> {
        grid.cells()
            .filter(|c| c.state.is_alive())
            .map(|c| (c.row, c.col))
            .collect()
    }

    #[test]
    fn rule_table() {
        use CellState::*;
        for n in 0..=8 {
            let alive = next_mutation(Alive, n);
            let dead = next_mutation(Dead, n);
            let empty = next_mutation(Empty, n);
            match n {
                2 => assert_eq!(alive, Mutation::NoChange),
                3 => {
                    assert_eq!(alive, Mutation::NoChange);
                    assert_eq!(dead, Mutation::ToAlive);
                    assert_eq!(empty, Mutation::ToAlive);
                }
                _ => assert_eq!(alive, Mutation::ToDead),
            }
            if n != 3 {
                assert_eq!(dead, Mutation::ToEmpty);
                assert_eq!(empty, Mutation::NoChange);
            }
        }
    }

    #[test]
    fn lone_cell_dies_then_fades() {
        let mut g = grid(&["...", ".O.", "..."]);
        let mut life = Automaton::default();

        let report = life.step(&mut g).unwrap();
        assert_eq!(report.generation, 1);
        assert_eq!(report.population, 0);
        assert_eq!(report.counts.deaths, 1);
        assert_eq!(g.get(1, 1).unwrap().state, CellState::Dead);
        assert_eq!(g.cells().filter(|c| c.state == CellState::Empty).count(), 8);

        // decay takes exactly one more generation
        let report = life.step(&mut g).unwrap();
        assert_eq!(report.counts.decays, 1);
        assert!(g.cells().all(|c| c.state == CellState::Empty));
    }

    #[test]
    fn blinker_keeps_dead_trail() {
        let mut g = grid(&["...", "OOO", "..."]);
        let mut life = Automaton::default();

        life.step(&mut g).unwrap();
        assert_eq!(alive(&g), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(g.get(1, 0).unwrap().state, CellState::Dead);
        assert_eq!(g.get(1, 2).unwrap().state, CellState::Dead);

        life.step(&mut g).unwrap();
        assert_eq!(alive(&g), vec![(1, 0), (1, 1), (1, 2)]);
        // the alive set repeats, the full state does not
        assert_eq!(g.get(0, 1).unwrap().state, CellState::Dead);
        assert_eq!(g.get(2, 1).unwrap().state, CellState::Dead);
        assert_ne!(g, grid(&["...", "OOO", "..."]));
    }

    #[test]
    fn birth_ignores_prior_state() {
        // (1,1) is dead and (1,2) is empty; both see three live cells
        let mut g = grid(&["OOOO", ".x..", "...."]);
        Automaton::default().step(&mut g).unwrap();
        assert!(g.get(1, 1).unwrap().state.is_alive());
        assert!(g.get(1, 2).unwrap().state.is_alive());
    }

    #[test]
    fn overcrowded_cell_dies_not_vanishes() {
        let mut g = grid(&["OOO", "OOO", "OOO"]);
        Automaton::default().step(&mut g).unwrap();
        assert_eq!(g.get(1, 1).unwrap().state, CellState::Dead);
        assert_eq!(g.get(0, 1).unwrap().state, CellState::Dead);
        // corners have exactly 3 neighbours and survive
        assert!(g.get(0, 0).unwrap().state.is_alive());
    }

    #[test]
    fn plan_reads_only_previous_generation() {
        let g = grid(&["OO", "O."]);
        let map = plan(&g);
        // (1,1) is born; (0,0) keeps 2 neighbours even though (1,1) becomes alive
        assert_eq!(map.get(1, 1), Some(Mutation::ToAlive));
        assert_eq!(map.get(0, 0), Some(Mutation::NoChange));
        assert_eq!(map.get(2, 0), None);
        assert!(!map.is_still());
    }

    #[test]
    fn block_is_still() {
        let g = grid(&["....", ".OO.", ".OO.", "...."]);
        assert!(plan(&g).is_still());
    }

    #[test]
    fn mismatched_map_is_rejected() {
        let map = plan(&grid(&["...", "..."]));
        let mut g = grid(&["O.", ".O"]);
        let before = g.clone();
        assert_eq!(
            apply(&mut g, &map),
            Err(LifeError::MapMismatch {
                expected: (2, 2),
                found: (2, 3)
            })
        );
        assert_eq!(g, before);
    }
}
