use bevy::prelude::*;

use crate::scheduler::RunState;

/// App phase. `Idle`/`Running` mirror the [`StepScheduler`](crate::scheduler::StepScheduler).
#[derive(States, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Load,
    Idle,
    Running,
}

impl From<RunState> for GameState {
    fn from(run: RunState) -> Self {
        match run {
            RunState::Idle => GameState::Idle,
            RunState::Running => GameState::Running,
        }
    }
}
