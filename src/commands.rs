//! Discrete commands the board reacts to, and the input that produces them.

use bevy::prelude::*;

use crate::{board::CellCoord, patterns::PATTERNS};

/// Start or pause periodic stepping.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleRun;

/// Flip one cell between empty and alive.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleCell {
    pub row: usize,
    pub col: usize,
}

/// Advance a single generation while paused.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOnce;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearGrid;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomizeGrid;

/// Replace the grid with one of [`PATTERNS`].
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPattern(pub usize);

pub struct CommandsPlugin;

impl Plugin for CommandsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ToggleRun>()
            .add_event::<ToggleCell>()
            .add_event::<StepOnce>()
            .add_event::<ClearGrid>()
            .add_event::<RandomizeGrid>()
            .add_event::<LoadPattern>();
    }
}

const PATTERN_KEYS: [KeyCode; 5] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
];

/// Space toggles running, N steps, C clears, R randomizes, 1-5 load patterns.
pub fn read_keyboard(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut toggle_run: EventWriter<ToggleRun>,
    mut step_once: EventWriter<StepOnce>,
    mut clear: EventWriter<ClearGrid>,
    mut randomize: EventWriter<RandomizeGrid>,
    mut load_pattern: EventWriter<LoadPattern>,
) {
    if keyboard_input.just_pressed(KeyCode::Space) {
        toggle_run.send(ToggleRun);
    }
    if keyboard_input.just_pressed(KeyCode::KeyN) {
        step_once.send(StepOnce);
    }
    if keyboard_input.just_pressed(KeyCode::KeyC) {
        clear.send(ClearGrid);
    }
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        randomize.send(RandomizeGrid);
    }
    for (i, key) in PATTERN_KEYS.iter().enumerate().take(PATTERNS.len()) {
        if keyboard_input.just_pressed(*key) {
            load_pattern.send(LoadPattern(i));
        }
    }
}

/// Observer: the pointer entering a cell toggles it.
pub fn toggle_on_pointer_enter(
    trigger: Trigger<Pointer<Over>>,
    cells: Query<&CellCoord>,
    mut toggle_cell: EventWriter<ToggleCell>,
) {
    if let Ok(coord) = cells.get(trigger.entity()) {
        toggle_cell.send(ToggleCell {
            row: coord.row,
            col: coord.col,
        });
    }
}
