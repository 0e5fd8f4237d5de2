use bevy::prelude::*;

use crate::{
    board::{Board, CellCoord},
    commands::{
        read_keyboard, toggle_on_pointer_enter, ClearGrid, CommandsPlugin, LoadPattern,
        RandomizeGrid, StepOnce, ToggleCell, ToggleRun,
    },
    config::LifeConfig,
    engine::{Automaton, StepReport},
    error::LifeError,
    grid::{CellState, Grid},
    patterns::{apply_pattern, PATTERNS},
    prelude::*,
    scheduler::StepScheduler,
    state::GameState,
};

/// Owns the grid, the automaton and the scheduler, and wires them to input and
/// to the cell entities on screen.
pub struct LifePlugin {
    pub config: LifeConfig,
}

impl LifePlugin {
    pub fn new(config: LifeConfig) -> Self {
        Self { config }
    }
}

impl Plugin for LifePlugin {
    fn build(&self, app: &mut App) {
        let config = &self.config;
        app.add_plugins(CommandsPlugin)
            .insert_resource(config.clone())
            .insert_resource(Board::from_config(config))
            .insert_resource(Grid::new(config.rows(), config.cols()))
            .insert_resource(StepScheduler::new(config.interval()))
            .init_resource::<Automaton>()
            .add_systems(
                OnEnter(GameState::Load),
                (load_meshes_and_materials, load_cell_board).chain(),
            )
            .add_systems(
                Update,
                (
                    read_keyboard,
                    toggle_run,
                    edit_grid,
                    step_once,
                    run_scheduled_steps.run_if(in_state(GameState::Running)),
                    sync_cell_materials.run_if(resource_changed::<Grid>),
                )
                    .chain()
                    .run_if(not(in_state(GameState::Load))),
            );
    }
}

// ——> SYSTEMS

/// create the shared cell mesh and one material per cell state
fn load_meshes_and_materials(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    board: Res<Board>,
) {
    commands.insert_resource(CellMaterials {
        mesh: meshes.add(Rectangle::from_size(board.cell_size)),
        alive: materials.add(ColorMaterial::from_color(CELL_ALIVE_COLOR)),
        dead: materials.add(ColorMaterial::from_color(CELL_DEAD_COLOR)),
        empty: materials.add(ColorMaterial::from_color(CELL_EMPTY_COLOR)),
    });
}

/// spawn one entity per grid cell plus the board border
fn load_cell_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cell_mats: Res<CellMaterials>,
    board: Res<Board>,
    grid: Res<Grid>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let cells = board
        .coords()
        .map(|coord| {
            let state = grid
                .get(coord.row, coord.col)
                .map_or(CellState::Empty, |cell| cell.state);
            (
                coord,
                Mesh2d(cell_mats.mesh.clone()),
                MeshMaterial2d(cell_mats.for_state(state)),
                Transform::from_translation(board.cell_translation(coord))
                    .with_scale(board.cell_scale.extend(1.0)),
            )
        })
        .collect::<Vec<_>>();
    commands.spawn_batch(cells);

    // pointer-enter toggles the cell under the cursor
    commands.add_observer(toggle_on_pointer_enter);

    let border_mat = materials.add(ColorMaterial::from_color(BORDER_COLOR));
    for (pos, size) in board.border_rects() {
        commands.spawn((
            Border,
            Mesh2d(meshes.add(Rectangle::from_size(size))),
            MeshMaterial2d(border_mat.clone()),
            Transform::from_translation(pos.extend(0.0)),
        ));
    }

    info!(
        rows = board.rows,
        cols = board.cols,
        "board ready, press space to start"
    );
    next_state.set(GameState::Idle);
}

fn toggle_run(
    mut events: EventReader<ToggleRun>,
    mut scheduler: ResMut<StepScheduler>,
    mut next_state: ResMut<NextState<GameState>>,
    automaton: Res<Automaton>,
) {
    for _ in events.read() {
        let run = scheduler.toggle();
        info!(
            state = ?run,
            generation = automaton.generation(),
            interval_ms = scheduler.interval().as_millis() as u64,
            "toggled stepping"
        );
        next_state.set(run.into());
    }
}

fn edit_grid(
    mut toggles: EventReader<ToggleCell>,
    mut clears: EventReader<ClearGrid>,
    mut randomizes: EventReader<RandomizeGrid>,
    mut loads: EventReader<LoadPattern>,
    mut grid: ResMut<Grid>,
    mut automaton: ResMut<Automaton>,
) {
    for ToggleCell { row, col } in toggles.read().copied() {
        if grid.toggle(row, col).is_none() {
            warn!(row, col, "toggle outside the grid ignored");
        }
    }
    if clears.read().count() > 0 {
        grid.clear();
        automaton.reset();
        info!("grid cleared");
    }
    if randomizes.read().count() > 0 {
        grid.randomize(&mut fastrand::Rng::new(), RANDOM_DENSITY);
        automaton.reset();
        info!(population = grid.population(), "grid randomized");
    }
    for LoadPattern(index) in loads.read().copied() {
        match PATTERNS.get(index) {
            Some(pattern) => {
                apply_pattern(&mut grid, pattern);
                automaton.reset();
                info!(pattern = pattern.name, "pattern loaded");
            }
            None => warn!(index, "no such pattern"),
        }
    }
}

fn step_once(
    mut events: EventReader<StepOnce>,
    mut scheduler: ResMut<StepScheduler>,
    mut grid: ResMut<Grid>,
    mut automaton: ResMut<Automaton>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for _ in events.read() {
        let Some(ticket) = scheduler.step_once() else {
            warn!("single step ignored while running");
            continue;
        };
        if scheduler.admit(ticket) {
            if let Err(err) = advance(&mut automaton, &mut grid) {
                halt(&mut scheduler, &mut next_state, err);
            }
        }
    }
}

fn run_scheduled_steps(
    time: Res<Time>,
    mut scheduler: ResMut<StepScheduler>,
    mut grid: ResMut<Grid>,
    mut automaton: ResMut<Automaton>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for ticket in scheduler.tick(time.delta()) {
        if !scheduler.admit(ticket) {
            break;
        }
        if let Err(err) = advance(&mut automaton, &mut grid) {
            halt(&mut scheduler, &mut next_state, err);
        }
    }
}

fn advance(automaton: &mut Automaton, grid: &mut Grid) -> Result<StepReport, LifeError> {
    let report = automaton.step(grid)?;
    debug!(
        generation = report.generation,
        births = report.counts.births,
        deaths = report.counts.deaths,
        decays = report.counts.decays,
        population = report.population,
        "stepped"
    );
    Ok(report)
}

fn halt(scheduler: &mut StepScheduler, next_state: &mut NextState<GameState>, err: LifeError) {
    error!("step failed, pausing: {err}");
    scheduler.pause();
    next_state.set(GameState::Idle);
}

/// recolour cells after the grid changed
fn sync_cell_materials(
    grid: Res<Grid>,
    cell_mats: Res<CellMaterials>,
    mut cell_query: Query<(&CellCoord, &mut MeshMaterial2d<ColorMaterial>)>,
) {
    for (coord, mut material) in cell_query.iter_mut() {
        let Some(cell) = grid.get(coord.row, coord.col) else {
            continue;
        };
        let wanted = cell_mats.for_state(cell.state);
        if material.0 != wanted {
            material.0 = wanted;
        }
    }
}

// ——> COMPONENTS

#[derive(Component)]
#[require(Mesh2d)]
struct Border;

// ——> RESOURCES

/// handles shared by all cell entities
#[derive(Resource, Clone)]
struct CellMaterials {
    mesh: Handle<Mesh>,
    alive: Handle<ColorMaterial>,
    dead: Handle<ColorMaterial>,
    empty: Handle<ColorMaterial>,
}

impl CellMaterials {
    fn for_state(&self, state: CellState) -> Handle<ColorMaterial> {
        match state {
            CellState::Alive => self.alive.clone(),
            CellState::Dead => self.dead.clone(),
            CellState::Empty => self.empty.clone(),
        }
    }
}
