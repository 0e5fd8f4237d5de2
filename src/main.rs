use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::WindowResolution,
};
use life_decay_board::{
    camera::CamPlugin, config::LifeConfig, error::LifeError, life::LifePlugin,
    prelude::WINDOW_SIZE_PX, state::GameState,
};

fn main() -> Result<(), LifeError> {
    let config = LifeConfig::from_env()?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.render_target().to_owned(),
                        resizable: true,
                        focused: true,
                        present_mode: bevy::window::PresentMode::AutoNoVsync,
                        mode: bevy::window::WindowMode::Windowed,
                        resolution: WindowResolution::new(WINDOW_SIZE_PX, WINDOW_SIZE_PX),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(MeshPickingPlugin)
        .add_plugins((FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin::default()))
        .init_state::<GameState>()
        .add_plugins((CamPlugin, LifePlugin::new(config)))
        .run();

    Ok(())
}
