use bevy::prelude::*;
use bevy_pancam::{PanCam, PanCamPlugin};

use crate::{board::Board, prelude::*, state::GameState};

pub struct CamPlugin;

impl Plugin for CamPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanCamPlugin)
            .insert_resource(ClearColor(BG_COLOR))
            .add_systems(OnEnter(GameState::Load), spawn_cam);
    }
}

/// Zoom so the whole board, border included, fits the initial window.
fn fit_scale(board: &Board) -> f32 {
    let extent = board.pixel_size().max_element() + 4.0 * BORDER_WIDTH_PX;
    (extent / WINDOW_SIZE_PX).max(0.1)
}

// Init
fn spawn_cam(mut commands: Commands, board: Res<Board>) {
    commands.spawn((
        Camera2d,
        // the left button is taken by cell toggling
        PanCam {
            grab_buttons: vec![MouseButton::Right, MouseButton::Middle],
            ..default()
        },
        OrthographicProjection {
            scaling_mode: bevy::render::camera::ScalingMode::WindowSize,
            scale: fit_scale(&board),
            near: -1000.0,
            far: 1000.0,
            ..OrthographicProjection::default_2d()
        },
        Msaa::Off,
    ));
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::LifeConfig;

    #[test]
    fn scale_grows_with_board() {
        let small = Board::from_config(&LifeConfig::new("t", 4, 4, 100).unwrap());
        let large = Board::from_config(&LifeConfig::new("t", 200, 100, 100).unwrap());
        assert!(fit_scale(&small) < 0.2);
        assert!(fit_scale(&large) > 1.0);
    }
}
