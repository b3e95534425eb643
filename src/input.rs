use bevy::{
	input::touch::Touches,
	prelude::*,
	window::PrimaryWindow,
};
use crate::{args::Config, debug::Debug, screen};

/// Forwards clicks and touch starts to the screen in stage coordinates.
pub fn sys_player_input(
	mut commands: Commands,
	mut debug: ResMut<Debug>,
	keyboard: Res<Input<KeyCode>>,
	mouse: Res<Input<MouseButton>>,
	touches: Res<Touches>,
	config: Res<Config>,
	q_camera: Query<(&Camera, &GlobalTransform), With<Camera>>,
	q_window: Query<&Window, With<PrimaryWindow>>,
) {
	if keyboard.just_released(KeyCode::F12) {
		debug.toggle();
	}

	let (cam, cam_t) = unwrap!(q_camera.get_single().ok(), { return; });
	let win = unwrap!(q_window.get_single().ok(), { return; });

	let mut presses: Vec<Vec2> = touches.iter_just_pressed()
		.map(|t| t.position())
		.collect();
	if mouse.just_pressed(MouseButton::Left) {
		presses.extend(win.cursor_position());
	}

	// the stage's origin is the bottom-left corner of the camera view
	let offset = Vec2::new(config.cam_width, config.cam_height) / 2.0;
	for win_pos in presses {
		let world_pos = unwrap!(cam.viewport_to_world_2d(cam_t, win_pos), { continue; });
		let at = world_pos + offset;
		commands.add(move |world: &mut World| screen::touch(world, at));
	}
}
