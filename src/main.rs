use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

#[macro_use]
mod macros;

mod actor;
mod args;
mod collide;
mod controller;
mod debug;
mod input;
mod layer;
mod layers;
mod movement;
mod screen;
mod swap_levels;
mod textures;
mod views;

use debug::{debug_enabled, Debug};
use screen::GameScreenPlugin;

fn main() {
	let config = unwrap!(args::parse_args(), { return; });

	App::new()
		.insert_resource(ClearColor(Color::rgb(0.0, 0.0, 0.05)))
		.insert_resource(Debug { enabled: config.debug })
		.add_plugins(DefaultPlugins.set(WindowPlugin {
			primary_window: Some(Window {
				title: "Grow My Planet".to_string(),
				resolution: (config.cam_width, config.cam_height).into(),
				..default()
			}),
			..default()
		}))
		.add_plugins(WorldInspectorPlugin::new().run_if(debug_enabled))
		.insert_resource(config)
		.add_plugins(GameScreenPlugin)
		.run();
}
