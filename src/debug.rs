use bevy::ecs::{
	change_detection::Res,
	system::Resource,
};

/// Whether the world inspector is visible.
#[derive(Debug, Default, Resource)]
pub struct Debug {
	pub enabled: bool,
}

impl Debug {
	pub fn toggle(&mut self) {
		self.enabled = !self.enabled;
	}
}

pub fn debug_enabled(debug: Res<Debug>) -> bool {
	debug.enabled
}
