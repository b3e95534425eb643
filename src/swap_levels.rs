use bevy::prelude::*;
use crate::views::{Planet, View};

/// Callbacks a screen hands out so its game object layers can be swapped.
pub trait LevelSwap: Send + Sync {
	fn game_object_groups(&self, world: &World) -> Vec<Entity>;

	/// Clears and recreates every game object layer.
	fn swap_game_object_layers(&self, world: &mut World);

	/// Attaches all current layer groups to the stage.
	fn attach_layer_groups(&self, world: &mut World);
}

pub struct SwapLevelsUseCase {
	player: Planet,
	layers: Box<dyn LevelSwap>,
}

impl SwapLevelsUseCase {
	pub fn new(player: Planet, layers: Box<dyn LevelSwap>) -> Self {
		SwapLevelsUseCase { player, layers }
	}

	pub fn execute(&self, world: &mut World) {
		let old = self.layers.game_object_groups(world);

		self.layers.swap_game_object_layers(world);
		self.layers.attach_layer_groups(world);
		self.player.show(world);

		info!("Swapped {} game object layers", old.len());
	}
}
