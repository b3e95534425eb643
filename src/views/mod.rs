use bevy::prelude::*;

mod black_hole;
mod planet;
mod ring;

pub use black_hole::BlackHole;
pub use planet::Planet;
pub use ring::Ring;

/// Something the controller can place on screen. Every image a view owns is
/// attached to its layer on `show` and detached on `hide`.
pub trait View {
	fn show(&self, world: &mut World);
	fn hide(&self, world: &mut World);
	fn is_shown(&self, world: &World) -> bool;
	fn set_position(&self, world: &mut World, x: f32, y: f32);
	fn resize(&self, world: &mut World, width: f32, height: f32);
}

#[cfg(test)]
pub(crate) mod test_util {
	use std::sync::Arc;
	use bevy::prelude::*;
	use crate::layers::{self, LayerError, LayerHandler, Layers};
	use crate::layer::Layer;

	pub struct TestLayers;

	impl LayerHandler for TestLayers {
		fn try_add_actor_on_layer(&self, world: &mut World, actor: Entity, layer: Layer) -> Result<(), LayerError> {
			layers::try_add_actor_on_layer(world, actor, layer)
		}
	}

	pub fn world_with_layers() -> (World, Arc<dyn LayerHandler>) {
		let mut world = World::new();
		let layers = Layers::spawn(&mut world, Vec2::new(480.0, 800.0));
		world.insert_resource(layers);

		(world, Arc::new(TestLayers))
	}

	pub fn group_of(world: &World, layer: Layer) -> Entity {
		world.resource::<Layers>().get(world, layer).unwrap()
	}
}
