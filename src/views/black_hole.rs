use std::sync::Arc;
use bevy::prelude::*;
use crate::{
	actor,
	layer::Layer,
	layers::LayerHandler,
};
use super::View;

#[derive(Clone)]
pub struct BlackHole {
	layer_handler: Arc<dyn LayerHandler>,
	image: Entity,
}

impl BlackHole {
	pub fn new(world: &mut World, layer_handler: Arc<dyn LayerHandler>, texture: Handle<Image>) -> Self {
		let image = actor::spawn_image(world, "BlackHole", texture, Vec2::ZERO);

		BlackHole { layer_handler, image }
	}
}

impl View for BlackHole {
	fn show(&self, world: &mut World) {
		self.layer_handler.add_actor_on_layer(world, self.image, Layer::Objects);
	}

	fn hide(&self, world: &mut World) {
		actor::detach(world, self.image);
	}

	fn is_shown(&self, world: &World) -> bool {
		actor::is_attached(world, self.image)
	}

	fn set_position(&self, world: &mut World, x: f32, y: f32) {
		actor::set_position(world, self.image, x, y);
	}

	fn resize(&self, world: &mut World, width: f32, height: f32) {
		actor::set_size(world, self.image, width, height);
	}
}
