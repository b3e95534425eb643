use std::sync::Arc;
use bevy::prelude::*;
use crate::{
	actor,
	layer::Layer,
	layers::LayerHandler,
};
use super::View;

/// A ring drawn in two halves: the back half behind the planet and the front
/// half over it.
#[derive(Clone)]
pub struct Ring {
	layer_handler: Arc<dyn LayerHandler>,
	front: Entity,
	back: Entity,
}

impl Ring {
	pub fn new(
		world: &mut World,
		layer_handler: Arc<dyn LayerHandler>,
		front_texture: Handle<Image>,
		back_texture: Handle<Image>,
	) -> Self {
		let front = actor::spawn_image(world, "RingFront", front_texture, Vec2::ZERO);
		let back = actor::spawn_image(world, "RingBack", back_texture, Vec2::ZERO);

		Ring { layer_handler, front, back }
	}

	pub fn front(&self) -> Entity {
		self.front
	}

	pub fn back(&self) -> Entity {
		self.back
	}
}

impl View for Ring {
	fn show(&self, world: &mut World) {
		self.layer_handler.add_actor_on_layer(world, self.front, Layer::RingFront);
		self.layer_handler.add_actor_on_layer(world, self.back, Layer::RingBack);
	}

	fn hide(&self, world: &mut World) {
		actor::detach(world, self.front);
		actor::detach(world, self.back);
	}

	fn is_shown(&self, world: &World) -> bool {
		actor::is_attached(world, self.front) && actor::is_attached(world, self.back)
	}

	// front half hangs below the back half
	fn set_position(&self, world: &mut World, x: f32, y: f32) {
		let front_height = actor::size(world, self.front).y;

		actor::set_position(world, self.front, x, y - front_height);
		actor::set_position(world, self.back, x, y);
	}

	fn resize(&self, world: &mut World, width: f32, height: f32) {
		actor::set_size(world, self.front, width, height);
		actor::set_size(world, self.back, width, height);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::views::test_util::{group_of, world_with_layers};

	fn ring(world: &mut World, handler: Arc<dyn LayerHandler>) -> Ring {
		Ring::new(world, handler, Handle::default(), Handle::default())
	}

	#[test]
	fn halves_go_on_their_own_layers() {
		let (mut world, handler) = world_with_layers();
		let ring = ring(&mut world, handler);

		ring.show(&mut world);

		assert!(ring.is_shown(&world));
		assert_eq!(actor::parent(&world, ring.front()), Some(group_of(&world, Layer::RingFront)));
		assert_eq!(actor::parent(&world, ring.back()), Some(group_of(&world, Layer::RingBack)));
	}

	#[test]
	fn shown_only_when_both_halves_attached() {
		let (mut world, handler) = world_with_layers();
		let ring = ring(&mut world, handler);
		ring.show(&mut world);

		actor::detach(&mut world, ring.back());
		assert!(!ring.is_shown(&world));

		ring.show(&mut world);
		assert!(ring.is_shown(&world));

		ring.hide(&mut world);
		assert!(!ring.is_shown(&world));
		assert!(!actor::is_attached(&world, ring.front()));
	}

	#[test]
	fn front_sits_below_back_by_its_height() {
		let (mut world, handler) = world_with_layers();
		let ring = ring(&mut world, handler);

		ring.resize(&mut world, 120.0, 30.0);
		ring.set_position(&mut world, 10.0, 200.0);

		assert_eq!(actor::position(&world, ring.back()), Vec2::new(10.0, 200.0));
		assert_eq!(actor::position(&world, ring.front()), Vec2::new(10.0, 170.0));
		assert_eq!(actor::size(&world, ring.front()), Vec2::new(120.0, 30.0));
		assert_eq!(actor::size(&world, ring.back()), Vec2::new(120.0, 30.0));
	}
}
