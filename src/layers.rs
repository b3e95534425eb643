use bevy::prelude::*;
use thiserror::Error;
use crate::{actor, layer::Layer};

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LayerError {
	#[error("Can't find group for layer: {0:?}")]
	UnknownLayer(Layer),
}

/// Marks the group entity that holds every actor drawn on `layer`.
#[derive(Component, Clone, Copy, Debug, Reflect)]
pub struct LayerGroup {
	pub layer: Layer,
	pub size: Vec2,
}

/// Capability to place actors on a layer, handed to every view.
pub trait LayerHandler: Send + Sync {
	fn try_add_actor_on_layer(&self, world: &mut World, actor: Entity, layer: Layer) -> Result<(), LayerError>;

	/// Like `try_add_actor_on_layer`, but a missing layer is only logged.
	fn add_actor_on_layer(&self, world: &mut World, actor: Entity, layer: Layer) {
		unwrap_or_log!(self.try_add_actor_on_layer(world, actor, layer), { return; });
	}
}

/// One group entity per `Layer`, indexed by `Layer::index`.
#[derive(Clone, Debug, Resource)]
pub struct Layers {
	groups: [Entity; Layer::COUNT],
	size: Vec2,
}

impl Layers {
	pub fn spawn(world: &mut World, size: Vec2) -> Self {
		let groups = Layer::ALL.map(|layer| spawn_group(world, layer, size));

		Layers { groups, size }
	}

	/// Fails if the group for `layer` has been despawned.
	pub fn get(&self, world: &World, layer: Layer) -> Result<Entity, LayerError> {
		let group = self.groups[layer.index()];

		match world.get::<LayerGroup>(group) {
			Some(g) if g.layer == layer => Ok(group),
			_ => Err(LayerError::UnknownLayer(layer)),
		}
	}

	/// All groups in layer order.
	pub fn groups(&self) -> impl Iterator<Item = Entity> + '_ {
		self.groups.iter().copied()
	}

	pub fn game_object_groups(&self) -> impl Iterator<Item = Entity> + '_ {
		Layer::GAME_OBJECTS.iter().map(|layer| self.groups[layer.index()])
	}

	/// Empties and despawns every game object group, then replaces each with a
	/// fresh one. Static layers keep their group and its children.
	pub fn rebuild_game_object_layers(&mut self, world: &mut World) {
		for layer in Layer::GAME_OBJECTS {
			let old = self.groups[layer.index()];

			let children: Vec<Entity> = world.get::<Children>(old)
				.map(|c| c.to_vec())
				.unwrap_or_default();
			for child in children {
				actor::detach(world, child);
			}

			if let Some(group) = world.get_entity_mut(old) {
				group.despawn_recursive();
			}

			self.groups[layer.index()] = spawn_group(world, layer, self.size);
		}

		debug!("Rebuilt {} game object layers", Layer::GAME_OBJECTS.len());
	}
}

fn spawn_group(world: &mut World, layer: Layer, size: Vec2) -> Entity {
	world.spawn((
			LayerGroup { layer, size },
			Name::new(format!("Layer::{:?}", layer)),
			SpatialBundle::from_transform(Transform::from_xyz(0.0, 0.0, layer.z())),
		))
		.id()
}

/// Attaches `actor` to the group of `layer` in the world's `Layers`.
pub fn try_add_actor_on_layer(world: &mut World, actor: Entity, layer: Layer) -> Result<(), LayerError> {
	let group = world.get_resource::<Layers>()
		.ok_or(LayerError::UnknownLayer(layer))?
		.get(world, layer)?;

	actor::attach(world, actor, group);

	Ok(())
}
