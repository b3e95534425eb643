use bevy::{
	prelude::*,
	sprite::Anchor,
};

/// A single drawable image. Positions refer to the bottom-left corner.
#[derive(Component, Clone, Copy, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct Actor {
	pub size: Vec2,
}

/// Spawns a detached, hidden image actor.
pub fn spawn_image(world: &mut World, name: &str, texture: Handle<Image>, size: Vec2) -> Entity {
	world.spawn((
			Actor { size },
			Name::new(name.to_string()),
			SpriteBundle {
				sprite: Sprite {
					custom_size: Some(size),
					anchor: Anchor::BottomLeft,
					..default()
				},
				texture,
				visibility: Visibility::Hidden,
				..default()
			},
		))
		.id()
}

pub fn attach(world: &mut World, actor: Entity, group: Entity) {
	if world.get_entity(actor).is_none() {
		warn!("Can't attach missing actor {:?}", actor);
		return;
	}

	{
		let mut parent = unwrap!(world.get_entity_mut(group), {
			warn!("Can't attach {:?} to missing group {:?}", actor, group);
			return;
		});
		parent.push_children(&[actor]);
	}

	if let Some(mut vis) = world.get_mut::<Visibility>(actor) {
		*vis = Visibility::Inherited;
	}
}

/// Removes the actor from whatever group holds it.
pub fn detach(world: &mut World, actor: Entity) {
	let mut entity = unwrap!(world.get_entity_mut(actor), { return; });
	entity.remove_parent();
	entity.insert(Visibility::Hidden);
}

pub fn is_attached(world: &World, actor: Entity) -> bool {
	world.get::<Parent>(actor).is_some()
}

pub fn parent(world: &World, actor: Entity) -> Option<Entity> {
	world.get::<Parent>(actor).map(|p| p.get())
}

pub fn position(world: &World, actor: Entity) -> Vec2 {
	world.get::<Transform>(actor)
		.map(|t| t.translation.truncate())
		.unwrap_or_default()
}

pub fn set_position(world: &mut World, actor: Entity, x: f32, y: f32) {
	if let Some(mut t) = world.get_mut::<Transform>(actor) {
		t.translation.x = x;
		t.translation.y = y;
	}
}

pub fn size(world: &World, actor: Entity) -> Vec2 {
	world.get::<Actor>(actor)
		.map(|a| a.size)
		.unwrap_or_default()
}

pub fn set_size(world: &mut World, actor: Entity, width: f32, height: f32) {
	let size = Vec2::new(width, height);

	if let Some(mut a) = world.get_mut::<Actor>(actor) {
		a.size = size;
	}
	if let Some(mut sprite) = world.get_mut::<Sprite>(actor) {
		sprite.custom_size = Some(size);
	}
}
