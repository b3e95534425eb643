use bevy::prelude::*;
use crate::movement::Position;
use parry2d::{
	query::{DefaultQueryDispatcher, QueryDispatcher},
	shape::SharedShape,
};

pub struct Collidable {
	pub shape: SharedShape,
}

impl Collidable {
	pub fn circle(r: f32) -> Self {
		SharedShape::ball(r).into()
	}
}

impl From<SharedShape> for Collidable {
	fn from(shape: SharedShape) -> Collidable {
		Collidable { shape }
	}
}

#[derive(Debug)]
pub struct Contact {
	pub pos: Vec2,
	pub dist: f32,
}

/// Results are from the perspective of `col1`. `dist` is the penetration
/// depth, so it is positive for overlapping shapes.
pub fn contact(
	col1: &Collidable, pos1: &Position, col2: &Collidable, pos2: &Position
) -> Option<Contact> {
	let res = DefaultQueryDispatcher{}.contact(
		&Position::from(pos2.p - pos1.p).to_iso(),
		col1.shape.as_ref(),
		col2.shape.as_ref(),
		0.0,
	);

	let contact = match res {
		Ok(Some(c)) => c,
		Ok(None) => return None,
		Err(e) => {
			warn!("{}", e);
			return None;
		},
	};

	Some(Contact {
		pos: Vec2::new(contact.point1.x, contact.point1.y) + pos1.p,
		dist: -contact.dist,
	})
}

pub fn touching(col1: &Collidable, pos1: &Position, col2: &Collidable, pos2: &Position) -> bool {
	contact(col1, pos1, col2, pos2)
		.map_or(false, |c| c.dist >= 0.0)
}
