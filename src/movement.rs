use bevy::prelude::*;
use parry2d::na;

/// Center point of a round body in stage coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Reflect)]
pub struct Position {
	pub p: Vec2,
}

impl Position {
	pub const fn new(x: f32, y: f32) -> Self {
		Position { p: Vec2::new(x, y) }
	}

	pub fn to_iso(&self) -> na::Isometry2<f32> {
		na::Isometry2::new(na::Vector2::new(self.p.x, self.p.y), 0.0)
	}

	pub fn advance(&mut self, vel: &Velocity, delta: f32) {
		self.p += vel.v * delta;
	}
}

impl From<Vec2> for Position {
	fn from(p: Vec2) -> Self {
		Position{ p }
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Reflect)]
pub struct Velocity {
	pub v: Vec2,
}

impl Velocity {
	pub const ZERO: Self = Velocity { v: Vec2::ZERO };

	/// Velocity of magnitude `speed` pointing from `from` to `to`.
	pub fn toward(from: &Position, to: &Position, speed: f32) -> Self {
		Velocity { v: (to.p - from.p).normalize_or_zero() * speed }
	}
}

impl From<Vec2> for Velocity {
	fn from(v: Vec2) -> Self {
		Velocity{ v }
	}
}
