use bevy::prelude::*;
use crate::{
	collide::{touching, Collidable},
	movement::{Position, Velocity},
	swap_levels::SwapLevelsUseCase,
	views::{BlackHole, Planet, Ring, View},
};

const START_RADIUS: f32 = 40.0;
const GROWTH_PER_SEC: f32 = 6.0;
// fraction of the stage width the planet must fill to finish a level
const MAX_RADIUS_FRACTION: f32 = 0.4;

const HOLE_RADIUS: f32 = 28.0;
const HOLE_BASE_SPEED: f32 = 30.0;
const HOLE_SPEED_PER_LEVEL: f32 = 10.0;

const RING_SCALE: f32 = 1.6;
const RING_FLATNESS: f32 = 0.25;

const TOUCH_SLOP: f32 = 1.5;

/// Drives the planet, its ring and the black hole once per frame.
#[derive(Resource)]
pub struct GameController {
	stage_size: Vec2,
	planet: Planet,
	ring: Ring,
	black_hole: BlackHole,
	swap_levels: SwapLevelsUseCase,
	started: bool,
	level: u32,
	elapsed: f32,
	planet_radius: f32,
	hole_pos: Position,
}

impl GameController {
	pub fn new(
		stage_size: Vec2,
		planet: Planet,
		ring: Ring,
		black_hole: BlackHole,
		swap_levels: SwapLevelsUseCase,
	) -> Self {
		GameController {
			stage_size,
			planet,
			ring,
			black_hole,
			swap_levels,
			started: false,
			level: 1,
			elapsed: 0.0,
			planet_radius: START_RADIUS,
			hole_pos: Position::default(),
		}
	}

	pub fn level(&self) -> u32 { self.level }
	pub fn elapsed(&self) -> f32 { self.elapsed }
	pub fn planet_radius(&self) -> f32 { self.planet_radius }
	pub fn hole_position(&self) -> Position { self.hole_pos }
	pub fn is_started(&self) -> bool { self.started }

	pub fn start(&mut self, world: &mut World) {
		if self.started {
			warn!("Controller already started");
			return;
		}

		self.started = true;
		self.begin_level(world);
	}

	pub fn update(&mut self, world: &mut World, delta: f32) {
		if !self.started {
			return;
		}

		self.elapsed += delta;
		self.planet_radius = f32::min(self.planet_radius + GROWTH_PER_SEC * delta, self.max_radius());

		let center = self.planet_center();
		let vel = Velocity::toward(&self.hole_pos, &center, self.hole_speed());
		self.hole_pos.advance(&vel, delta);

		if self.hole_reached_planet() {
			info!("Planet swallowed on level {}", self.level);
			self.planet_radius = START_RADIUS;
			self.hole_pos = self.spawn_point();
		}

		if self.planet_radius >= self.max_radius() {
			self.next_level(world);
			return;
		}

		self.layout(world);
	}

	/// `at` is in stage coordinates. A touch on the black hole sends it back
	/// to where it spawned.
	pub fn touch(&mut self, world: &mut World, at: Vec2) {
		if !self.started {
			return;
		}

		if at.distance(self.hole_pos.p) <= HOLE_RADIUS * TOUCH_SLOP {
			debug!("Black hole pushed back from {:?}", self.hole_pos.p);
			self.hole_pos = self.spawn_point();
			self.layout(world);
		}
	}

	fn next_level(&mut self, world: &mut World) {
		info!("Level {} complete after {:.1}s", self.level, self.elapsed);

		self.level += 1;
		self.swap_levels.execute(world);
		self.begin_level(world);
	}

	fn begin_level(&mut self, world: &mut World) {
		self.planet_radius = START_RADIUS;
		self.hole_pos = self.spawn_point();

		self.planet.show(world);
		self.ring.show(world);
		self.black_hole.show(world);
		self.layout(world);

		info!("Level {} started", self.level);
	}

	fn layout(&self, world: &mut World) {
		let c = self.planet_center().p;
		let r = self.planet_radius;

		self.planet.resize(world, 2.0 * r, 2.0 * r);
		self.planet.set_position(world, c.x - r, c.y - r);

		let ring_w = 2.0 * r * RING_SCALE;
		let ring_h = ring_w * RING_FLATNESS;
		self.ring.resize(world, ring_w, ring_h);
		self.ring.set_position(world, c.x - ring_w / 2.0, c.y);

		let h = self.hole_pos.p;
		self.black_hole.resize(world, 2.0 * HOLE_RADIUS, 2.0 * HOLE_RADIUS);
		self.black_hole.set_position(world, h.x - HOLE_RADIUS, h.y - HOLE_RADIUS);
	}

	fn hole_reached_planet(&self) -> bool {
		touching(
			&Collidable::circle(self.planet_radius),
			&self.planet_center(),
			&Collidable::circle(HOLE_RADIUS),
			&self.hole_pos,
		)
	}

	fn planet_center(&self) -> Position {
		Position::from(self.stage_size / 2.0)
	}

	fn max_radius(&self) -> f32 {
		self.stage_size.x * MAX_RADIUS_FRACTION
	}

	fn hole_speed(&self) -> f32 {
		HOLE_BASE_SPEED + HOLE_SPEED_PER_LEVEL * (self.level - 1) as f32
	}

	// corners, rotating clockwise from top left with each level
	fn spawn_point(&self) -> Position {
		let (w, h) = (self.stage_size.x, self.stage_size.y);
		let corners = [
			Position::new(HOLE_RADIUS, h - HOLE_RADIUS),
			Position::new(w - HOLE_RADIUS, h - HOLE_RADIUS),
			Position::new(w - HOLE_RADIUS, HOLE_RADIUS),
			Position::new(HOLE_RADIUS, HOLE_RADIUS),
		];

		corners[(self.level as usize - 1) % corners.len()]
	}
}

fn with_controller(world: &mut World, f: impl FnOnce(&mut GameController, &mut World)) {
	if !world.contains_resource::<GameController>() {
		warn!("No game controller");
		return;
	}

	world.resource_scope(|world: &mut World, mut controller: Mut<GameController>| {
		f(&mut *controller, world);
	});
}

pub fn start(world: &mut World) {
	with_controller(world, |c, world| c.start(world));
}

pub fn update(world: &mut World, delta: f32) {
	with_controller(world, |c, world| c.update(world, delta));
}

pub fn touch(world: &mut World, at: Vec2) {
	with_controller(world, |c, world| c.touch(world, at));
}
