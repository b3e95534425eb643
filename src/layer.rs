use bevy::reflect::Reflect;

/// Drawing layers, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum Layer {
	Background,
	RingBack,
	Objects,
	RingFront,
	Foreground,
}

impl Layer {
	pub const COUNT: usize = 5;

	pub const ALL: [Layer; Layer::COUNT] = [
		Layer::Background,
		Layer::RingBack,
		Layer::Objects,
		Layer::RingFront,
		Layer::Foreground,
	];

	/// Layers that are thrown away and recreated on a level swap. The ring
	/// halves sit on static layers so they survive it.
	pub const GAME_OBJECTS: [Layer; 1] = [
		Layer::Objects,
	];

	pub const fn is_game_objects_layer(self) -> bool {
		matches!(self, Layer::Objects)
	}

	pub const fn index(self) -> usize {
		self as usize
	}

	pub const fn z(self) -> f32 {
		match self {
			Layer::Background => 1.0,
			Layer::RingBack => 2.0,
			Layer::Objects => 3.0,
			Layer::RingFront => 4.0,
			Layer::Foreground => 100.0,
		}
	}
}
