use bevy::prelude::*;

/// Every texture the game screen draws, loaded from `assets/gfx`.
#[derive(Clone, Debug, Default)]
pub struct Textures {
	pub background: Handle<Image>,
	pub planet: Handle<Image>,
	pub black_hole: Handle<Image>,
	pub ring_back: Handle<Image>,
	pub ring_front: Handle<Image>,
}

impl Textures {
	pub fn load(assets: &AssetServer) -> Self {
		Textures {
			background: assets.load("gfx/background.png"),
			planet: assets.load("gfx/planet.png"),
			black_hole: assets.load("gfx/blackhole.png"),
			ring_back: assets.load("gfx/ring1.png"),
			ring_front: assets.load("gfx/ring2.png"),
		}
	}
}
