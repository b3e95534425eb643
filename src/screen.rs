use std::sync::Arc;
use bevy::{
	prelude::*,
	render::camera::ScalingMode,
	window::WindowFocused,
};
use crate::{
	actor,
	args::Config,
	controller::{self, GameController},
	input::sys_player_input,
	layer::Layer,
	layers::{self, LayerError, LayerHandler, Layers},
	swap_levels::{LevelSwap, SwapLevelsUseCase},
	textures::Textures,
	views::{BlackHole, Planet, Ring},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum ScreenPhase {
	#[default]
	NotShown,
	Shown,
	Resumed,
	Paused,
}

/// Marks the root entity the layer groups hang from.
#[derive(Component)]
pub struct Stage;

#[derive(Debug, Resource)]
pub struct GameScreen {
	phase: ScreenPhase,
	is_shown: bool,
	stage: Entity,
	size: Vec2,
	background: Handle<Image>,
}

impl GameScreen {
	pub fn phase(&self) -> ScreenPhase {
		self.phase
	}

	pub fn stage(&self) -> Entity {
		self.stage
	}
}

/// The screen's view of its own layers, handed to views and use cases.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScreenLayers;

impl LayerHandler for ScreenLayers {
	fn try_add_actor_on_layer(&self, world: &mut World, actor: Entity, layer: Layer) -> Result<(), LayerError> {
		layers::try_add_actor_on_layer(world, actor, layer)
	}
}

impl LevelSwap for ScreenLayers {
	fn game_object_groups(&self, world: &World) -> Vec<Entity> {
		world.get_resource::<Layers>()
			.map(|layers| layers.game_object_groups().collect())
			.unwrap_or_default()
	}

	fn swap_game_object_layers(&self, world: &mut World) {
		if !world.contains_resource::<Layers>() {
			warn!("No layers to swap");
			return;
		}

		world.resource_scope(|world: &mut World, mut layers: Mut<Layers>| {
			layers.rebuild_game_object_layers(world);
		});
	}

	fn attach_layer_groups(&self, world: &mut World) {
		attach_layer_groups(world);
	}
}

/// Builds the stage, its layers, the views and the controller.
pub fn create(world: &mut World, config: &Config, textures: &Textures) {
	let size = Vec2::new(config.cam_width, config.cam_height);

	let stage = world.spawn((
			Stage,
			Name::new("Stage"),
			SpatialBundle::from_transform(Transform::from_xyz(-size.x / 2.0, -size.y / 2.0, 0.0)),
		))
		.id();

	let layers = Layers::spawn(world, size);
	world.insert_resource(layers);

	let layer_handler: Arc<dyn LayerHandler> = Arc::new(ScreenLayers);
	let planet = Planet::new(world, layer_handler.clone(), textures.planet.clone());
	let ring = Ring::new(
		world,
		layer_handler.clone(),
		textures.ring_front.clone(),
		textures.ring_back.clone(),
	);
	let black_hole = BlackHole::new(world, layer_handler, textures.black_hole.clone());

	let swap_levels = SwapLevelsUseCase::new(planet.clone(), Box::new(ScreenLayers));

	world.insert_resource(GameController::new(size, planet, ring, black_hole, swap_levels));
	world.insert_resource(GameScreen {
		phase: ScreenPhase::NotShown,
		is_shown: false,
		stage,
		size,
		background: textures.background.clone(),
	});

	info!("Game screen created ({}x{})", size.x, size.y);
}

/// Runs once per screen: adds the background and starts the controller.
pub fn prepare_stage(world: &mut World) {
	let (background, size) = {
		let screen = unwrap!(world.get_resource::<GameScreen>(), {
			warn!("prepare_stage before the screen was created");
			return;
		});
		if screen.is_shown {
			return;
		}
		(screen.background.clone(), screen.size)
	};

	add_background_image(world, background, size);
	controller::start(world);

	if let Some(mut screen) = world.get_resource_mut::<GameScreen>() {
		screen.is_shown = true;
		screen.phase = ScreenPhase::Shown;
	}
}

pub fn show(world: &mut World) {
	prepare_stage(world);
	resume(world);
}

pub fn resume(world: &mut World) {
	if let Some(mut screen) = world.get_resource_mut::<GameScreen>() {
		screen.phase = ScreenPhase::Resumed;
	}

	attach_layer_groups(world);
}

pub fn pause(world: &mut World) {
	if let Some(mut screen) = world.get_resource_mut::<GameScreen>() {
		if screen.is_shown {
			screen.phase = ScreenPhase::Paused;
		}
	}
}

fn is_resumed(world: &World) -> bool {
	world.get_resource::<GameScreen>()
		.map_or(false, |s| s.phase == ScreenPhase::Resumed)
}

pub fn render(world: &mut World, delta: f32) {
	if is_resumed(world) {
		controller::update(world, delta);
	}
}

/// `at` is in stage coordinates.
pub fn touch(world: &mut World, at: Vec2) {
	if is_resumed(world) {
		controller::touch(world, at);
	}
}

/// Hangs every layer group under the stage, in layer order. Groups already
/// on the stage are not added twice.
fn attach_layer_groups(world: &mut World) {
	let stage = unwrap!(world.get_resource::<GameScreen>().map(GameScreen::stage), {
		warn!("No stage to attach layers to");
		return;
	});
	let layers = unwrap!(world.get_resource::<Layers>(), {
		warn!("No layers to attach");
		return;
	});
	let groups: Vec<Entity> = layers.groups().collect();

	let mut root = unwrap!(world.get_entity_mut(stage), {
		warn!("Stage {:?} is gone", stage);
		return;
	});
	root.push_children(&groups);
}

fn add_background_image(world: &mut World, texture: Handle<Image>, size: Vec2) {
	let image = actor::spawn_image(world, "Background", texture, size);

	ScreenLayers.add_actor_on_layer(world, image, Layer::Background);
}

/// Keeps the whole stage in view at any window size, letterboxing the
/// leftover axis.
pub fn stage_camera(config: &Config) -> Camera2dBundle {
	let mut camera = Camera2dBundle::default();
	camera.projection.scaling_mode = ScalingMode::AutoMin {
		min_width: config.cam_width,
		min_height: config.cam_height,
	};
	camera
}

fn sys_spawn_camera(mut commands: Commands, config: Option<Res<Config>>) {
	let config = config.map(|c| c.clone()).unwrap_or_default();

	commands.spawn((Name::new("StageCamera"), stage_camera(&config)));
}

fn sys_create_screen(world: &mut World) {
	let config = world.get_resource::<Config>()
		.cloned()
		.unwrap_or_default();
	let textures = unwrap!(world.get_resource::<AssetServer>().map(Textures::load), {
		error!("No asset server, can't load textures");
		return;
	});

	create(world, &config, &textures);
}

fn sys_show_screen(world: &mut World) {
	show(world);
}

fn sys_window_focus(mut commands: Commands, mut events: EventReader<WindowFocused>) {
	for event in events.read() {
		if event.focused {
			commands.add(resume);
		} else {
			commands.add(pause);
		}
	}
}

fn sys_render(world: &mut World) {
	let delta = world.resource::<Time>().delta_seconds();

	render(world, delta);
}

pub struct GameScreenPlugin;

impl Plugin for GameScreenPlugin {
	fn build(&self, app: &mut App) {
		app
			.register_type::<actor::Actor>()
			.add_systems(Startup, (
				sys_spawn_camera,
				sys_create_screen,
				sys_show_screen,
			).chain())
			.add_systems(Update, (
				sys_window_focus,
				sys_player_input,
				sys_render,
			).chain());
	}
}

#[cfg(test)]
pub(crate) fn test_world() -> World {
	let mut world = World::new();
	create(&mut world, &Config::default(), &Textures::default());
	world
}

#[cfg(test)]
mod tests {
	use super::*;

	fn screen(world: &World) -> &GameScreen {
		world.resource::<GameScreen>()
	}

	fn stage_children(world: &World) -> Vec<Entity> {
		world.get::<Children>(screen(world).stage())
			.map(|c| c.to_vec())
			.unwrap_or_default()
	}

	fn layer_children(world: &World, layer: Layer) -> Vec<Entity> {
		let group = world.resource::<Layers>().get(world, layer).unwrap();
		world.get::<Children>(group)
			.map(|c| c.to_vec())
			.unwrap_or_default()
	}

	fn all_groups(world: &World) -> Vec<Entity> {
		world.resource::<Layers>().groups().collect()
	}

	#[test]
	fn camera_fits_stage() {
		let config = Config { cam_width: 320.0, cam_height: 640.0, debug: false };

		let camera = stage_camera(&config);

		match camera.projection.scaling_mode {
			ScalingMode::AutoMin { min_width, min_height } => {
				assert_eq!(min_width, 320.0);
				assert_eq!(min_height, 640.0);
			},
			other => panic!("unexpected scaling mode {:?}", other),
		}
	}

	#[test]
	fn created_but_not_shown() {
		let world = test_world();

		assert_eq!(screen(&world).phase(), ScreenPhase::NotShown);
		assert!(stage_children(&world).is_empty());
		assert!(layer_children(&world, Layer::Background).is_empty());
		assert!(!world.resource::<GameController>().is_started());
	}

	#[test]
	fn show_prepares_and_resumes() {
		let mut world = test_world();

		show(&mut world);

		assert_eq!(screen(&world).phase(), ScreenPhase::Resumed);
		assert_eq!(stage_children(&world), all_groups(&world));
		assert_eq!(layer_children(&world, Layer::Background).len(), 1);
		assert!(world.resource::<GameController>().is_started());
	}

	#[test]
	fn background_fills_the_stage() {
		let mut world = test_world();
		show(&mut world);

		let bg = layer_children(&world, Layer::Background)[0];

		assert_eq!(actor::size(&world, bg), Vec2::new(480.0, 800.0));
		assert_eq!(actor::position(&world, bg), Vec2::ZERO);
	}

	#[test]
	fn prepare_stage_runs_once() {
		let mut world = test_world();

		prepare_stage(&mut world);
		prepare_stage(&mut world);

		assert_eq!(layer_children(&world, Layer::Background).len(), 1);
		assert_eq!(screen(&world).phase(), ScreenPhase::Shown);
	}

	#[test]
	fn resume_is_idempotent() {
		let mut world = test_world();
		show(&mut world);

		resume(&mut world);
		resume(&mut world);

		assert_eq!(stage_children(&world).len(), Layer::COUNT);
		assert_eq!(stage_children(&world), all_groups(&world));
	}

	#[test]
	fn render_only_while_resumed() {
		let mut world = test_world();
		show(&mut world);

		render(&mut world, 0.25);
		assert_eq!(world.resource::<GameController>().elapsed(), 0.25);

		pause(&mut world);
		assert_eq!(screen(&world).phase(), ScreenPhase::Paused);
		render(&mut world, 0.25);
		assert_eq!(world.resource::<GameController>().elapsed(), 0.25);

		resume(&mut world);
		render(&mut world, 0.25);
		assert_eq!(world.resource::<GameController>().elapsed(), 0.5);
	}

	#[test]
	fn pause_before_show_keeps_not_shown() {
		let mut world = test_world();

		pause(&mut world);

		assert_eq!(screen(&world).phase(), ScreenPhase::NotShown);
	}

	#[test]
	fn swap_keeps_static_layers_and_reattaches() {
		let mut world = test_world();
		show(&mut world);
		let old_groups = ScreenLayers.game_object_groups(&world);
		let background = world.resource::<Layers>().get(&world, Layer::Background).unwrap();
		let bg_children = layer_children(&world, Layer::Background);

		ScreenLayers.swap_game_object_layers(&mut world);
		ScreenLayers.attach_layer_groups(&mut world);

		let new_groups = ScreenLayers.game_object_groups(&world);
		for group in &old_groups {
			assert!(!new_groups.contains(group));
			assert!(world.get_entity(*group).is_none());
		}
		assert_eq!(world.resource::<Layers>().get(&world, Layer::Background), Ok(background));
		assert_eq!(layer_children(&world, Layer::Background), bg_children);
		assert_eq!(stage_children(&world), all_groups(&world));
		for layer in Layer::GAME_OBJECTS {
			assert!(layer_children(&world, layer).is_empty());
		}
	}

	#[test]
	fn unknown_layer_is_logged_not_fatal() {
		let mut world = test_world();
		let orphan = actor::spawn_image(&mut world, "orphan", Handle::default(), Vec2::ONE);
		world.remove_resource::<Layers>();

		ScreenLayers.add_actor_on_layer(&mut world, orphan, Layer::Objects);

		assert!(!actor::is_attached(&world, orphan));
		assert_eq!(
			ScreenLayers.try_add_actor_on_layer(&mut world, orphan, Layer::Objects),
			Err(LayerError::UnknownLayer(Layer::Objects)),
		);
	}

	#[test]
	fn touch_ignored_while_paused() {
		let mut world = test_world();
		show(&mut world);
		render(&mut world, 2.0);
		let hole = world.resource::<GameController>().hole_position();

		pause(&mut world);
		touch(&mut world, hole.p);

		assert_eq!(world.resource::<GameController>().hole_position(), hole);
	}
}
