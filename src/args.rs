use bevy::ecs::system::Resource;
use pico_args::{Error, Arguments};

const DEFAULT_CAM_WIDTH: f32 = 480.0;
const DEFAULT_CAM_HEIGHT: f32 = 800.0;

#[derive(Clone, Debug, Resource)]
pub struct Config {
	pub cam_width: f32,
	pub cam_height: f32,
	pub debug: bool,
}

impl Default for Config {
	fn default() -> Config {
		Config {
			cam_width: DEFAULT_CAM_WIDTH,
			cam_height: DEFAULT_CAM_HEIGHT,
			debug: false,
		}
	}
}

pub fn parse_args() -> Option<Config> {
	let mut pargs = Arguments::from_env();

	if pargs.contains("--help") {
		print_help();
		return None;
	}

	if pargs.contains(["-v", "--version"]) {
		print_version();
		return None;
	}

	let config = match inner_parse_args(&mut pargs) {
		Ok(config) => Some(config),
		Err(e) => {
			eprintln!("{}", e);
			return None;
		}
	};

	let remaining = pargs.finish();
	if !remaining.is_empty() {
		println!("Extraneous arguments provided: {:?}.", remaining);
		println!();
		print_try_help();
		return None;
	}

	config
}

fn inner_parse_args(pargs: &mut Arguments) -> Result<Config, Error> {
	let config = Config {
		debug: pargs.contains(["-d", "--debug"]),
		cam_width: pargs.opt_value_from_str(["-w", "--width"])?.unwrap_or(DEFAULT_CAM_WIDTH),
		cam_height: pargs.opt_value_from_str(["-h", "--height"])?.unwrap_or(DEFAULT_CAM_HEIGHT),
	};

	if config.cam_width <= 0.0 || config.cam_height <= 0.0 {
		return Err(Error::ArgumentParsingFailed {
			cause: format!("stage size must be positive, got {}x{}", config.cam_width, config.cam_height),
		});
	}

	Ok(config)
}

fn app_name() -> &'static str {
	env!("CARGO_PKG_NAME")
}

fn app_version() -> &'static str {
	env!("CARGO_PKG_VERSION")
}

fn print_usage() {
	println!("USAGE:");
	println!("  {} [OPTION]...", app_name());
}

const OPTIONS: &str = "\
FLAGS:
      --help          print this help menu
  -v, --version       print version information
  -d, --debug         start with the world inspector open (toggle with F12)

OPTIONS:
  -w, --width W       stage width in world units (default 480)
  -h, --height H      stage height in world units (default 800)
";

fn print_opts() {
	print!("{}", OPTIONS);
}

fn print_help() {
	println!("{}", app_name());
	println!();
	print_usage();
	println!();
	print_opts();
}

fn print_try_help() {
	print_usage();
	println!();
	println!("Try '{} --help' for more information.", app_name());
}

fn print_version() {
	println!("{} {}", app_name(), app_version());
}
