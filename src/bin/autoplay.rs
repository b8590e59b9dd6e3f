//! Run the snake game headless, steered by the autopilot.

use game::prelude::*;
use logger::*;
use simple_games::{autopilot, host::SnakeHost};
use std::{
	thread,
	time::{Duration, Instant},
};

/// Default cap on the amount of ticks.
const DEFAULT_TICKS: u64 = 10_000;

fn main() {
	init_logger();
	let settings = match init_settings(init_cli()) {
		Ok(settings) => settings,
		Err(e) => {
			error!("Invalid arguments: {}", e);
			std::process::exit(2);
		}
	};

	if let Err(e) = run(settings) {
		error!("Error while running the game: {}", e);
		std::process::exit(1);
	}
}

fn init_cli() -> clap::ArgMatches<'static> {
	use clap::{App, Arg};

	App::new("Snake autoplay")
		.about("Plays the snake game without a player")
		.arg(
			Arg::with_name("grid_size")
				.short("g")
				.long("grid-size")
				.value_name("SIZE")
				.takes_value(true)
				.help(&format!(
					"Specifies game grid size. Default is {}x{}",
					Settings::GRID_SIZE.0,
					Settings::GRID_SIZE.1
				)),
		)
		.arg(
			Arg::with_name("length")
				.short("l")
				.long("length")
				.value_name("NUMBER")
				.takes_value(true)
				.help(&format!(
					"Specifies initial snake length. Default is {}",
					Settings::INITIAL_LENGTH
				)),
		)
		.arg(
			Arg::with_name("delay")
				.short("d")
				.long("delay")
				.value_name("DURATION")
				.takes_value(true)
				.help(&format!(
					"Specifies delay between ticks. Default is {:?}",
					TickClock::INTERVAL
				)),
		)
		.arg(
			Arg::with_name("seed")
				.short("s")
				.long("seed")
				.value_name("NUMBER")
				.takes_value(true)
				.help("Seeds food placement and the autopilot"),
		)
		.arg(
			Arg::with_name("ticks")
				.short("t")
				.long("ticks")
				.value_name("NUMBER")
				.takes_value(true)
				.help(&format!(
					"Stops after this many ticks. Default is {}",
					DEFAULT_TICKS
				)),
		)
		.arg(
			Arg::with_name("print")
				.short("p")
				.long("print")
				.help("Prints the board after every tick"),
		)
		.arg(
			Arg::with_name("json")
				.short("j")
				.long("json")
				.help("Prints boards as json instead of text"),
		)
		.get_matches()
}

struct RunSettings {
	game: Settings,
	delay: Duration,
	ticks: u64,
	print: bool,
	json: bool,
}

fn init_settings(matches: clap::ArgMatches) -> game::Result<RunSettings> {
	let grid_size = match matches.value_of("grid_size") {
		Some(val) => parse_grid_size(val)?,
		None => Settings::GRID_SIZE,
	};
	let initial_length = match matches.value_of("length") {
		Some(val) => val.parse::<usize>()?,
		None => Settings::INITIAL_LENGTH,
	};
	let seed = match matches.value_of("seed") {
		Some(val) => Some(val.parse::<u64>()?),
		None => None,
	};

	Ok(RunSettings {
		game: Settings {
			grid_size,
			initial_length,
			seed,
			..Default::default()
		},
		delay: match matches.value_of("delay") {
			Some(val) => val.parse::<humantime::Duration>()?.into(),
			None => TickClock::INTERVAL,
		},
		ticks: match matches.value_of("ticks") {
			Some(val) => val.parse::<u64>()?,
			None => DEFAULT_TICKS,
		},
		print: matches.is_present("print"),
		json: matches.is_present("json"),
	})
}

/// Parse `WxH` into (width, height).
fn parse_grid_size(val: &str) -> game::Result<(usize, usize)> {
	let (width, height) = val
		.split_once('x')
		.ok_or_else(|| format!("grid size \"{}\" is not in WxH form", val))?;
	Ok((width.parse()?, height.parse()?))
}

fn run(settings: RunSettings) -> game::Result<()> {
	use rand::{rngs::StdRng, SeedableRng};

	let mut rng = match settings.game.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	};
	let mut host = SnakeHost::new(settings.game, settings.delay)?;
	let mut ticks = 0;
	let mut last_frame = Instant::now();

	info!("Starting autoplay with {:?} between ticks", settings.delay);

	while !host.sim().is_game_over() && ticks < settings.ticks {
		thread::sleep(settings.delay);

		let now = Instant::now();
		let outcomes = host.update_steered(now - last_frame, |sim| {
			Some(autopilot::choose_direction(sim, &mut rng))
		});
		last_frame = now;

		for outcome in &outcomes {
			debug!("tick {}: {:?}", ticks, outcome);
			ticks += 1;
		}
		if settings.print && !outcomes.is_empty() {
			print_board(&host, settings.json)?;
		}
	}

	info!(
		"Finished after {} ticks. {}, length {}",
		ticks,
		host.score_text(),
		host.sim().snake().len()
	);
	Ok(())
}

fn print_board(host: &SnakeHost, json: bool) -> game::Result<()> {
	let snapshot = host.snapshot();
	if json {
		println!("{}", String::from_utf8(snapshot.as_bytes()?)?);
	} else {
		println!("{}\n{}", host.score_text(), snapshot);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn grid_size_parsing() {
		assert_eq!(parse_grid_size("12x8").unwrap(), (12, 8));
		assert!(parse_grid_size("12").is_err());
		assert!(parse_grid_size("ax8").is_err());
	}
}
