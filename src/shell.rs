//! Application shell switching between the main menu and the games.
//!
//! Views never load scenes themselves. They hand a [`Navigation`] back to
//! the shell, which builds the next view and drops the previous one.

use crate::host::SnakeHost;
use game::prelude::*;
use std::time::Duration;

/// Screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
	MainMenu,
	TicTacToe,
	Snake,
	Memory,
}

/// Request to change the active scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
	/// Open a scene with a fresh game.
	Open(Scene),

	/// Leave the current game for the main menu.
	BackToMenu,

	/// Close the application.
	Quit,
}

/// Active view with its game state.
#[derive(Debug)]
pub enum View {
	MainMenu,
	TicTacToe(TicTacToe),
	Snake(SnakeHost),
	Memory(MemoryGame),
}

impl View {
	/// Scene this view belongs to.
	pub fn scene(&self) -> Scene {
		match self {
			Self::MainMenu => Scene::MainMenu,
			Self::TicTacToe(_) => Scene::TicTacToe,
			Self::Snake(_) => Scene::Snake,
			Self::Memory(_) => Scene::Memory,
		}
	}
}

/// Settings every new game view is built from.
#[derive(Debug, Clone, Default)]
pub struct ShellSettings {
	pub snake: Settings,
	pub tick: Option<Duration>,
	pub memory: MemorySettings,
}

/// Owns the active view.
#[derive(Debug)]
pub struct Shell {
	view: View,
	settings: ShellSettings,
	running: bool,
}

impl Shell {
	/// Return a new [`Shell`] showing the main menu.
	pub fn new(settings: ShellSettings) -> Self {
		Self {
			view: View::MainMenu,
			settings,
			running: true,
		}
	}

	/// Apply a navigation request.
	///
	/// Fails if the requested game can't be built from the settings, the
	/// current view is kept in that case.
	pub fn navigate(&mut self, navigation: Navigation) -> game::Result<()> {
		match navigation {
			Navigation::Open(scene) => {
				self.view = self.build(scene)?;
				log::info!("opened {:?}", scene);
			}
			Navigation::BackToMenu => {
				self.view = View::MainMenu;
				log::info!("back to main menu");
			}
			Navigation::Quit => {
				self.running = false;
				log::info!("quitting");
			}
		}
		Ok(())
	}

	fn build(&self, scene: Scene) -> game::Result<View> {
		Ok(match scene {
			Scene::MainMenu => View::MainMenu,
			Scene::TicTacToe => View::TicTacToe(TicTacToe::new()),
			Scene::Snake => View::Snake(SnakeHost::new(
				self.settings.snake.clone(),
				self.settings.tick.unwrap_or(TickClock::INTERVAL),
			)?),
			Scene::Memory => View::Memory(MemoryGame::new(self.settings.memory.clone())?),
		})
	}

	/// Let `elapsed` frame time pass for the active view.
	pub fn update(&mut self, elapsed: Duration) {
		match &mut self.view {
			View::Snake(host) => {
				host.update(elapsed);
			}
			View::Memory(memory) => {
				memory.advance(elapsed);
			}
			View::MainMenu | View::TicTacToe(_) => (),
		}
	}

	/// Scene currently shown.
	pub fn scene(&self) -> Scene {
		self.view.scene()
	}

	/// Return the active view.
	pub fn view(&self) -> &View {
		&self.view
	}

	/// Return the active view for input forwarding.
	pub fn view_mut(&mut self) -> &mut View {
		&mut self.view
	}

	/// Return `false` once [`Navigation::Quit`] was requested.
	pub fn is_running(&self) -> bool {
		self.running
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::host::Key;

	fn shell() -> Shell {
		logger::init_test_logger();
		Shell::new(ShellSettings {
			snake: Settings {
				grid_size: (10, 10),
				initial_length: 3,
				seed: Some(1),
				..Default::default()
			},
			memory: MemorySettings {
				seed: Some(1),
				..Default::default()
			},
			..Default::default()
		})
	}

	#[test]
	fn starts_at_main_menu() {
		let shell = shell();

		assert_eq!(shell.scene(), Scene::MainMenu);
		assert!(shell.is_running());
	}

	#[test]
	fn opens_and_leaves_games() -> game::Result<()> {
		let mut shell = shell();

		for scene in [Scene::TicTacToe, Scene::Snake, Scene::Memory] {
			shell.navigate(Navigation::Open(scene))?;
			assert_eq!(shell.scene(), scene);
			shell.navigate(Navigation::BackToMenu)?;
			assert_eq!(shell.scene(), Scene::MainMenu);
		}

		shell.navigate(Navigation::Quit)?;
		assert!(!shell.is_running());
		Ok(())
	}

	#[test]
	fn reopening_starts_a_fresh_game() -> game::Result<()> {
		let mut shell = shell();
		shell.navigate(Navigation::Open(Scene::TicTacToe))?;
		if let View::TicTacToe(board) = shell.view_mut() {
			board.play(4);
		}

		shell.navigate(Navigation::BackToMenu)?;
		shell.navigate(Navigation::Open(Scene::TicTacToe))?;

		match shell.view() {
			View::TicTacToe(board) => assert_eq!(board.cell(4), None),
			view => panic!("unexpected view {:?}", view.scene()),
		}
		Ok(())
	}

	#[test]
	fn snake_view_asks_to_leave() -> game::Result<()> {
		let mut shell = shell();
		shell.navigate(Navigation::Open(Scene::Snake))?;

		let navigation = match shell.view_mut() {
			View::Snake(host) => host.key(Key::Escape),
			_ => None,
		};
		shell.navigate(navigation.unwrap_or(Navigation::Quit))?;

		assert_eq!(shell.scene(), Scene::MainMenu);
		Ok(())
	}

	#[test]
	fn update_drives_the_active_game() -> game::Result<()> {
		let mut shell = shell();
		shell.navigate(Navigation::Open(Scene::Snake))?;
		shell.update(TickClock::INTERVAL * 2);

		match shell.view() {
			View::Snake(host) => assert_eq!(host.sim().snake().head(), Coordinates::new(6, 5)),
			view => panic!("unexpected view {:?}", view.scene()),
		}

		shell.navigate(Navigation::Open(Scene::Memory))?;
		if let View::Memory(memory) = shell.view_mut() {
			memory.flip(0);
			memory.flip(1);
			assert!(!memory.can_flip());
		}
		shell.update(MemorySettings::REVEAL_DELAY);

		match shell.view() {
			View::Memory(memory) => assert!(memory.can_flip()),
			view => panic!("unexpected view {:?}", view.scene()),
		}
		Ok(())
	}

	#[test]
	fn bad_settings_keep_current_view() {
		let mut shell = Shell::new(ShellSettings {
			memory: MemorySettings {
				card_count: 5,
				..Default::default()
			},
			..Default::default()
		});

		assert!(shell.navigate(Navigation::Open(Scene::Memory)).is_err());
		assert_eq!(shell.scene(), Scene::MainMenu);
	}
}
