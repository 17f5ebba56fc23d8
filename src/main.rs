use bevy::{
  prelude::*,
  window::{PresentMode, WindowResolution},
};
use kinema::{config, core, input, player, scene};

fn main() {
  let config_str =
    std::fs::read_to_string("assets/config/game.config.toml").expect("Failed to read config file");
  let game_config: config::GameConfig = toml::from_str(&config_str).expect("Failed to parse config");

  let mut app = App::new();

  app.insert_resource(Time::<Fixed>::from_hz(60.0));

  app
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        resolution: WindowResolution::new(game_config.window.width, game_config.window.height),
        title: game_config.window.title.clone(),
        present_mode: PresentMode::AutoVsync,
        ..default()
      }),
      ..default()
    }))
    .add_plugins(config::ConfigPlugin)
    .add_plugins(core::CorePlugin)
    .add_plugins(input::InputPlugin)
    .add_plugins(player::PlayerPlugin)
    .add_plugins(scene::ScenePlugin);

  app.run();
}
