// Maze runner: walk a 20x20 maze from the start marker to the exit, or let the solver light the way.
// Controls: W/A/S/D or arrow keys (immediate response). Q to quit the current round.
// Tiles: '#' wall, '.' hall, 'S' start, 'E' exit, '*' solver trail, '@' player.

use clap::{Arg, Command};
use maze_runner::config::GameConfig;
use maze_runner::console_interface::{KeyboardEvents, StdinPrompter, TerminalRenderer};
use maze_runner::session::play_rounds;
use std::path::Path;

fn make_options_parser() -> Command {
    Command::new("maze_runner")
        .version("v0.1.0")
        .about("Interactive 20x20 maze game with a depth-first solver")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("JSON configuration file")
                .default_value("maze_config.json"),
        )
        .arg(
            Arg::new("log-file")
                .short('l')
                .long("log-file")
                .value_name("FILE")
                .help("Where log output is written, overrides the configuration"),
        )
}

fn init_logging(log_file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(log_file)?;

    let env = env_logger::Env::new()
        .filter_or("MAZE_LOG", "info")
        .write_style("MAZE_LOG_STYLE");
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = make_options_parser().get_matches();

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("maze_config.json");
    let config_path = Path::new(config_path);
    let (mut config, source) = GameConfig::load(config_path);
    if let Some(log_file) = matches.get_one::<String>("log-file") {
        config.log_file = log_file.clone();
    }

    init_logging(&config.log_file)?;
    source.log(config_path);
    log::debug!("configuration: {:?}", config);

    let mut prompter = StdinPrompter;
    let mut events = KeyboardEvents;
    let mut renderer = TerminalRenderer::new(config.title.clone());

    let outcomes = play_rounds(&config, &mut prompter, &mut events, &mut renderer)?;
    log::info!("played {} rounds", outcomes.len());

    Ok(())
}
