use std::{fs::File, process::exit};

use anyhow::Result;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use snake::config::Config;
use snake::game::{Outcome, SnakeGame};
use snake::term::TermManager;

const LOG_FILE: &str = "snake.log";

fn main() {
    init_logging();

    let config = Config::default();
    log::info!("snake starting: {:?}", config);

    let mut game = SnakeGame::new(config, TermManager::new(), rand::thread_rng());
    let result = play(&mut game);

    // Always try to restore the terminal before printing anything.
    if let Err(err) = game.restore() {
        log::error!("{:#}", err);
    }

    match result {
        Ok(Outcome::Finished { score }) => log::info!("finished with score {}", score),
        Ok(Outcome::Aborted) => {
            println!("\nGame aborted.");
            exit(130);
        }
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            exit(1);
        }
    }
}

fn play<R: rand::Rng>(game: &mut SnakeGame<R>) -> Result<Outcome> {
    game.initialize()?;
    game.run()
}

fn init_logging() {
    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();

    if let Ok(log_file) = File::create(LOG_FILE) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}
