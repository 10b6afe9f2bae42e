use std::{env, thread, time::Duration};

use color_eyre::Result;
use gridsnake::{
    engine::models::{DirectionRequest, Snapshot, Status},
    strategies::{Greedy, Strategy},
};
use log::{debug, info};
use reqwest::{blocking::Client, Url};

const URL_VAR: &str = "GRIDSNAKE_URL";
const DEFAULT_URL: &str = "http://localhost:6502/";

struct WatchOptions {
    base:      Url,
    autopilot: bool,
}

impl WatchOptions {
    fn from_env() -> Result<Self> {
        let base = env::var(URL_VAR)
            .unwrap_or_else(|_| DEFAULT_URL.to_owned())
            .parse()?;
        let autopilot = env::args().skip(1).any(|arg| arg == "--autopilot");
        Ok(Self { base, autopilot })
    }
}

fn draw(snapshot: &Snapshot) {
    // clear the terminal and home the cursor
    print!("\x1b[2J\x1b[H");
    print!("{snapshot}");
    println!(
        "tick {}  length {}  heading {}",
        snapshot.tick,
        snapshot.len(),
        snapshot.direction
    );
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let options = WatchOptions::from_env()?;
    let client = Client::new();

    let status: Status = client
        .get(options.base.clone())
        .send()?
        .error_for_status()?
        .json()?;
    info!(
        "watching {} v{} ({}x{} grid, {} ms ticks)",
        status.name, status.version, status.grid_size, status.grid_size, status.tick_ms
    );

    let poll = Duration::from_millis((status.tick_ms / 4).max(10));
    let snapshot_url = options.base.join("snapshot")?;
    let direction_url = options.base.join("direction")?;

    let mut last_tick = None;
    loop {
        let snapshot: Snapshot = client
            .get(snapshot_url.clone())
            .send()?
            .error_for_status()?
            .json()?;

        if last_tick != Some(snapshot.tick) {
            draw(&snapshot);

            if options.autopilot {
                let direction = Greedy.get_movement(&snapshot)?;
                debug!("autopilot steering {direction}");
                client
                    .post(direction_url.clone())
                    .json(&DirectionRequest { direction })
                    .send()?
                    .error_for_status()?;
            }

            last_tick = Some(snapshot.tick);
        }

        thread::sleep(poll);
    }
}
