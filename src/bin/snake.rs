use std::time::Duration;

use color_eyre::Result;
use gridsnake::{
    engine::GameState,
    shell::{routes, run_ticker, shared, Settings},
};
use log::info;
use warp::{http::Method, Filter};

const NAME: &str = env!("CARGO_PKG_NAME");

/// How often the tick loop looks at the clock.
const FRAME: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let settings = Settings::from_env()?;
    let config = settings.game_config();
    let state = match settings.seed {
        Some(seed) => GameState::with_seed(config, seed)?,
        None => GameState::new(config)?,
    };

    info!(
        "{n}x{n} grid, snake at {}, food at {}",
        state.head(),
        state.food(),
        n = state.config().grid_size,
    );

    let game = shared(state);
    tokio::spawn(run_ticker(game.clone(), FRAME));

    let cors = warp::cors()
        .allow_method(Method::GET)
        .allow_method(Method::POST)
        .allow_header("content-type")
        .allow_any_origin();

    let logging = warp::log(NAME);

    let api = routes(game).with(cors).with(logging);

    info!("listening on port {}", settings.port);
    warp::serve(api).run(([0, 0, 0, 0], settings.port)).await;

    Ok(())
}
