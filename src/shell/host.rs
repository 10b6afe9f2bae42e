use std::{convert::Infallible, sync::Arc, time::Duration};

use log::info;
use tokio::{
    sync::Mutex,
    time::{interval, Instant, MissedTickBehavior},
};
use warp::{Filter, Rejection, Reply};

use super::ticker::Ticker;
use crate::engine::{
    models::{DirectionAck, DirectionRequest, Status},
    GameState,
    TickReport,
};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// The one game of the process. Every `advance()` and direction request
/// goes through this lock.
pub type SharedGame = Arc<Mutex<GameState>>;

#[must_use]
pub fn shared(state: GameState) -> SharedGame {
    Arc::new(Mutex::new(state))
}

/// Feeds one frame's worth of time into `ticker` and advances the game if a
/// tick is due.
pub async fn pump(
    game: &SharedGame,
    ticker: &mut Ticker,
    dt: Duration,
) -> Option<TickReport> {
    if !ticker.tick(dt) {
        return None;
    }

    let mut game = game.lock().await;
    let report = game.advance();
    if report.ate_food {
        info!(
            "snake ate on tick {}, next food at {}",
            game.ticks(),
            game.food()
        );
    }
    if let Some(cut) = report.truncated {
        info!(
            "snake bit itself on tick {}, dropped {cut} cells, length now {}",
            game.ticks(),
            game.len()
        );
    }
    Some(report)
}

/// Drives the game forever, sampling the clock once per `frame`.
pub async fn run_ticker(game: SharedGame, frame: Duration) {
    let mut ticker = Ticker::new(game.lock().await.config().tick_interval);
    let mut frames = interval(frame);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        "ticking every {} ms, sampling every {} ms",
        ticker.interval().as_millis(),
        frame.as_millis()
    );

    let mut last = Instant::now();
    loop {
        frames.tick().await;
        let now = Instant::now();
        pump(&game, &mut ticker, now - last).await;
        last = now;
    }
}

fn with_game(
    game: SharedGame,
) -> impl Filter<Extract = (SharedGame,), Error = Infallible> + Clone {
    warp::any().map(move || game.clone())
}

pub fn routes(
    game: SharedGame,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let status = warp::get()
        .and(warp::path::end())
        .and(with_game(game.clone()))
        .and_then(get_status);

    let snapshot = warp::get()
        .and(warp::path("snapshot"))
        .and(warp::path::end())
        .and(with_game(game.clone()))
        .and_then(get_snapshot);

    let direction = warp::post()
        .and(warp::path("direction"))
        .and(warp::path::end())
        .and(warp::body::json())
        .and(with_game(game.clone()))
        .and_then(post_direction);

    let reset = warp::post()
        .and(warp::path("reset"))
        .and(warp::path::end())
        .and(with_game(game))
        .and_then(post_reset);

    status.or(snapshot).or(direction).or(reset)
}

async fn get_status(game: SharedGame) -> Result<impl Reply, Infallible> {
    let game = game.lock().await;
    let config = game.config();
    Ok(warp::reply::json(&Status {
        name:      NAME.to_owned(),
        version:   VERSION.to_owned(),
        author:    AUTHOR.to_owned(),
        grid_size: config.grid_size,
        tick_ms:   u64::try_from(config.tick_interval.as_millis())
            .unwrap_or(u64::MAX),
    }))
}

async fn get_snapshot(game: SharedGame) -> Result<impl Reply, Infallible> {
    Ok(warp::reply::json(&game.lock().await.snapshot()))
}

async fn post_direction(
    request: DirectionRequest,
    game: SharedGame,
) -> Result<impl Reply, Infallible> {
    let mut game = game.lock().await;

    // reversals are filtered here too, the game checks again anyway
    let accepted = !request.direction.is_opposite(game.direction())
        && game.submit_direction(request.direction);

    Ok(warp::reply::json(&DirectionAck {
        accepted,
        pending: game.pending_direction(),
    }))
}

async fn post_reset(game: SharedGame) -> Result<impl Reply, Infallible> {
    let mut game = game.lock().await;
    game.reset();
    info!("game reset, food at {}", game.food());
    Ok(warp::reply::json(&game.snapshot()))
}
