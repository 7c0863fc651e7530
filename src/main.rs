//! Pocket Arcade headless driver
//!
//! Opens the JSON store given as the first argument (default
//! `pocket_arcade.json`), plays one reaction game with a scripted tapper and
//! one scripted Gomoku game, then logs the stored statistics.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use pocket_arcade::consts::SIM_DT;
use pocket_arcade::gomoku::GomokuConfig;
use pocket_arcade::{
    FileStorage, FlappyEngine, GomokuEngine, HapticsService, PersistenceService, Settings,
    StatsStore,
};

const DEFAULT_STORE: &str = "pocket_arcade.json";
const PLAY_WIDTH: f32 = 400.0;
const PLAY_HEIGHT: f32 = 600.0;
/// Frames between scripted taps
const TAP_EVERY: u32 = 24;
/// Two simulated minutes
const MAX_FRAMES: u32 = 60 * 120;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pocket Arcade (headless) starting...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STORE.to_string());
    let storage = FileStorage::open(&path)?;
    let settings = Settings::load(&storage);
    let stats = Rc::new(PersistenceService::new(storage));
    let haptics = Rc::new(HapticsService::new(settings.haptics_enabled));

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    log::info!("Reaction game seed: {}", seed);

    let mut flappy = FlappyEngine::new(seed, settings.flappy_difficulty, stats.clone(), haptics.clone());
    flappy.setup_play_area(PLAY_WIDTH, PLAY_HEIGHT);
    flappy.handle_input();
    let mut frames = 0;
    while flappy.is_running() && frames < MAX_FRAMES {
        flappy.advance(SIM_DT);
        frames += 1;
        if frames % TAP_EVERY == 0 {
            flappy.handle_input();
        }
    }
    log::info!("{} after {} frames", flappy.status_message(), frames);

    let board_size = settings.effective_board_size();
    let mut gomoku = GomokuEngine::new(GomokuConfig::with_size(board_size), stats.clone(), haptics);
    for col in 0..4 {
        gomoku.place_stone(0, col);
        gomoku.place_stone(1, col);
    }
    gomoku.place_stone(0, 4);
    log::info!("{} ({} moves)", gomoku.status_text(), gomoku.history().len());
    log::debug!("Final board:\n{}", gomoku.board());

    settings.save(stats.storage())?;

    let flappy_stats = stats.flappy_stats();
    let gomoku_stats = stats.gomoku_stats();
    log::info!(
        "Reaction: best {}, {} games, average {:.1}",
        flappy_stats.best_score,
        flappy_stats.games_played,
        flappy_stats.average_score()
    );
    log::info!(
        "Gomoku: {} games, black {:.0}%, white {:.0}%, {} draws",
        gomoku_stats.games_played,
        gomoku_stats.black_win_rate(),
        gomoku_stats.white_win_rate(),
        gomoku_stats.draws
    );
    log::info!("Stats stored in {}", stats.storage().path().display());
    Ok(())
}
