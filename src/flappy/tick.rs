//! Fixed timestep simulation tick
//!
//! Advances the reaction game by exactly one step. Order within a tick:
//! gravity, scroll, despawn, scoring, collision, spawn.

use super::collision::check_collision;
use super::state::{FlappyState, GamePhase};

/// Things that happened during a tick, for the engine shell to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle was passed; `score` is the new total
    Scored { obstacle_id: u32, score: u32 },
    /// The run ended this tick
    GameOver { final_score: u32, is_new_best: bool },
}

/// Advance the game state by one fixed timestep
///
/// Does nothing unless the game is Playing, so a timer that fires after a
/// pause or reset is harmless.
pub fn tick(state: &mut FlappyState, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    let config = state.config;

    state.player.apply_gravity(config.gravity);

    for obstacle in &mut state.obstacles {
        obstacle.x -= config.obstacle_speed;
    }
    state.obstacles.retain(|o| o.right() >= 0.0);

    // Scoring uses the obstacle center against the player center. This is
    // a different window from the collision overlap below and usually fires
    // while the player is still inside the obstacle column.
    let player_x = state.player.pos.x;
    for obstacle in state.obstacles.iter_mut() {
        if !obstacle.scored && obstacle.x < player_x {
            obstacle.scored = true;
            state.score += 1;
            log::debug!("Passed obstacle {}, score {}", obstacle.id, state.score);
            events.push(GameEvent::Scored {
                obstacle_id: obstacle.id,
                score: state.score,
            });
        }
    }

    if check_collision(&state.player, &state.obstacles, state.play_size.y) {
        let final_score = state.score;
        let is_new_best = final_score > state.best_score;
        state.phase = GamePhase::GameOver {
            final_score,
            is_new_best,
        };
        events.push(GameEvent::GameOver {
            final_score,
            is_new_best,
        });
        return;
    }

    if state.should_spawn() {
        state.spawn_obstacle();
    }
}
