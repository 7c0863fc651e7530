//! Collision detection for the reaction game
//!
//! Two terminal conditions: the player leaves the play area vertically, or
//! the player's square overlaps an obstacle column outside its gap.

use super::state::{Obstacle, Player};

/// Player square sticks out above the top or below the bottom of the play area
pub fn is_out_of_bounds(player: &Player, play_height: f32) -> bool {
    player.rect().exceeds_vertical(0.0, play_height)
}

/// Player overlaps the obstacle horizontally and touches a blocking part
pub fn hits_obstacle(player: &Player, obstacle: &Obstacle, play_height: f32) -> bool {
    let rect = player.rect();
    if !rect.overlaps_x(&obstacle.footprint(play_height)) {
        return false;
    }
    obstacle.gap_band().blocks(&rect)
}

/// Any terminal collision for the current frame
pub fn check_collision(player: &Player, obstacles: &[Obstacle], play_height: f32) -> bool {
    is_out_of_bounds(player, play_height)
        || obstacles
            .iter()
            .any(|o| hits_obstacle(player, o, play_height))
}
