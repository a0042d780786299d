/// Countdown timers and periodic gates.
///
/// Every countdown here decrements at most once per tick and fires its
/// transition when it reaches zero:
///
/// * player death countdown → `Player::is_dead`
/// * weapon cooldown → re-arm (handled in `combat::update_weapon`)
/// * locked target's hit animation → slot release when health is gone

use tracing::debug;

use crate::combat::HIT_ANIMATION;
use crate::entities::{EnemyKind, Explosion, SimulationState};

const PLAYER_IDLE_PERIOD: u64 = 16;
const PLAYER_IDLE_FRAMES: u8 = 3;
const ENEMY_IDLE_PERIOD: u64 = 24;
const ENEMY_IDLE_FRAMES: u8 = 2;
const EXPLOSION_OFFSET: i16 = 4;

/// True on every `period`-th frame.
pub fn every_x_frames(frame: u64, period: u64) -> bool {
    period != 0 && frame % period == 0
}

/// Run all timers for the current frame.
pub fn update_timers(state: &mut SimulationState) {
    update_player_timers(state);
    update_enemy_idle(state);
    update_hit_animation(state);
}

pub fn update_player_timers(state: &mut SimulationState) {
    let player = &mut state.player;

    if every_x_frames(state.frame, PLAYER_IDLE_PERIOD) {
        player.idle_frame = (player.idle_frame + 1) % PLAYER_IDLE_FRAMES;
    }

    if player.death_countdown > 0 {
        player.death_countdown -= 1;
        if player.death_countdown == 0 {
            player.is_dead = true;
            debug!(score = state.wave.score, "player dead");
        }
    }
}

fn update_enemy_idle(state: &mut SimulationState) {
    if !every_x_frames(state.frame, ENEMY_IDLE_PERIOD) {
        return;
    }
    for (_, enemy) in state.enemies.iter_active_mut() {
        enemy.idle_frame = (enemy.idle_frame + 1) % ENEMY_IDLE_FRAMES;
    }
}

/// Tick the explosion on the locked target. The frame shown this tick is
/// taken before the countdown moves, so all five frames get drawn. When it
/// runs out on an enemy with no health left, the slot goes back to the
/// pool; a megadracula going down also raises the bar for the next one.
pub fn update_hit_animation(state: &mut SimulationState) {
    state.weapon.explosion = None;
    let Some(handle) = state.weapon.target else {
        return;
    };
    let Some(enemy) = state.enemies.get_mut(handle) else {
        return;
    };
    if enemy.hit_animation == 0 {
        return;
    }

    state.weapon.explosion = Some(Explosion {
        x: enemy.x as i16 - EXPLOSION_OFFSET,
        y: enemy.y as i16 - EXPLOSION_OFFSET,
        frame: HIT_ANIMATION.saturating_sub(enemy.hit_animation),
    });
    enemy.hit_animation -= 1;
    if enemy.hit_animation > 0 || enemy.health > 0 {
        return;
    }

    let kind = enemy.kind;
    state.enemies.release(handle.index);
    debug!(slot = handle.index, ?kind, "enemy destroyed");

    if kind == EnemyKind::Megadracula {
        state.wave.boss_alive = false;
        state.wave.next_megadracula_at = state.wave.next_megadracula_at.saturating_mul(2);
        debug!(
            next_megadracula_at = state.wave.next_megadracula_at,
            "megadracula defeated"
        );
    }
}
