/// Enemy spawning: the starting wave, score-driven reinforcements and the
/// megadracula that clears the field.

use rand::Rng;
use tracing::debug;

use crate::entities::{
    Enemy, EnemyKind, SimulationState, FRAME_RATE, NUM_BATS, SCREEN_HEIGHT,
};
use crate::geometry::{BAT_BOX, DRACULA_BOX, MEGADRACULA_BOX};
use crate::motion::{MAX_PATHS, PATH_LENGTH};
use crate::pool::EnemyPool;
use crate::timers::every_x_frames;

pub const SPAWN_RATE: u64 = 6 * FRAME_RATE;
pub const POINTS_PER_WAVE: u32 = 20;
pub const MEGADRACULA_HOME: (u8, u8) = (72, 16);

const SPAWN_X_MIN: u8 = 64;
const SPAWN_X_SPAN: u8 = 48;
const DRACULA_ODDS: u32 = 50;

// ── Spawn routines ────────────────────────────────────────────────────────────

/// Random placement on the right half of the screen plus a random path
/// and starting step. Expects size and box to be set already.
fn place(enemy: &mut Enemy, rng: &mut impl Rng) {
    enemy.x = rng.gen_range(SPAWN_X_MIN..SPAWN_X_MIN + SPAWN_X_SPAN);
    enemy.y = rng.gen_range(0..SCREEN_HEIGHT - enemy.sprite_size);
    enemy.path_index = rng.gen_range(0..MAX_PATHS) as u8;
    enemy.step_index = rng.gen_range(0..PATH_LENGTH) as u8;
    enemy.hit_animation = 0;
}

pub fn spawn_bat(enemy: &mut Enemy, rng: &mut impl Rng) {
    enemy.kind = EnemyKind::Bat;
    enemy.sprite_size = 8;
    enemy.bounding_box = &BAT_BOX;
    enemy.health = 1;
    place(enemy, rng);
}

pub fn spawn_dracula(enemy: &mut Enemy, rng: &mut impl Rng) {
    enemy.kind = EnemyKind::Dracula;
    enemy.sprite_size = 16;
    enemy.bounding_box = &DRACULA_BOX;
    enemy.health = 3;
    place(enemy, rng);
}

/// The boss always appears at the same spot; only its path is random.
pub fn spawn_megadracula(enemy: &mut Enemy, rng: &mut impl Rng) {
    enemy.kind = EnemyKind::Megadracula;
    enemy.sprite_size = 32;
    enemy.bounding_box = &MEGADRACULA_BOX;
    enemy.health = 10;
    place(enemy, rng);
    (enemy.x, enemy.y) = MEGADRACULA_HOME;
}

/// Fresh pool with the starting wave of bats in the lowest slots.
pub fn reset_enemy_pool(rng: &mut impl Rng) -> EnemyPool {
    let mut pool = EnemyPool::new();
    for _ in 0..NUM_BATS {
        let Some(index) = pool.acquire() else {
            break;
        };
        if let Some(enemy) = pool.slot_mut(index) {
            spawn_bat(enemy, rng);
        }
    }
    pool
}

// ── Waves ─────────────────────────────────────────────────────────────────────

/// How many reinforcements a wave may bring in. Also the numerator of the
/// dracula odds, out of `DRACULA_ODDS`.
pub fn wave_capacity(score: u32) -> u32 {
    score / POINTS_PER_WAVE
}

/// Refill free slots every `SPAWN_RATE` frames while the player is alive
/// and no megadracula is on the field.
pub fn sweep_and_spawn(state: &mut SimulationState, rng: &mut impl Rng) {
    if state.player.is_dying() || !every_x_frames(state.frame, SPAWN_RATE) {
        return;
    }
    if state.wave.boss_alive {
        return;
    }

    let score = state.wave.score;
    let capacity = wave_capacity(score);
    let mut spawned: u32 = 0;

    // Inclusive on purpose: a wave brings in up to `capacity + 1` enemies.
    while spawned <= capacity {
        let Some(index) = state.enemies.first_free() else {
            break;
        };

        if score >= state.wave.next_megadracula_at && !state.wave.boss_alive {
            state.enemies.release_all();
            state.enemies.acquire_at(index);
            if let Some(enemy) = state.enemies.slot_mut(index) {
                spawn_megadracula(enemy, rng);
            }
            state.wave.boss_alive = true;
            debug!(slot = index, score, "megadracula spawned");
            break;
        }

        state.enemies.acquire_at(index);
        let Some(enemy) = state.enemies.slot_mut(index) else {
            break;
        };
        if rng.gen_range(0..DRACULA_ODDS) <= capacity {
            spawn_dracula(enemy, rng);
            state.wave.next_dracula_at = score;
        } else {
            spawn_bat(enemy, rng);
        }

        spawned += 1;
    }

    debug!(
        spawned,
        capacity,
        active = state.enemies.active_count(),
        "wave spawned"
    );
}
