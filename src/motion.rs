/// Scripted enemy motion: each enemy walks one of eight fixed paths and
/// wraps around the screen edges.

use crate::entities::{Enemy, SimulationState, FRAME_RATE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::timers::every_x_frames;

pub const MAX_PATHS: usize = 8;
pub const PATH_LENGTH: usize = 4;

/// Frames between translations along the current step.
pub const MOVE_PERIOD: u64 = 10;
/// Frames between advancing to the next step.
pub const STEP_PERIOD: u64 = FRAME_RATE;

pub const PATHS: [[(i8, i8); PATH_LENGTH]; MAX_PATHS] = [
    [(-1, -1), (-2, 0), (-1, 1), (-1, 0)],
    [(-1, -1), (0, 0), (-1, -1), (-2, 0)],
    [(0, 2), (-1, 1), (-1, 2), (-1, 0)],
    [(-1, 0), (0, 0), (-3, 0), (0, 0)],
    [(-1, -2), (0, -1), (-1, -1), (-2, 0)],
    [(0, -2), (-1, 0), (0, -2), (-2, 0)],
    [(-1, 1), (-1, 1), (-1, 1), (-1, 1)],
    [(1, -1), (2, 0), (3, 0), (1, 1)],
];

/// The (dx, dy) for a path position.
///
/// `step_index` may equal `PATH_LENGTH` for one step period (the index
/// resets only once it goes past the length). That position reads the
/// table as one contiguous run: the first step of the next path, and the
/// last path runs into the first.
pub fn path_step(path_index: u8, step_index: u8) -> (i8, i8) {
    let flat = (path_index as usize * PATH_LENGTH + step_index as usize) % (MAX_PATHS * PATH_LENGTH);
    PATHS[flat / PATH_LENGTH][flat % PATH_LENGTH]
}

/// Move every active enemy for this frame. Frozen while the player is dying.
pub fn advance_enemies(state: &mut SimulationState) {
    if state.player.is_dying() {
        return;
    }

    let frame = state.frame;
    for (_, enemy) in state.enemies.iter_active_mut() {
        if every_x_frames(frame, MOVE_PERIOD) {
            let (dx, dy) = path_step(enemy.path_index, enemy.step_index);
            enemy.x = enemy.x.wrapping_add_signed(dx);
            enemy.y = enemy.y.wrapping_add_signed(dy);
        }

        if every_x_frames(frame, STEP_PERIOD) {
            enemy.step_index += 1;
            if enemy.step_index as usize > PATH_LENGTH {
                enemy.step_index = 0;
            }
        }

        wrap_around(enemy);
    }
}

/// Screen wrap, per axis: landing on 0 jumps to the far edge, running off
/// the far edge comes back in at 1.
pub fn wrap_around(enemy: &mut Enemy) {
    if enemy.x == 0 {
        enemy.x = SCREEN_WIDTH - enemy.sprite_size;
    }
    if enemy.x >= SCREEN_WIDTH {
        enemy.x = 1;
    }
    if enemy.y == 0 {
        enemy.y = SCREEN_HEIGHT - enemy.sprite_size;
    }
    if enemy.y >= SCREEN_HEIGHT {
        enemy.y = 1;
    }
}
