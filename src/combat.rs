/// Player/enemy collision and the hit-scan laser.

use tracing::{debug, trace};

use crate::entities::{Beam, Enemy, Player, SimulationState, Weapon, DEATH_COUNTDOWN, SCREEN_WIDTH};
use crate::geometry::point_in_box;

pub const SHOOT_COOLDOWN: u8 = 30;
/// The beam is live while the cooldown is above this value.
pub const BEAM_CUTOFF: u8 = 20;
/// The muzzle flash shows while the cooldown is above this value.
pub const MUZZLE_FLASH_CUTOFF: u8 = 21;
pub const HIT_ANIMATION: u8 = 5;
const BEAM_Y_OFFSET: u8 = 3;
const MUZZLE_FLASH_FRAME_TICKS: u8 = 3;

// ── Player ↔ enemy ────────────────────────────────────────────────────────────

/// True if any corner of the player's box sits inside the enemy's box.
/// Only the player's corners are tested, never the enemy's.
pub fn has_bounding_box_overlap(player: &Player, enemy: &Enemy) -> bool {
    player
        .bounding_box
        .corners(player.x, player.y)
        .iter()
        .any(|&(px, py)| point_in_box(px, py, enemy.x, enemy.y, enemy.bounding_box))
}

/// Start the death countdown on the first active enemy touching the
/// player. Returns whether it was started this call.
pub fn check_player_collision(state: &mut SimulationState) -> bool {
    if state.player.is_dying() || state.player.is_dead {
        return false;
    }

    let hit = state
        .enemies
        .iter_active()
        .find(|(_, enemy)| has_bounding_box_overlap(&state.player, enemy))
        .map(|(index, _)| index);

    match hit {
        Some(slot) => {
            state.player.death_countdown = DEATH_COUNTDOWN;
            debug!(slot, x = state.player.x, y = state.player.y, "player hit");
            true
        }
        None => false,
    }
}

// ── Laser ─────────────────────────────────────────────────────────────────────

/// Arm the weapon. Only takes effect when the cooldown has run out, so
/// holding the trigger doesn't re-fire.
pub fn request_fire(weapon: &mut Weapon) -> bool {
    if weapon.cooldown != 0 {
        return false;
    }
    weapon.cooldown = SHOOT_COOLDOWN;
    true
}

pub fn beam_origin(player: &Player) -> (u8, u8) {
    (
        player.x.saturating_add(player.sprite_size),
        player.y.saturating_add(BEAM_Y_OFFSET),
    )
}

/// A beam leaving `origin_x` along row `y` strikes the enemy if it starts
/// strictly left of the enemy's box and the row crosses the box.
pub fn has_laser_hit(origin_x: u8, y: u8, enemy: &Enemy) -> bool {
    let bbox = enemy.bounding_box;
    let (ex, ey, y) = (enemy.x as u16, enemy.y as u16, y as u16);

    (origin_x as u16) < ex + bbox.top_left_x as u16
        && y >= ey + bbox.top_left_y as u16
        && y <= ey + bbox.bottom_right_y as u16
}

/// Slot of the nearest enemy the beam strikes. On equal x the lower slot wins.
pub fn find_target(state: &SimulationState) -> Option<usize> {
    let (origin_x, y) = beam_origin(&state.player);
    state
        .enemies
        .iter_active()
        .filter(|(_, enemy)| has_laser_hit(origin_x, y, enemy))
        .min_by_key(|(_, enemy)| enemy.x)
        .map(|(index, _)| index)
}

/// Run one frame of the weapon: lock and damage a target while the beam
/// is live, resolve the beam for drawing, then count the cooldown down.
pub fn update_weapon(state: &mut SimulationState) {
    if state.weapon.cooldown == 0 {
        state.weapon.beam = None;
        state.weapon.muzzle_flash = None;
        return;
    }

    if state.weapon.cooldown == SHOOT_COOLDOWN {
        state.weapon.target = None;
        state.weapon.target_x = None;
    }

    if state.weapon.cooldown > BEAM_CUTOFF {
        let (origin_x, y) = beam_origin(&state.player);

        match state.weapon.target {
            None => lock_target(state),
            Some(handle) => {
                if let Some(enemy) = state.enemies.get(handle) {
                    state.weapon.target_x = Some(enemy.x);
                }
            }
        }

        let length = match state.weapon.target_x {
            Some(x) => (x as u16 + 2).saturating_sub(origin_x as u16).min(u8::MAX as u16) as u8,
            None => SCREEN_WIDTH.saturating_sub(origin_x),
        };
        state.weapon.beam = Some(Beam { origin_x, y, length });
    } else {
        state.weapon.beam = None;
    }

    let cooldown = state.weapon.cooldown;
    state.weapon.muzzle_flash = (cooldown > MUZZLE_FLASH_CUTOFF)
        .then(|| (SHOOT_COOLDOWN - cooldown) / MUZZLE_FLASH_FRAME_TICKS);

    state.weapon.cooldown -= 1;
}

fn lock_target(state: &mut SimulationState) {
    let Some(index) = find_target(state) else {
        return;
    };
    let Some(handle) = state.enemies.handle(index) else {
        return;
    };
    let Some(enemy) = state.enemies.get_mut(handle) else {
        return;
    };

    enemy.hit_animation = HIT_ANIMATION;
    enemy.health = enemy.health.saturating_sub(1);
    let (x, health, kind) = (enemy.x, enemy.health, enemy.kind);

    state.wave.score += 1;
    state.weapon.target = Some(handle);
    state.weapon.target_x = Some(x);

    debug!(slot = index, ?kind, health, score = state.wave.score, "target locked");
    trace!(cooldown = state.weapon.cooldown, x, "beam stops at target");
}
