/// All game entity types — state records only; behaviour lives in the
/// motion, combat, spawner and timer modules.

use crate::geometry::{BoundingBox, BAT_BOX, TANK_BOX};
use crate::pool::{EnemyPool, SlotHandle};
use crate::starfield::Starfield;

// ── Screen & pacing ───────────────────────────────────────────────────────────

pub const FRAME_RATE: u64 = 60;
pub const SCREEN_WIDTH: u8 = 128;
pub const SCREEN_HEIGHT: u8 = 64;

pub const PLAYER_HOME: (u8, u8) = (16, 48);
pub const PLAYER_SPRITE_SIZE: u8 = 8;
/// Ticks the player spends dying before the game is over.
pub const DEATH_COUNTDOWN: u16 = 2 * FRAME_RATE as u16;

pub const MAX_ENEMIES: usize = 20;
pub const NUM_BATS: usize = 3;

pub const FIRST_DRACULA_AT: u32 = 20;
pub const FIRST_MEGADRACULA_AT: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Bat,
    Dracula,
    Megadracula,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// Death countdown running; motion, spawning and input are frozen.
    Dying,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: u8,
    pub y: u8,
    /// Free-running idle frame, cycles 0..3.
    pub idle_frame: u8,
    /// 0 while alive; counts down to 0 while dying.
    pub death_countdown: u16,
    pub bounding_box: &'static BoundingBox,
    pub sprite_size: u8,
    pub is_dead: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_HOME.0,
            y: PLAYER_HOME.1,
            idle_frame: 0,
            death_countdown: 0,
            bounding_box: &TANK_BOX,
            sprite_size: PLAYER_SPRITE_SIZE,
            is_dead: false,
        }
    }

    pub fn is_dying(&self) -> bool {
        self.death_countdown > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub x: u8,
    pub y: u8,
    pub(crate) active: bool,
    pub idle_frame: u8,
    /// Explosion countdown started by a laser hit.
    pub hit_animation: u8,
    pub bounding_box: &'static BoundingBox,
    pub sprite_size: u8,
    pub kind: EnemyKind,
    pub path_index: u8,
    pub step_index: u8,
    pub health: u8,
}

impl Enemy {
    /// Inactive slot contents. The idle frame is staggered by slot so
    /// neighbouring bats don't flap in unison.
    pub fn baseline(slot: usize) -> Self {
        Self {
            x: 0,
            y: 0,
            active: false,
            idle_frame: (slot % 3) as u8,
            hit_animation: 0,
            bounding_box: &BAT_BOX,
            sprite_size: 8,
            kind: EnemyKind::Bat,
            path_index: 0,
            step_index: 0,
            health: 1,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

// ── Weapon ────────────────────────────────────────────────────────────────────

/// The horizontal laser as resolved on the last tick it was live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Beam {
    pub origin_x: u8,
    pub y: u8,
    pub length: u8,
}

/// Explosion drawn over the locked target while it animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Explosion {
    pub x: i16,
    pub y: i16,
    /// Animation frame, 0 on the tick of the hit.
    pub frame: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Weapon {
    /// 0 = ready to fire.
    pub cooldown: u8,
    /// Enemy locked by the current shot, if any.
    pub target: Option<SlotHandle>,
    /// Last x observed for the locked target; the beam stops here.
    pub target_x: Option<u8>,
    pub beam: Option<Beam>,
    /// Muzzle flash frame shown on the last tick, if any.
    pub muzzle_flash: Option<u8>,
    /// Explosion frame shown on the last tick, if any.
    pub explosion: Option<Explosion>,
}

// ── Waves ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaveState {
    pub score: u32,
    pub boss_alive: bool,
    pub next_dracula_at: u32,
    pub next_megadracula_at: u32,
}

impl WaveState {
    pub fn new() -> Self {
        Self {
            score: 0,
            boss_alive: false,
            next_dracula_at: FIRST_DRACULA_AT,
            next_megadracula_at: FIRST_MEGADRACULA_AT,
        }
    }
}

impl Default for WaveState {
    fn default() -> Self {
        Self::new()
    }
}

// ── Master simulation state ───────────────────────────────────────────────────

/// The entire simulation state. Cloneable so the pure update functions
/// in `compute` can hand back a fresh copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState {
    pub player: Player,
    pub enemies: EnemyPool,
    pub weapon: Weapon,
    pub wave: WaveState,
    pub stars: Starfield,
    pub frame: u64,
}

impl SimulationState {
    pub fn status(&self) -> GameStatus {
        if self.player.is_dead {
            GameStatus::GameOver
        } else if self.player.is_dying() {
            GameStatus::Dying
        } else {
            GameStatus::Playing
        }
    }

    pub fn score(&self) -> u32 {
        self.wave.score
    }

    /// The enemy the current shot is locked on, if its slot still holds it.
    pub fn locked_target(&self) -> Option<&Enemy> {
        self.weapon.target.and_then(|handle| self.enemies.get(handle))
    }
}
