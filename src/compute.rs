/// Per-frame orchestration and input intents.
///
/// Every public function takes an immutable reference to the current
/// `SimulationState` (and, where needed, an RNG handle) and returns a
/// brand-new `SimulationState`. Side effects are limited to the injected RNG.

use rand::Rng;
use tracing::{debug, trace};

use crate::combat;
use crate::entities::{Player, SimulationState, Weapon, WaveState, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::motion;
use crate::spawner;
use crate::starfield::Starfield;
use crate::timers;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state for a fresh game: player at home, score and thresholds
/// reset, three bats on the field.
pub fn new_game(rng: &mut impl Rng) -> SimulationState {
    let state = SimulationState {
        player: Player::new(),
        enemies: spawner::reset_enemy_pool(rng),
        weapon: Weapon::default(),
        wave: WaveState::new(),
        stars: Starfield::new(),
        frame: 0,
    };
    debug!(active = state.enemies.active_count(), "new game");
    state
}

// ── Input-driven state transitions (pure) ───────────────────────────────────
//
// All intents are ignored while the player is dying.

fn with_player(state: &SimulationState, f: impl FnOnce(&mut Player)) -> SimulationState {
    let mut next = state.clone();
    if !next.player.is_dying() && !next.player.is_dead {
        f(&mut next.player);
    }
    next
}

pub fn move_player_up(state: &SimulationState) -> SimulationState {
    with_player(state, |p| p.y = p.y.saturating_sub(1))
}

pub fn move_player_down(state: &SimulationState) -> SimulationState {
    with_player(state, |p| {
        if p.y < SCREEN_HEIGHT - p.sprite_size {
            p.y += 1;
        }
    })
}

pub fn move_player_left(state: &SimulationState) -> SimulationState {
    with_player(state, |p| p.x = p.x.saturating_sub(1))
}

pub fn move_player_right(state: &SimulationState) -> SimulationState {
    with_player(state, |p| {
        if p.x < SCREEN_WIDTH - p.sprite_size {
            p.x += 1;
        }
    })
}

/// Pull the trigger. Edge-triggered: a no-op while the cooldown runs.
pub fn request_fire(state: &SimulationState) -> SimulationState {
    let mut next = state.clone();
    if !next.player.is_dying() && !next.player.is_dead && combat::request_fire(&mut next.weapon) {
        trace!(frame = next.frame, "fire");
    }
    next
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame. All randomness comes through `rng`
/// so callers control determinism. Once the player is dead the state is
/// frozen until a new game starts.
pub fn tick(state: &SimulationState, rng: &mut impl Rng) -> SimulationState {
    let mut next = state.clone();
    if next.player.is_dead {
        return next;
    }
    next.frame += 1;

    // ── 1. Motion ────────────────────────────────────────────────────────────
    motion::advance_enemies(&mut next);

    // ── 2. Collision & targeting ─────────────────────────────────────────────
    combat::check_player_collision(&mut next);
    combat::update_weapon(&mut next);

    // ── 3. Reinforcements ────────────────────────────────────────────────────
    spawner::sweep_and_spawn(&mut next, rng);

    // ── 4. Timers & animation ────────────────────────────────────────────────
    timers::update_timers(&mut next);
    next.stars.advance(next.frame);

    next
}
