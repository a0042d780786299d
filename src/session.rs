/// The controller a host drives once per frame: owns the simulation state
/// and the random source, forwards input intents and exposes read-only
/// views for drawing.

use rand::Rng;

use crate::compute;
use crate::entities::{Beam, Enemy, Explosion, GameStatus, Player, SimulationState};

pub struct Session<R: Rng> {
    state: SimulationState,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(mut rng: R) -> Self {
        let state = compute::new_game(&mut rng);
        Self { state, rng }
    }

    /// Resume from an existing state, e.g. a scripted scenario.
    pub fn from_state(state: SimulationState, rng: R) -> Self {
        Self { state, rng }
    }

    /// Reset player, score, pool, timers and thresholds.
    pub fn new_game(&mut self) {
        self.state = compute::new_game(&mut self.rng);
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        self.state = compute::tick(&self.state, &mut self.rng);
    }

    // ── Intents ──────────────────────────────────────────────────────────────

    pub fn move_up(&mut self) {
        self.state = compute::move_player_up(&self.state);
    }

    pub fn move_down(&mut self) {
        self.state = compute::move_player_down(&self.state);
    }

    pub fn move_left(&mut self) {
        self.state = compute::move_player_left(&self.state);
    }

    pub fn move_right(&mut self) {
        self.state = compute::move_player_right(&self.state);
    }

    pub fn request_fire(&mut self) {
        self.state = compute::request_fire(&self.state);
    }

    // ── Views ────────────────────────────────────────────────────────────────

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        self.state.enemies.slots()
    }

    pub fn score(&self) -> u32 {
        self.state.wave.score
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn boss_alive(&self) -> bool {
        self.state.wave.boss_alive
    }

    pub fn cooldown(&self) -> u8 {
        self.state.weapon.cooldown
    }

    /// The beam as resolved on the last tick, while it is live.
    pub fn beam(&self) -> Option<Beam> {
        self.state.weapon.beam
    }

    pub fn locked_target_position(&self) -> Option<(u8, u8)> {
        self.state.locked_target().map(|e| (e.x, e.y))
    }

    /// Frame of the muzzle flash, while it shows.
    pub fn muzzle_flash_frame(&self) -> Option<u8> {
        self.state.weapon.muzzle_flash
    }

    /// Explosion as drawn on the last tick. The last frame still shows on
    /// the tick the target leaves the pool.
    pub fn explosion(&self) -> Option<Explosion> {
        self.state.weapon.explosion
    }
}
