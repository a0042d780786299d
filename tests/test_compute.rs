use space_bats::combat::{HIT_ANIMATION, SHOOT_COOLDOWN};
use space_bats::compute::*;
use space_bats::entities::*;
use space_bats::pool::EnemyPool;
use space_bats::spawner::SPAWN_RATE;
use space_bats::starfield::Starfield;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Fresh game with an empty field.
fn make_state() -> SimulationState {
    let mut s = new_game(&mut seeded_rng());
    s.enemies = EnemyPool::new();
    s
}

fn place_bat(s: &mut SimulationState, x: u8, y: u8) -> usize {
    let index = s.enemies.acquire().unwrap();
    let bat = s.enemies.slot_mut(index).unwrap();
    bat.x = x;
    bat.y = y;
    index
}

// ── new_game ──────────────────────────────────────────────────────────────────

#[test]
fn new_game_initial_state() {
    let s = new_game(&mut seeded_rng());
    assert_eq!(s.wave.score, 0);
    assert_eq!((s.player.x, s.player.y), PLAYER_HOME);
    assert_eq!(s.enemies.active_count(), NUM_BATS);
    assert!(s
        .enemies
        .iter_active()
        .all(|(_, e)| e.kind == EnemyKind::Bat && e.health == 1));
    assert!(!s.wave.boss_alive);
    assert_eq!(s.wave.next_dracula_at, 20);
    assert_eq!(s.wave.next_megadracula_at, 40);
    assert_eq!(s.weapon, Weapon::default());
    assert_eq!(s.frame, 0);
    assert_eq!(s.status(), GameStatus::Playing);
}

#[test]
fn new_game_is_deterministic_for_a_seed() {
    let a = new_game(&mut StdRng::seed_from_u64(9));
    let b = new_game(&mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}

// ── movement ──────────────────────────────────────────────────────────────────

#[test]
fn moves_one_unit_each_way() {
    let s = make_state(); // (16, 48)
    assert_eq!(move_player_up(&s).player.y, 47);
    assert_eq!(move_player_down(&s).player.y, 49);
    assert_eq!(move_player_left(&s).player.x, 15);
    assert_eq!(move_player_right(&s).player.x, 17);
}

#[test]
fn movement_clamps_to_screen() {
    let mut s = make_state();
    s.player.x = 0;
    s.player.y = 0;
    assert_eq!(move_player_up(&s).player.y, 0);
    assert_eq!(move_player_left(&s).player.x, 0);

    s.player.x = SCREEN_WIDTH - 8;
    s.player.y = SCREEN_HEIGHT - 8;
    assert_eq!(move_player_down(&s).player.y, SCREEN_HEIGHT - 8);
    assert_eq!(move_player_right(&s).player.x, SCREEN_WIDTH - 8);
}

#[test]
fn move_does_not_mutate_original() {
    let s = make_state();
    let _ = move_player_left(&s);
    let _ = move_player_up(&s);
    assert_eq!((s.player.x, s.player.y), PLAYER_HOME);
}

#[test]
fn input_ignored_while_dying() {
    let mut s = make_state();
    s.player.death_countdown = 40;
    assert_eq!(move_player_left(&s).player.x, s.player.x);
    assert_eq!(move_player_down(&s).player.y, s.player.y);
    assert_eq!(request_fire(&s).weapon.cooldown, 0);
}

#[test]
fn fire_only_when_ready() {
    let s = make_state();
    let s2 = request_fire(&s);
    assert_eq!(s2.weapon.cooldown, SHOOT_COOLDOWN);

    let mut s3 = s2.clone();
    s3.weapon.cooldown = 5;
    assert_eq!(request_fire(&s3).weapon.cooldown, 5);
}

// ── tick ──────────────────────────────────────────────────────────────────────

#[test]
fn tick_increments_frame() {
    let mut s = make_state();
    s.frame = 5;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.frame, 6);
}

#[test]
fn tick_shot_hits_bat_ahead() {
    let mut s = make_state();
    let index = place_bat(&mut s, 40, 48);
    let s = request_fire(&s);
    let s2 = tick(&s, &mut seeded_rng());

    let bat = s2.enemies.slot(index).unwrap();
    assert_eq!(bat.health, 0);
    // Locked at 5, then the same tick's timers ran once
    assert_eq!(bat.hit_animation, HIT_ANIMATION - 1);
    assert_eq!(s2.wave.score, 1);
    assert_eq!(s2.weapon.cooldown, SHOOT_COOLDOWN - 1);
    assert!(s2.weapon.target.is_some());
}

#[test]
fn tick_destroyed_bat_leaves_after_explosion() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let index = place_bat(&mut s, 40, 48);
    s = request_fire(&s);
    for _ in 0..HIT_ANIMATION {
        s = tick(&s, &mut rng);
    }
    assert!(!s.enemies.slot(index).unwrap().is_active());
    // Still locked for the rest of the shot, but the slot no longer resolves
    assert!(s.weapon.target.is_some());
    assert!(s.locked_target().is_none());
    assert_eq!(s.wave.score, 1);
}

#[test]
fn tick_collision_starts_death_once() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    place_bat(&mut s, 12, 45);
    s = tick(&s, &mut rng);
    assert_eq!(s.player.death_countdown, DEATH_COUNTDOWN - 1);
    assert_eq!(s.status(), GameStatus::Dying);

    s = tick(&s, &mut rng);
    assert_eq!(s.player.death_countdown, DEATH_COUNTDOWN - 2);
}

#[test]
fn tick_death_countdown_ends_game() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    place_bat(&mut s, 12, 45);
    for _ in 0..DEATH_COUNTDOWN {
        s = tick(&s, &mut rng);
    }
    assert!(s.player.is_dead);
    assert_eq!(s.player.death_countdown, 0);
    assert_eq!(s.status(), GameStatus::GameOver);
}

#[test]
fn tick_is_frozen_after_game_over() {
    let mut s = make_state();
    s.player.is_dead = true;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2, s);
}

#[test]
fn tick_spawns_megadracula_at_threshold() {
    let mut s = new_game(&mut seeded_rng());
    s.wave.score = 40;
    s.frame = SPAWN_RATE - 1;
    let s2 = tick(&s, &mut seeded_rng());

    assert!(s2.wave.boss_alive);
    assert_eq!(s2.enemies.active_count(), 1);
    let (_, boss) = s2.enemies.iter_active().next().unwrap();
    assert_eq!(boss.kind, EnemyKind::Megadracula);
    assert_eq!((boss.x, boss.y), (72, 16));
    assert_eq!(boss.health, 10);
}

#[test]
fn tick_defeating_megadracula_raises_threshold() {
    let mut rng = seeded_rng();
    let mut s = new_game(&mut rng);
    s.wave.score = 40;
    s.frame = SPAWN_RATE - 1;
    s = tick(&s, &mut rng);
    assert!(s.wave.boss_alive);

    // Line up under the boss (box rows 17..=46) and finish it off
    let (index, _) = s.enemies.iter_active().next().unwrap();
    s.enemies.slot_mut(index).unwrap().health = 1;
    s.player.y = 20;
    s = request_fire(&s);
    for _ in 0..HIT_ANIMATION {
        s = tick(&s, &mut rng);
    }

    assert!(!s.wave.boss_alive);
    assert_eq!(s.wave.next_megadracula_at, 80);
    assert_eq!(s.enemies.active_count(), 0);
    assert_eq!(s.wave.score, 41);
}

#[test]
fn tick_idle_frames_cycle() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let index = place_bat(&mut s, 100, 10);
    for _ in 0..48 {
        s = tick(&s, &mut rng);
    }
    // Player: every 16 frames, mod 3 → three advances
    assert_eq!(s.player.idle_frame, 0);
    // Bat: every 24 frames, mod 2, seeded at 0 → two advances
    assert_eq!(s.enemies.slot(index).unwrap().idle_frame, 0);

    for _ in 0..24 {
        s = tick(&s, &mut rng);
    }
    assert_eq!(s.player.idle_frame, 1);
    assert_eq!(s.enemies.slot(index).unwrap().idle_frame, 1);
}

// ── starfield ─────────────────────────────────────────────────────────────────

#[test]
fn starfield_layers_move_at_their_own_pace() {
    let mut stars = Starfield::new();
    let start = stars.clone();
    stars.advance(1);
    assert_eq!(stars.fast[0].0, start.fast[0].0 - 1);
    assert_eq!(stars.moving, start.moving);
    assert_eq!(stars.slow, start.slow);

    stars.advance(6);
    assert_eq!(stars.moving[0].0, start.moving[0].0 - 1);
    assert_eq!(stars.slow[0].0, start.slow[0].0 - 1);
}

#[test]
fn starfield_wraps_to_right_edge() {
    let mut stars = Starfield::new();
    stars.fast[0].0 = 1;
    stars.advance(1);
    assert_eq!(stars.fast[0].0, 127);
}
