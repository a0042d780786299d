/// Rendering layer — all terminal I/O lives here.
///
/// The 128×64 playfield is rasterised into a colour buffer and printed
/// with half-block glyphs, two pixel rows per terminal row. No game logic
/// is performed; this module only translates state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use rand::Rng;
use space_bats::entities::{EnemyKind, GameStatus, SCREEN_HEIGHT, SCREEN_WIDTH};
use space_bats::session::Session;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Black;
const C_STAR: Color = Color::DarkGrey;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_BOSS: Color = Color::Magenta;
const C_PLAYER: Color = Color::White;
const C_BAT: Color = Color::Green;
const C_DRACULA: Color = Color::Red;
const C_MEGADRACULA: Color = Color::Magenta;
const C_BEAM: Color = Color::Cyan;
const C_FLASH: Color = Color::Yellow;
const C_EXPLOSION: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

const FIELD_TOP: u16 = 1;
const FIELD_ROWS: u16 = SCREEN_HEIGHT as u16 / 2;
const EXPLOSION_SIZE: i16 = 16;

struct Canvas {
    pixels: Vec<Option<Color>>,
}

impl Canvas {
    fn new() -> Self {
        Self {
            pixels: vec![None; SCREEN_WIDTH as usize * SCREEN_HEIGHT as usize],
        }
    }

    fn set(&mut self, x: i16, y: i16, color: Color) {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH as i16 || y >= SCREEN_HEIGHT as i16 {
            return;
        }
        self.pixels[y as usize * SCREEN_WIDTH as usize + x as usize] = Some(color);
    }

    fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[y * SCREEN_WIDTH as usize + x].unwrap_or(C_BACKGROUND)
    }

    fn fill(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, color);
            }
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write, R: Rng>(out: &mut W, session: &Session<R>) -> std::io::Result<()> {
    let mut canvas = Canvas::new();

    draw_stars(&mut canvas, session);
    draw_enemies(&mut canvas, session);
    draw_player(&mut canvas, session);
    draw_weapon(&mut canvas, session);

    draw_hud(out, session)?;
    draw_field(out, &canvas)?;
    draw_controls_hint(out)?;

    if session.status() == GameStatus::GameOver {
        draw_game_over(out, session)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, FIELD_TOP + FIELD_ROWS + 1))?;
    out.flush()?;
    Ok(())
}

// ── Playfield ─────────────────────────────────────────────────────────────────

fn draw_stars<R: Rng>(canvas: &mut Canvas, session: &Session<R>) {
    for &(x, y) in session.state().stars.iter() {
        canvas.set(x as i16, y as i16, C_STAR);
    }
}

fn draw_enemies<R: Rng>(canvas: &mut Canvas, session: &Session<R>) {
    for enemy in session.enemies().iter().filter(|e| e.is_active()) {
        let color = match enemy.kind {
            EnemyKind::Bat => C_BAT,
            EnemyKind::Dracula => C_DRACULA,
            EnemyKind::Megadracula => C_MEGADRACULA,
        };
        let bbox = enemy.bounding_box;
        let (x, y) = (enemy.x as i16, enemy.y as i16);

        // Wings flap with the idle frame: the body stays, the tips swap rows.
        canvas.fill(
            x + bbox.top_left_x as i16,
            y + bbox.top_left_y as i16,
            (bbox.bottom_right_x - bbox.top_left_x) as i16 + 1,
            (bbox.bottom_right_y - bbox.top_left_y) as i16 + 1,
            color,
        );
        let wing_y = if enemy.idle_frame == 0 { y } else { y + enemy.sprite_size as i16 - 1 };
        canvas.set(x, wing_y, color);
        canvas.set(x + enemy.sprite_size as i16 - 1, wing_y, color);
    }

    if let Some(explosion) = session.explosion() {
        let reach = EXPLOSION_SIZE / 2 - explosion.frame as i16;
        let (cx, cy) = (explosion.x + EXPLOSION_SIZE / 2, explosion.y + EXPLOSION_SIZE / 2);
        for d in -reach..=reach {
            canvas.set(cx + d, cy, C_EXPLOSION);
            canvas.set(cx, cy + d, C_EXPLOSION);
        }
    }
}

fn draw_player<R: Rng>(canvas: &mut Canvas, session: &Session<R>) {
    let p = session.player();
    // Blink while dying.
    if p.death_countdown != 0 && p.death_countdown % 2 != 0 {
        return;
    }
    let bbox = p.bounding_box;
    let (x, y) = (p.x as i16, p.y as i16);

    // Hull, turret and tracks; the tracks roll with the idle frame.
    canvas.fill(x, y + 3, bbox.bottom_right_x as i16, 3, C_PLAYER);
    canvas.fill(x + 2, y + 1, 3, 2, C_PLAYER);
    canvas.fill(x + 4, y + 2, 4, 1, C_PLAYER);
    for tx in (p.idle_frame as i16..bbox.bottom_right_x as i16).step_by(3) {
        canvas.set(x + tx, y + bbox.bottom_right_y as i16 - 1, C_PLAYER);
    }
}

fn draw_weapon<R: Rng>(canvas: &mut Canvas, session: &Session<R>) {
    if let Some(beam) = session.beam() {
        for dx in 0..beam.length as i16 {
            canvas.set(beam.origin_x as i16 + dx, beam.y as i16, C_BEAM);
        }
        if let Some(frame) = session.muzzle_flash_frame() {
            let size = 3 - frame as i16;
            canvas.fill(
                beam.origin_x as i16,
                beam.y as i16 - size / 2,
                size,
                size,
                C_FLASH,
            );
        }
    }
}

fn draw_field<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    for row in 0..FIELD_ROWS as usize {
        out.queue(cursor::MoveTo(0, FIELD_TOP + row as u16))?;
        for x in 0..SCREEN_WIDTH as usize {
            out.queue(style::SetForegroundColor(canvas.get(x, row * 2)))?;
            out.queue(style::SetBackgroundColor(canvas.get(x, row * 2 + 1)))?;
            out.queue(Print("▀"))?;
        }
    }
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write, R: Rng>(out: &mut W, session: &Session<R>) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>5}", session.score())))?;

    if session.boss_alive() {
        let tag = "[ MEGADRACULA ]";
        let x = (SCREEN_WIDTH as u16 / 2).saturating_sub(tag.len() as u16 / 2);
        out.queue(cursor::MoveTo(x, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_BOSS))?;
        out.queue(Print(tag))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, FIELD_TOP + FIELD_ROWS))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Arrows / WASD : Move   SPACE / Z / X : Fire   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write, R: Rng>(out: &mut W, session: &Session<R>) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>5}", session.score());

    let lines: [(&str, Color); 5] = [
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = SCREEN_WIDTH as u16 / 2;
    let start_row = FIELD_TOP + (FIELD_ROWS / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
