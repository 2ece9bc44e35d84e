//! Rendering layer — all terminal I/O lives here.
//!
//! The simulation runs in a fixed 800×600 unit arena; this module projects
//! that arena onto whatever terminal size is available and translates state
//! into terminal commands.  No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use swarm_dodge::compute::{score, ENEMY_SIZE, HEIGHT, PLAYER_SIZE, WIDTH};
use swarm_dodge::entities::{EnemyKind, GameState, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::White;
const C_HUD_LEVEL: Color = Color::Yellow;
const C_PLAYER: Color = Color::Blue;
const C_ENEMY_CHASER: Color = Color::Red;
const C_ENEMY_ZIGZAG: Color = Color::Green;
const C_ENEMY_CIRCLE: Color = Color::Yellow;
const C_ENEMY_PREDICT: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

/// Terminal layout:
///   row 0            — HUD
///   row 1            — top border
///   rows 2 .. h-3    — play area (the projected arena)
///   row h-2          — bottom border
///   row h-1          — controls hint
struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    fn inner_cols(&self) -> f32 {
        self.width.saturating_sub(2) as f32
    }

    fn inner_rows(&self) -> f32 {
        self.height.saturating_sub(4) as f32
    }

    /// Project an arena-space rectangle onto terminal cells.
    /// Returns (col, row, cols, rows); the cell footprint is at least 1×1.
    fn project(&self, x: f32, y: f32, size: f32) -> (u16, u16, u16, u16) {
        let col0 = 1.0 + x / WIDTH * self.inner_cols();
        let col1 = 1.0 + (x + size) / WIDTH * self.inner_cols();
        let row0 = 2.0 + y / HEIGHT * self.inner_rows();
        let row1 = 2.0 + (y + size) / HEIGHT * self.inner_rows();

        let col = col0 as u16;
        let row = row0 as u16;
        let cols = ((col1 as u16).saturating_sub(col)).max(1);
        let rows = ((row1 as u16).saturating_sub(row)).max(1);
        (col, row, cols, rows)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let vp = Viewport { width, height };

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &vp)?;
    draw_hud(out, state, &vp)?;

    for enemy in &state.enemies {
        let color = match enemy.kind {
            EnemyKind::Chaser => C_ENEMY_CHASER,
            EnemyKind::Zigzag => C_ENEMY_ZIGZAG,
            EnemyKind::Circle => C_ENEMY_CIRCLE,
            EnemyKind::Predict => C_ENEMY_PREDICT,
        };
        draw_square(out, &vp, enemy.x, enemy.y, ENEMY_SIZE, color)?;
    }

    draw_square(out, &vp, state.player.x, state.player.y, PLAYER_SIZE, C_PLAYER)?;
    draw_controls_hint(out, &vp)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, &vp)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let w = vp.width as usize;
    let h = vp.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(vp.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", score(state))))?;

    // Level — right
    let level_text = format!("Level: {}", state.level);
    let rx = vp
        .width
        .saturating_sub(level_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Draw one arena-space square as a filled block of cells, clipped to the
/// play area.
fn draw_square<W: Write>(
    out: &mut W,
    vp: &Viewport,
    x: f32,
    y: f32,
    size: f32,
    color: Color,
) -> std::io::Result<()> {
    let (col, row, cols, rows) = vp.project(x, y, size);
    let max_col = vp.width.saturating_sub(2);
    let max_row = vp.height.saturating_sub(3);

    out.queue(style::SetForegroundColor(color))?;
    for r in row..(row + rows).min(max_row + 1) {
        let col = col.min(max_col);
        let end = (col + cols).min(max_col + 1);
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print("█".repeat((end - col) as usize)))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, vp.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← ↑ ↓ → / W A S D : Move   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", score(state));
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Green),
        ("R - Restart  Q - Quit", Color::White),
    ];

    let cx = vp.width / 2;
    let start_row = (vp.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
