//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG.
//!
//! The simulation runs in a fixed 800×600 unit arena regardless of the
//! terminal size; the display layer projects it onto cells.

use rand::Rng;

use crate::entities::{Enemy, EnemyKind, GameState, GameStatus, InputState, Player};

// ── Arena constants (sim units) ──────────────────────────────────────────────

pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 600.0;

pub const PLAYER_SIZE: f32 = 40.0;
pub const PLAYER_SPEED: f32 = 5.0;

pub const ENEMY_SIZE: f32 = 50.0;
pub const BASE_ENEMY_SPEED: f32 = 2.0;

/// Target tick rate — one tick per rendered frame.
pub const FPS: u64 = 60;

/// A level-up fires every 15 seconds of simulated time.
pub const LEVEL_UP_INTERVAL: u64 = 15 * FPS;

/// Enemy speed gained at each level-up.
pub const SPEED_STEP: f32 = 0.3;

/// Effective per-axis collision threshold: 10 units smaller than the player
/// sprite.  The enemy's own size is deliberately not part of the test —
/// kept from the original tuning.
pub const HIT_MARGIN: f32 = PLAYER_SIZE - 10.0;

// ── Motion-model tuning ──────────────────────────────────────────────────────

/// Lateral amplitude of the zigzag wobble, per axis.
const ZIGZAG_AMPLITUDE: f32 = 3.0;
/// Angular frequency applied to the millisecond time signal.
const ZIGZAG_FREQ: f32 = 0.005;
/// Phase advance per update for the orbiting variant.
const ORBIT_STEP: f32 = 0.05;
/// Orbital offset radius for the orbiting variant.
const ORBIT_RADIUS: f32 = 2.0;
/// Overshoot factor for the predicting variant.
const PREDICT_FACTOR: f32 = 1.1;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial session state: player centered, a roster of exactly
/// one freshly-randomized enemy, base speed, counters reset.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    GameState {
        player: Player {
            x: WIDTH / 2.0,
            y: HEIGHT / 2.0,
        },
        enemies: spawn_enemies(1, rng),
        enemy_speed: BASE_ENEMY_SPEED,
        frame: 0,
        level: 1,
        status: GameStatus::Playing,
    }
}

/// Spawn `count` enemies with independently random positions and kinds.
pub fn spawn_enemies(count: usize, rng: &mut impl Rng) -> Vec<Enemy> {
    (0..count)
        .map(|_| {
            let kind = match rng.gen_range(0..4) {
                0 => EnemyKind::Chaser,
                1 => EnemyKind::Zigzag,
                2 => EnemyKind::Circle,
                _ => EnemyKind::Predict,
            };
            Enemy {
                x: rng.gen_range(0.0..=(WIDTH - ENEMY_SIZE)),
                y: rng.gen_range(0.0..=(HEIGHT - ENEMY_SIZE)),
                kind,
                angle: 0.0,
            }
        })
        .collect()
}

// ── Enemy motion model ───────────────────────────────────────────────────────

/// Move one enemy toward the player according to its heuristic.
///
/// `time_ms` is the monotonically increasing time signal driving the
/// oscillation phases.  Only the `Circle` variant carries mutable internal
/// state (its phase angle), returned in the new `Enemy`.
pub fn advance_enemy(enemy: &Enemy, player: &Player, speed: f32, time_ms: f32) -> Enemy {
    let dx = player.x - enemy.x;
    let dy = player.y - enemy.y;
    let distance = dx.hypot(dy);

    // Exactly on top of the player — no direction to normalize, so the
    // enemy (phase angle included) stays put this update.
    if distance == 0.0 {
        return enemy.clone();
    }

    let nx = dx / distance;
    let ny = dy / distance;

    match enemy.kind {
        EnemyKind::Chaser => Enemy {
            x: enemy.x + speed * nx,
            y: enemy.y + speed * ny,
            ..enemy.clone()
        },
        EnemyKind::Zigzag => Enemy {
            x: enemy.x + speed * nx + (time_ms * ZIGZAG_FREQ).sin() * ZIGZAG_AMPLITUDE,
            y: enemy.y + speed * ny + (time_ms * ZIGZAG_FREQ).cos() * ZIGZAG_AMPLITUDE,
            ..enemy.clone()
        },
        EnemyKind::Circle => {
            // Phase advances before the offset is taken.
            let angle = enemy.angle + ORBIT_STEP;
            Enemy {
                x: enemy.x + speed * nx + angle.cos() * ORBIT_RADIUS,
                y: enemy.y + speed * ny + angle.sin() * ORBIT_RADIUS,
                angle,
                ..enemy.clone()
            }
        }
        EnemyKind::Predict => Enemy {
            x: enemy.x + speed * nx * PREDICT_FACTOR,
            y: enemy.y + speed * ny * PREDICT_FACTOR,
            ..enemy.clone()
        },
    }
}

// ── Collision ────────────────────────────────────────────────────────────────

/// Tolerant AABB overlap test between the player and one enemy.
/// Any single hit ends the session.
pub fn collides(player: &Player, enemy: &Enemy) -> bool {
    (player.x - enemy.x).abs() < HIT_MARGIN && (player.y - enemy.y).abs() < HIT_MARGIN
}

// ── Score ────────────────────────────────────────────────────────────────────

/// Seconds survived.  Always derived from the tick counter, never stored.
pub fn score(state: &GameState) -> u64 {
    state.frame / FPS
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, input: &InputState, rng: &mut impl Rng) -> GameState {
    // ── 0. GameOver: frozen until the restart key ────────────────────────────
    if state.status == GameStatus::GameOver {
        if input.restart {
            return init_state(rng);
        }
        return state.clone();
    }

    // ── 1. Input-driven player movement, clamped to the arena ────────────────
    let mut px = state.player.x;
    let mut py = state.player.y;
    if input.left {
        px -= PLAYER_SPEED;
    }
    if input.right {
        px += PLAYER_SPEED;
    }
    if input.up {
        py -= PLAYER_SPEED;
    }
    if input.down {
        py += PLAYER_SPEED;
    }
    let player = Player {
        x: px.clamp(0.0, WIDTH - PLAYER_SIZE),
        y: py.clamp(0.0, HEIGHT - PLAYER_SIZE),
    };

    // ── 2. Advance every enemy against the updated player ────────────────────
    // The time signal is derived from the tick counter, keeping the whole
    // step a pure function of (state, input, rng).
    let frame = state.frame + 1;
    let time_ms = frame as f32 * (1000.0 / FPS as f32);

    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| advance_enemy(e, &player, state.enemy_speed, time_ms))
        .collect();

    // ── 3. Collision check — any overlap ends the session ────────────────────
    let hit = enemies.iter().any(|e| collides(&player, e));

    // ── 4. Progression: level up every 15 seconds ────────────────────────────
    // Exact modulo equality, so this fires on exactly one frame per boundary.
    let mut enemies = enemies;
    let mut level = state.level;
    let mut enemy_speed = state.enemy_speed;
    if frame % LEVEL_UP_INTERVAL == 0 {
        level += 1;
        enemy_speed += SPEED_STEP;
        let batch = spawn_enemies(enemies.len(), rng);
        enemies.extend(batch);
    }

    GameState {
        player,
        enemies,
        enemy_speed,
        frame,
        level,
        status: if hit {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        },
    }
}
