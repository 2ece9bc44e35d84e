//! All game entity types — pure data, no logic.

/// Motion heuristic assigned to an enemy at spawn time.
#[derive(Clone, Debug, PartialEq)]
pub enum EnemyKind {
    /// Heads straight for the player.
    Chaser,
    /// Chases with a sinusoidal lateral wobble.
    Zigzag,
    /// Chases while orbiting on an internal phase angle.
    Circle,
    /// Chases at 1.1× speed — a crude overshoot, no real extrapolation.
    Predict,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Boolean key states sampled once per tick by the input layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Only honored while the session is in `GameOver`.
    pub restart: bool,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
    /// Internal oscillation phase — used only by the `Circle` variant.
    pub angle: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
///
/// The score is intentionally not a field: it is always derived from
/// `frame` (see `compute::score`).
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Insertion-ordered roster; grows (never shrinks) within a session.
    pub enemies: Vec<Enemy>,
    /// Current enemy speed scalar — monotonically non-decreasing.
    pub enemy_speed: f32,
    /// Ticks elapsed since session start.
    pub frame: u64,
    pub level: u32,
    pub status: GameStatus,
}
