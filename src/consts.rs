//! Compile-time tunables. The window size is fixed; there is no config file.

pub const WINDOW_TITLE: &str = "Pong";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

pub const BALL_RADIUS: f32 = 20.0;
pub const BALL_SPEED: f32 = 400.0;

pub const PADDLE_WIDTH: f32 = 20.0;
pub const PADDLE_HEIGHT: f32 = 100.0;
pub const PADDLE_SPEED: f32 = 400.0;
/// Horizontal distance of each paddle's center from its side of the window.
pub const PADDLE_INSET: f32 = 100.0;

pub const SCORE_GLYPH_SIZE: i32 = 20;
pub const SCORE_Y: f32 = 75.0;
/// Horizontal distance of each score from its side of the window.
pub const SCORE_INSET: f32 = 200.0;

/// Frames shorter than this are padded with a sleep.
pub const MIN_FRAME_TIME_MS: u64 = 5;
