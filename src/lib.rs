//! A two-paddle arcade game drawn entirely on the CPU.
//!
//! Every frame is rasterized pixel by pixel into a byte buffer, and SDL2 is
//! used only to open the window, read the keyboard and show the result.
//!
//! # Quick Start
//!
//! ```ignore
//! use pongsty::prelude::*;
//!
//! let mut window = Window::new("Pong", 800, 600)?;
//! let mut game = Game::default();
//! pongsty::app::run(&mut window, &mut game);
//! ```

// Public API - exposed to library consumers
pub mod app;
pub mod colors;
pub mod consts;
pub mod entity;
pub mod game;
pub mod input;
pub mod math;
pub mod render;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use entity::{Ball, Court, Paddle};
pub use game::{Game, Phase, Scores, Side};
pub use input::InputState;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use pongsty::prelude::*;
/// ```
pub mod prelude {
    // Game
    pub use crate::entity::{Ball, Court, Paddle};
    pub use crate::game::{Game, Phase, Scores, Side};

    // Math & color
    pub use crate::colors::Color;
    pub use crate::math::vec2::Vec2;

    // Rendering
    pub use crate::render::{Digit, FrameBuffer};

    // Window & Input
    pub use crate::input::InputState;
    pub use crate::window::{FrameLimiter, Surface, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::framebuffer::BYTES_PER_PIXEL;
    pub use crate::render::{draw_number, FrameBuffer};
}
