//! The two kinds of things on the court: the ball and the paddles.
//!
//! Both are plain data with a position; they share no behavior beyond each
//! knowing how to update and draw itself.

mod ball;
mod paddle;

pub use ball::Ball;
pub use paddle::Paddle;

use crate::math::vec2::Vec2;

/// The playing area, in pixels. Origin is the top-left corner, y grows down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
