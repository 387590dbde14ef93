use super::{Ball, Court};
use crate::colors::Color;
use crate::input::InputState;
use crate::math::vec2::Vec2;
use crate::render::FrameBuffer;

/// An axis-aligned paddle, positioned by its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels per second.
    pub speed: f32,
    pub color: Color,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32, speed: f32, color: Color) -> Self {
        Self {
            pos,
            width,
            height,
            speed,
            color,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn draw(&self, fb: &mut FrameBuffer) {
        fb.fill_rect(
            self.left() as i32,
            self.top() as i32,
            self.width as i32,
            self.height as i32,
            self.color,
        );
    }

    /// Move under player control.
    ///
    /// A held key only moves the paddle while the matching edge is still
    /// inside the court; the step itself is never clamped.
    pub fn update(&mut self, input: &InputState, court: &Court, dt: f32) {
        if input.up && self.top() > 0.0 {
            self.pos.y -= self.speed * dt;
        }
        if input.down && self.bottom() < court.height {
            self.pos.y += self.speed * dt;
        }
    }

    /// Computer control: jump straight to the ball's height whenever the
    /// whole paddle would still fit on the court.
    pub fn ai_update(&mut self, ball: &Ball, court: &Court) {
        let half = self.height / 2.0;
        if ball.pos.y > half && ball.pos.y < court.height - half {
            self.pos.y = ball.pos.y;
        }
    }
}
