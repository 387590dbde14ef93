use super::{Court, Paddle};
use crate::colors::Color;
use crate::game::Side;
use crate::math::vec2::Vec2;
use crate::render::FrameBuffer;

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per second.
    pub velocity: Vec2,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, velocity: Vec2, color: Color) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Self {
            pos,
            radius,
            velocity,
            color,
        }
    }

    /// Filled disc: every pixel of the `2r` bounding square whose offset
    /// from the center satisfies `dx² + dy² < r²`.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        let r = self.radius;
        let steps = (2.0 * r).ceil() as i32;
        for j in 0..steps {
            let dy = -r + j as f32;
            for i in 0..steps {
                let dx = -r + i as f32;
                if dx * dx + dy * dy < r * r {
                    fb.set_pixel(
                        (self.pos.x + dx) as i32,
                        (self.pos.y + dy) as i32,
                        self.color,
                    );
                }
            }
        }
    }

    /// Advance one step and resolve collisions.
    ///
    /// Checks run in a fixed order (top/bottom walls, left/right goals, left
    /// paddle, right paddle) and each may overwrite the position a previous
    /// one corrected. Returns the side that scored, if any; the ball is then
    /// already back at the center of the court.
    pub fn update(
        &mut self,
        left: &Paddle,
        right: &Paddle,
        court: &Court,
        dt: f32,
    ) -> Option<Side> {
        self.pos += self.velocity * dt;
        let r = self.radius;
        let mut scored = None;

        if self.pos.y - r < 0.0 {
            self.pos.y = r;
            self.velocity.y = -self.velocity.y;
        }
        if self.pos.y + r > court.height {
            self.pos.y = court.height - r;
            self.velocity.y = -self.velocity.y;
        }

        if self.pos.x < 0.0 {
            scored = Some(Side::Right);
            self.pos = court.center();
        }
        if self.pos.x > court.width {
            scored = Some(Side::Left);
            self.pos = court.center();
        }

        let leading = self.pos.x - r;
        if leading < left.right() && leading > left.left() && self.within_rows_of(left) {
            self.pos.x = left.right() + r;
            self.velocity.x = -self.velocity.x;
        }

        let leading = self.pos.x + r;
        if leading > right.left() && leading < right.right() && self.within_rows_of(right) {
            self.pos.x = right.left() - r;
            self.velocity.x = -self.velocity.x;
        }

        scored
    }

    fn within_rows_of(&self, paddle: &Paddle) -> bool {
        self.pos.y > paddle.top() && self.pos.y < paddle.bottom()
    }
}
