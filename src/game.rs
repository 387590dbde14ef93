//! Game state and the per-frame update/draw sequence.
//!
//! The [`Game`] struct owns both paddles, the ball, the score tally and the
//! serve/rally phase. Nothing here touches the display; a frame is produced
//! by drawing into a [`FrameBuffer`] handed in by the caller.

use log::debug;

use crate::colors::{self, Color};
use crate::consts;
use crate::entity::{Ball, Court, Paddle};
use crate::input::InputState;
use crate::math::vec2::Vec2;
use crate::render::{draw_number, FrameBuffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Whether the ball is in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Ball frozen at center until the serve key is pressed.
    #[default]
    Serving,
    Rallying,
}

/// Points per side. Only ever goes up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    left: u32,
    right: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

pub struct Game {
    court: Court,
    /// Player-controlled.
    pub left: Paddle,
    /// Computer-controlled.
    pub right: Paddle,
    pub ball: Ball,
    scores: Scores,
    phase: Phase,
    score_color: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Court::new(
            consts::WINDOW_WIDTH as f32,
            consts::WINDOW_HEIGHT as f32,
        ))
    }
}

impl Game {
    pub fn new(court: Court) -> Self {
        let paddle = |x: f32| {
            Paddle::new(
                Vec2::new(x, court.height / 2.0),
                consts::PADDLE_WIDTH,
                consts::PADDLE_HEIGHT,
                consts::PADDLE_SPEED,
                colors::WHITE,
            )
        };

        Self {
            court,
            left: paddle(consts::PADDLE_INSET),
            right: paddle(court.width - consts::PADDLE_INSET),
            ball: Ball::new(
                court.center(),
                consts::BALL_RADIUS,
                Vec2::new(consts::BALL_SPEED, consts::BALL_SPEED),
                colors::WHITE,
            ),
            scores: Scores::default(),
            phase: Phase::default(),
            score_color: colors::WHITE,
        }
    }

    pub fn court(&self) -> Court {
        self.court
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Put the ball in play. Does nothing mid-rally.
    pub fn serve(&mut self) {
        if self.phase == Phase::Serving {
            debug!("serve");
            self.phase = Phase::Rallying;
        }
    }

    fn point(&mut self, side: Side) {
        self.scores.award(side);
        self.phase = Phase::Serving;
        debug!(
            "{side:?} scores ({} - {})",
            self.scores.left, self.scores.right
        );
    }

    /// Produce one frame. `dt` is the duration of the previous frame in
    /// seconds.
    ///
    /// Paddles move in both phases. The ball only moves while rallying; a
    /// serve this frame takes effect on the next one.
    pub fn frame(&mut self, input: &InputState, dt: f32, fb: &mut FrameBuffer) {
        fb.clear();
        self.draw_scores(fb);

        self.left.update(input, &self.court, dt);
        self.right.ai_update(&self.ball, &self.court);

        self.left.draw(fb);
        self.right.draw(fb);

        match self.phase {
            Phase::Rallying => {
                if let Some(side) = self.ball.update(&self.left, &self.right, &self.court, dt) {
                    self.point(side);
                }
            }
            Phase::Serving => {
                if input.serve {
                    self.serve();
                }
            }
        }
        self.ball.draw(fb);
    }

    fn draw_scores(&self, fb: &mut FrameBuffer) {
        let y = consts::SCORE_Y;
        for (side, x) in [
            (Side::Left, consts::SCORE_INSET),
            (Side::Right, self.court.width - consts::SCORE_INSET),
        ] {
            draw_number(
                fb,
                Vec2::new(x, y),
                self.score_color,
                consts::SCORE_GLYPH_SIZE,
                self.scores.get(side),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::framebuffer::BYTES_PER_PIXEL;
    use crate::render::Digit;
    use approx::assert_relative_eq;

    const DT: f32 = 0.01;
    const SERVE: InputState = InputState {
        up: false,
        down: false,
        serve: true,
    };

    fn pixels() -> Vec<u8> {
        vec![0; (consts::WINDOW_WIDTH * consts::WINDOW_HEIGHT) as usize * BYTES_PER_PIXEL]
    }

    fn run_frame(game: &mut Game, bytes: &mut [u8], input: InputState) {
        let mut fb = FrameBuffer::new(bytes, consts::WINDOW_WIDTH, consts::WINDOW_HEIGHT);
        game.frame(&input, DT, &mut fb);
    }

    #[test]
    fn starts_serving_at_center() {
        let game = Game::default();
        assert_eq!(game.phase(), Phase::Serving);
        assert_eq!(game.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(game.left.pos, Vec2::new(100.0, 300.0));
        assert_eq!(game.right.pos, Vec2::new(700.0, 300.0));
        assert_eq!(game.scores(), Scores::default());
    }

    #[test]
    fn ball_stays_put_while_serving() {
        let mut game = Game::default();
        let mut bytes = pixels();
        for _ in 0..10 {
            run_frame(&mut game, &mut bytes, InputState::default());
        }
        assert_eq!(game.phase(), Phase::Serving);
        assert_eq!(game.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn paddles_move_while_serving() {
        let mut game = Game::default();
        let mut bytes = pixels();
        let up = InputState {
            up: true,
            ..InputState::default()
        };
        run_frame(&mut game, &mut bytes, up);
        assert_relative_eq!(game.left.pos.y, 296.0);
    }

    #[test]
    fn serve_starts_rally_on_following_frame() {
        let mut game = Game::default();
        let mut bytes = pixels();
        run_frame(&mut game, &mut bytes, SERVE);
        assert_eq!(game.phase(), Phase::Rallying);
        assert_eq!(game.ball.pos, Vec2::new(400.0, 300.0));

        run_frame(&mut game, &mut bytes, InputState::default());
        assert_relative_eq!(game.ball.pos.x, 404.0);
        assert_relative_eq!(game.ball.pos.y, 304.0);
    }

    #[test]
    fn serve_is_ignored_mid_rally() {
        let mut game = Game::default();
        game.serve();
        game.serve();
        assert_eq!(game.phase(), Phase::Rallying);
    }

    #[test]
    fn point_for_right_resets_to_serving() {
        let mut game = Game::default();
        let mut bytes = pixels();
        game.serve();
        game.ball.pos = Vec2::new(2.0, 450.0);
        game.ball.velocity = Vec2::new(-400.0, 0.0);

        run_frame(&mut game, &mut bytes, InputState::default());

        assert_eq!(game.scores().get(Side::Right), 1);
        assert_eq!(game.scores().get(Side::Left), 0);
        assert_eq!(game.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(game.phase(), Phase::Serving);
    }

    #[test]
    fn point_for_left() {
        let mut game = Game::default();
        let mut bytes = pixels();
        game.serve();
        game.ball.pos = Vec2::new(798.0, 450.0);
        game.ball.velocity = Vec2::new(400.0, 0.0);

        run_frame(&mut game, &mut bytes, InputState::default());

        assert_eq!(game.scores().get(Side::Left), 1);
        assert_eq!(game.scores().get(Side::Right), 0);
        assert_eq!(game.phase(), Phase::Serving);
    }

    #[test]
    fn ai_paddle_follows_ball() {
        let mut game = Game::default();
        let mut bytes = pixels();
        game.ball.pos.y = 222.0;
        run_frame(&mut game, &mut bytes, InputState::default());
        assert_eq!(game.right.pos.y, 222.0);
    }

    #[test]
    fn frame_draws_scores_paddles_and_ball() {
        let mut game = Game::default();
        let mut bytes = pixels();
        bytes.fill(0x7F);
        run_frame(&mut game, &mut bytes, InputState::default());
        let fb = FrameBuffer::new(&mut bytes, consts::WINDOW_WIDTH, consts::WINDOW_HEIGHT);

        // Stale contents were cleared.
        assert!(!fb.is_lit(400, 590));
        // Ball and paddles.
        assert!(fb.is_lit(400, 300));
        assert!(fb.is_lit(100, 300));
        assert!(fb.is_lit(700, 300));

        // Both scores read 0: solid top bar, hollow center.
        let zero = Digit::try_from(0u8).unwrap();
        assert!(zero.cell(1, 0));
        assert!(!zero.cell(1, 2));
        assert!(fb.is_lit(200, 35));
        assert!(!fb.is_lit(200, 75));
        assert!(fb.is_lit(600, 35));
        assert!(!fb.is_lit(600, 75));
    }
}
