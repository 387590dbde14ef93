//! The main loop: poll, simulate, draw, present, pace.

use std::time::Duration;

use log::{info, warn};

use crate::consts::MIN_FRAME_TIME_MS;
use crate::game::{Game, Side};
use crate::render::framebuffer::{FrameBuffer, BYTES_PER_PIXEL};
use crate::window::{FrameLimiter, Surface, WindowEvent};

/// Run `game` on `surface` until a quit event arrives.
///
/// A frame the surface fails to show is logged and dropped; quitting is the
/// only way out of the loop.
///
/// Each frame's physics uses the duration of the frame before it, so the
/// first frame simulates zero time.
pub fn run<S: Surface>(surface: &mut S, game: &mut Game) {
    let court = game.court();
    let (width, height) = (court.width as u32, court.height as u32);
    let mut pixels = vec![0u8; width as usize * height as usize * BYTES_PER_PIXEL];
    let mut limiter = FrameLimiter::new(Duration::from_millis(MIN_FRAME_TIME_MS));
    let mut dt = 0.0;

    show(surface, &pixels, width as usize * BYTES_PER_PIXEL);

    loop {
        limiter.begin_frame();

        if surface.poll_events() == WindowEvent::Quit {
            let scores = game.scores();
            info!(
                "quit requested, final score {} - {}",
                scores.get(Side::Left),
                scores.get(Side::Right)
            );
            return;
        }

        let input = surface.input_state();
        let mut fb = FrameBuffer::new(&mut pixels, width, height);
        game.frame(&input, dt, &mut fb);
        show(surface, fb.as_bytes(), fb.pitch());

        dt = limiter.end_frame();
    }
}

fn show<S: Surface>(surface: &mut S, pixels: &[u8], pitch: usize) {
    if let Err(e) = surface.present(pixels, pitch) {
        warn!("present failed: {e}");
    }
}
