use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::PixelFormatEnum;

use crate::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
}

/// Where finished frames go and where input comes from.
///
/// [`Window`] is the SDL2 implementation; the game loop only sees this trait.
pub trait Surface {
    /// Drain pending events, reporting whether the user asked to quit.
    fn poll_events(&mut self) -> WindowEvent;

    /// Keys held right now.
    fn input_state(&self) -> InputState;

    /// Upload a full RGBx frame and show it.
    fn present(&mut self, pixels: &[u8], pitch: usize) -> Result<(), String>;
}

/// Pads short frames up to a minimum duration and reports how long each
/// frame really took.
pub struct FrameLimiter {
    frame_start: Instant,
    min_frame_time: Duration,
}

impl FrameLimiter {
    pub fn new(min_frame_time: Duration) -> Self {
        Self {
            frame_start: Instant::now(),
            min_frame_time,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Sleeps if necessary to reach the minimum frame time and returns the
    /// elapsed time since [`begin_frame`](Self::begin_frame) in seconds.
    pub fn end_frame(&self) -> f32 {
        let mut elapsed = self.frame_start.elapsed();

        if elapsed < self.min_frame_time {
            std::thread::sleep(self.min_frame_time - elapsed);
            elapsed = self.frame_start.elapsed();
        }

        elapsed.as_secs_f32()
    }
}

/// SDL2 window with a streaming texture the size of the window.
///
/// Fields drop in declaration order, so the texture is released before the
/// creator it borrows from, and everything before the SDL context.
pub struct Window {
    texture: sdl2::render::Texture<'static>,
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    _sdl: sdl2::Sdl,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl.event_pump()?;

        // SAFETY: texture_creator is heap-allocated, never moved out of its
        // box, and outlives the texture because of the field order above.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        // ABGR8888 as a packed u32 is R,G,B,A in memory on little-endian hosts.
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ABGR8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            texture,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            _sdl: sdl,
        })
    }
}

impl Surface for Window {
    fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                _ => {}
            }
        }
        WindowEvent::None
    }

    fn input_state(&self) -> InputState {
        let keys = self.event_pump.keyboard_state();
        InputState {
            up: keys.is_scancode_pressed(Scancode::Up),
            down: keys.is_scancode_pressed(Scancode::Down),
            serve: keys.is_scancode_pressed(Scancode::Space),
        }
    }

    fn present(&mut self, pixels: &[u8], pitch: usize) -> Result<(), String> {
        self.texture
            .update(None, pixels, pitch)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&self.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
