//! Low-level rendering primitives.
//!
//! Everything here writes straight into a byte buffer on the CPU. The
//! display only ever sees the finished frame.

pub mod framebuffer;
pub mod glyph;

pub use framebuffer::FrameBuffer;
pub use glyph::{draw_digit, draw_number, Digit, InvalidDigit};
