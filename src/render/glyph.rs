//! Blocky bitmap digits for the score display.
//!
//! Each digit is a 3x5 grid of cells stored row-major. A set cell becomes a
//! `size` x `size` block of pixels, and the whole glyph is centered on the
//! requested position.

use std::fmt;

use super::framebuffer::FrameBuffer;
use crate::colors::Color;
use crate::math::vec2::Vec2;

pub const GLYPH_COLUMNS: i32 = 3;
pub const GLYPH_ROWS: i32 = 5;

type Glyph = [u8; (GLYPH_COLUMNS * GLYPH_ROWS) as usize];

#[rustfmt::skip]
const GLYPHS: [Glyph; 10] = [
    [
        1, 1, 1,
        1, 0, 1,
        1, 0, 1,
        1, 0, 1,
        1, 1, 1,
    ],
    [
        1, 1, 0,
        0, 1, 0,
        0, 1, 0,
        0, 1, 0,
        1, 1, 1,
    ],
    [
        1, 1, 1,
        0, 0, 1,
        0, 1, 0,
        1, 0, 0,
        1, 1, 1,
    ],
    [
        1, 1, 1,
        0, 0, 1,
        0, 1, 1,
        0, 0, 1,
        1, 1, 1,
    ],
    [
        1, 0, 1,
        1, 0, 1,
        1, 1, 1,
        0, 0, 1,
        0, 0, 1,
    ],
    [
        1, 1, 1,
        1, 0, 0,
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
    ],
    [
        1, 1, 1,
        1, 0, 0,
        1, 1, 1,
        1, 0, 1,
        1, 1, 1,
    ],
    [
        1, 1, 1,
        0, 0, 1,
        0, 0, 1,
        0, 0, 1,
        0, 0, 1,
    ],
    [
        1, 1, 1,
        1, 0, 1,
        1, 1, 1,
        1, 0, 1,
        1, 1, 1,
    ],
    [
        1, 1, 1,
        1, 0, 1,
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
    ],
];

/// A single decimal digit, guaranteed to have a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Digits of `value`, most significant first.
    pub fn decompose(mut value: u32) -> Vec<Digit> {
        let mut digits = vec![Digit((value % 10) as u8)];
        value /= 10;
        while value > 0 {
            digits.push(Digit((value % 10) as u8));
            value /= 10;
        }
        digits.reverse();
        digits
    }

    /// Whether the cell at (`column`, `row`) of this digit's grid is filled.
    pub fn cell(self, column: i32, row: i32) -> bool {
        if !(0..GLYPH_COLUMNS).contains(&column) || !(0..GLYPH_ROWS).contains(&row) {
            return false;
        }
        GLYPHS[self.0 as usize][(row * GLYPH_COLUMNS + column) as usize] == 1
    }
}

/// Returned when a value has no single-digit glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDigit(pub u8);

impl fmt::Display for InvalidDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no glyph for digit {}", self.0)
    }
}

impl std::error::Error for InvalidDigit {}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < GLYPHS.len() {
            Ok(Digit(value))
        } else {
            Err(InvalidDigit(value))
        }
    }
}

/// Draw one digit centered on `pos`, each grid cell `size` pixels square.
pub fn draw_digit(fb: &mut FrameBuffer, pos: Vec2, color: Color, size: i32, digit: Digit) {
    let origin_x = pos.x as i32 - (size * GLYPH_COLUMNS) / 2;
    let mut x = origin_x;
    let mut y = pos.y as i32 - (size * GLYPH_ROWS) / 2;

    for (i, &cell) in GLYPHS[digit.0 as usize].iter().enumerate() {
        if cell == 1 {
            fb.fill_rect(x, y, size, size, color);
        }
        x += size;
        if (i as i32 + 1) % GLYPH_COLUMNS == 0 {
            x = origin_x;
            y += size;
        }
    }
}

/// Draw a non-negative number centered on `pos`.
///
/// Multi-digit values are laid out left to right with a one-cell gap
/// between glyphs, and the group as a whole is centered.
pub fn draw_number(fb: &mut FrameBuffer, pos: Vec2, color: Color, size: i32, value: u32) {
    let digits = Digit::decompose(value);
    let advance = ((GLYPH_COLUMNS + 1) * size) as f32;
    let total_width = digits.len() as f32 * advance - size as f32;
    let first_center = pos.x - total_width / 2.0 + (GLYPH_COLUMNS * size) as f32 / 2.0;

    for (i, &digit) in digits.iter().enumerate() {
        let center = Vec2::new(first_center + i as f32 * advance, pos.y);
        draw_digit(fb, center, color, size, digit);
    }
}
