// Software drawing utilities for the widget layer.
// Visual effects provided here:
// 1) Solid rectangles (window background, button face).
// 2) Tk-style bevels so the button looks raised, or sunken while held.
// 3) A tiny 5x7 bitmap font, scaled up in whole pixels, for the button label.

use crate::types::{FrameBuffer, Rect};

/// Width of a glyph cell in font pixels (5 glyph columns + 1 spacing).
const CELL_W: i32 = 6;
/// Height of a glyph in font pixels.
const GLYPH_H: i32 = 7;

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill `rect` with `color`, clipped to the framebuffer.
pub fn fill_rect(fb: &mut FrameBuffer, rect: Rect, color: u32) {
    let x0 = rect.x.max(0);
    let y0 = rect.y.max(0);
    let x1 = (rect.x + rect.width).min(fb.width as i32);
    let y1 = (rect.y + rect.height).min(fb.height as i32);
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    for y in y0..y1 {
        let row = y as usize * fb.width;
        fb.pixels[row + x0 as usize..row + x1 as usize].fill(color);
    }
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Draw a `depth`-pixel relief just inside `rect`.
/// Visual: raised = light top/left edge and dark bottom/right; sunken swaps them.
pub fn draw_bevel(fb: &mut FrameBuffer, rect: Rect, depth: i32, raised: bool, light: u32, dark: u32) {
    let (top_left, bottom_right) = if raised { (light, dark) } else { (dark, light) };
    let right = rect.x + rect.width - 1;
    let bottom = rect.y + rect.height - 1;
    for i in 0..depth {
        // Bottom/right first so the top/left corners win where they meet.
        draw_line(fb, rect.x + i, bottom - i, right - i, bottom - i, bottom_right);
        draw_line(fb, right - i, rect.y + i, right - i, bottom - i, bottom_right);
        draw_line(fb, rect.x + i, rect.y + i, right - i, rect.y + i, top_left);
        draw_line(fb, rect.x + i, rect.y + i, rect.x + i, bottom - i, top_left);
    }
}

/* ---------- 5x7 bitmap font ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
/// Lowercase letters share the uppercase shapes.
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Letters A..Z
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        // Punctuation
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),
        '?' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b00000,0b00100),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b00110,0b00100,0b01000),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '\'' => g!(0b00100,0b00100,0b01000,0b00000,0b00000,0b00000,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        '/' => g!(0b00001,0b00010,0b00010,0b00100,0b01000,0b01000,0b10000),
        '(' => g!(0b00010,0b00100,0b01000,0b01000,0b01000,0b00100,0b00010),
        ')' => g!(0b01000,0b00100,0b00010,0b00010,0b00010,0b00100,0b01000),

        _ => None,
    }
}

/// Size in pixels that `text` occupies at the given integer scale.
/// Unknown characters still take up a cell.
pub fn text_size(text: &str, scale: i32) -> (i32, i32) {
    let n = text.chars().count() as i32;
    if n == 0 {
        return (0, 0);
    }
    // Drop the trailing spacing column after the last glyph.
    ((n * CELL_W - 1) * scale, GLYPH_H * scale)
}

/// Draw a single glyph with its top-left corner at (x,y).
fn draw_char(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32, scale: i32) {
    let Some(rows) = glyph5x7(ch) else { return };
    for (ry, rowbits) in rows.iter().enumerate() {
        for rx in 0..5 {
            if (rowbits & (1 << (4 - rx))) != 0 {
                let cell = Rect {
                    x: x + rx * scale,
                    y: y + ry as i32 * scale,
                    width: scale,
                    height: scale,
                };
                fill_rect(fb, cell, color);
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs, each font pixel a `scale × scale` block.
pub fn draw_text(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32, scale: i32) {
    for ch in text.chars() {
        draw_char(fb, x, y, ch, color, scale);
        x += CELL_W * scale;
    }
}
