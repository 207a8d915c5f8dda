// The one widget we have: a push button with a click callback.
// Visual: a grey Tk-style raised button that lights up under the pointer
// and sinks while held. It fires when released over itself.

use crate::draw::{draw_bevel, draw_text, fill_rect, text_size};
use crate::surface::InputState;
use crate::types::{FrameBuffer, Rect};
use std::fmt;

pub const FACE: u32 = 0x00_D9_D9_D9;        // idle face, Tk's default background
pub const FACE_ACTIVE: u32 = 0x00_EC_EC_EC; // face under the pointer
pub const TEXT: u32 = 0x00_00_00_00;
pub const LIGHT: u32 = 0x00_FF_FF_FF;       // lit edge of the bevel
pub const SHADOW: u32 = 0x00_80_80_80;      // dark edge of the bevel

pub const FONT_SCALE: i32 = 2;
pub const BORDER: i32 = 2;
pub const PAD_X: i32 = 12;
pub const PAD_Y: i32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Hover,   // pointer over the button, mouse up
    Pressed, // armed and pointer over the button
}

pub struct Button {
    label: String,
    rect: Rect,
    state: ButtonState,
    armed: bool,   // the current press started on this button
    was_down: bool, // mouse state last frame, for press/release edges
    on_click: Box<dyn FnMut()>,
}

impl Button {
    /// A button sized to fit `label`, not yet placed anywhere.
    pub fn new(label: &str, on_click: impl FnMut() + 'static) -> Self {
        let (tw, th) = text_size(label, FONT_SCALE);
        let rect = Rect {
            x: 0,
            y: 0,
            width: tw + 2 * (PAD_X + BORDER),
            height: th + 2 * (PAD_Y + BORDER),
        };
        Self {
            label: label.to_owned(),
            rect,
            state: ButtonState::Normal,
            armed: false,
            was_down: false,
            on_click: Box::new(on_click),
        }
    }

    /// Put the button's center on the center of a `width × height` window.
    pub fn place_centered(&mut self, width: usize, height: usize) {
        self.rect = Rect::centered_in(width, height, self.rect.width, self.rect.height);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Feed one frame of input. Returns true when the button fired.
    pub fn handle(&mut self, input: InputState) -> bool {
        let inside = input
            .mouse_pixel()
            .is_some_and(|(x, y)| self.rect.contains(x, y));
        let pressed = input.left_down && !self.was_down;
        let released = !input.left_down && self.was_down;
        self.was_down = input.left_down;

        if pressed {
            self.armed = inside;
        }
        let mut fired = false;
        if released {
            if self.armed && inside {
                (self.on_click)();
                fired = true;
            }
            self.armed = false;
        }

        self.state = match (inside, self.armed, input.left_down) {
            (true, true, _) => ButtonState::Pressed,
            (true, false, false) => ButtonState::Hover,
            _ => ButtonState::Normal,
        };
        fired
    }

    /// Draw the button into the frame.
    pub fn render(&self, fb: &mut FrameBuffer) {
        let face = match self.state {
            ButtonState::Normal => FACE,
            ButtonState::Hover | ButtonState::Pressed => FACE_ACTIVE,
        };
        let sunken = self.state == ButtonState::Pressed;
        fill_rect(fb, self.rect, face);
        draw_bevel(fb, self.rect, BORDER, !sunken, LIGHT, SHADOW);

        let (tw, th) = text_size(&self.label, FONT_SCALE);
        let (cx, cy) = self.rect.center();
        // Text nudges down-right by a pixel while held.
        let nudge = i32::from(sunken);
        draw_text(fb, cx - tw / 2 + nudge, cy - th / 2 + nudge, &self.label, TEXT, FONT_SCALE);
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("rect", &self.rect)
            .field("state", &self.state)
            .field("armed", &self.armed)
            .finish_non_exhaustive()
    }
}
