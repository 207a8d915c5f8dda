// Real window backend on top of minifb.
// Visual: a plain window of the requested size that shows whatever frame
// the app presents; each `present` also pumps the OS event queue once.

use crate::error::Error;
use crate::surface::{InputState, Surface, Toolkit};
use crate::types::{FrameBuffer, Resolution};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

/// Opens minifb windows.
#[derive(Clone, Copy, Debug)]
pub struct Minifb {
    /// Frame cap applied to every window; 0 disables it.
    pub target_fps: usize,
}

impl Default for Minifb {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

impl Toolkit for Minifb {
    type Surface = MinifbSurface;

    /// Create a window of exactly `resolution` pixels.
    /// Visual: a new empty window appears with the given title.
    fn open(&mut self, title: &str, resolution: &Resolution) -> Result<MinifbSurface, Error> {
        let mut window = Window::new(title, resolution.width, resolution.height, WindowOptions::default())
            .map_err(|e| Error::ResourceUnavailable(e.to_string()))?;
        if let Some((x, y)) = resolution.position {
            window.set_position(x as isize, y as isize);
        }
        window.set_target_fps(self.target_fps);
        Ok(MinifbSurface { window, width: resolution.width, height: resolution.height })
    }
}

pub struct MinifbSurface {
    window: Window, // the on-screen window you see
    width: usize,
    height: usize,
}

impl Surface for MinifbSurface {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    fn is_open(&self) -> bool {
        self.window.is_open()
    }

    fn input(&self) -> InputState {
        InputState {
            // Discard: a pointer outside the window must not hover the button.
            mouse: self.window.get_mouse_pos(MouseMode::Discard),
            left_down: self.window.get_mouse_down(MouseButton::Left),
            escape: self.window.is_key_down(Key::Escape),
        }
    }

    /// Push the pixels for this frame to the screen.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }
}
