//! In-memory toolkit with scripted input.
//!
//! Nothing is shown on screen. Tests (and hosts without a display) move the
//! pointer and press the mouse through [`HeadlessSurface`], then inspect the
//! last frame that was presented.

use crate::error::Error;
use crate::surface::{InputState, Surface, Toolkit};
use crate::types::{FrameBuffer, Resolution};

/// Opens [`HeadlessSurface`]s.
#[derive(Clone, Debug, Default)]
pub struct Headless {
    /// When set, `open` fails as if no display were available.
    pub unavailable: bool,
}

impl Headless {
    /// A toolkit whose `open` always fails.
    pub fn unavailable() -> Self {
        Self { unavailable: true }
    }
}

impl Toolkit for Headless {
    type Surface = HeadlessSurface;

    fn open(&mut self, title: &str, resolution: &Resolution) -> Result<HeadlessSurface, Error> {
        if self.unavailable {
            return Err(Error::ResourceUnavailable(format!("no display for {title:?}")));
        }
        Ok(HeadlessSurface {
            title: title.to_owned(),
            resolution: *resolution,
            open: true,
            input: InputState::default(),
            last_frame: None,
            frames_presented: 0,
        })
    }
}

#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    title: String,
    resolution: Resolution,
    open: bool,
    input: InputState,
    last_frame: Option<FrameBuffer>,
    frames_presented: usize,
}

impl HeadlessSurface {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn move_mouse(&mut self, x: f32, y: f32) {
        self.input.mouse = Some((x, y));
    }

    /// Pointer left the window.
    pub fn leave(&mut self) {
        self.input.mouse = None;
    }

    pub fn press(&mut self) {
        self.input.left_down = true;
    }

    pub fn release(&mut self) {
        self.input.left_down = false;
    }

    /// Hold or let go of ESC.
    pub fn set_escape(&mut self, held: bool) {
        self.input.escape = held;
    }

    /// Simulates the user closing the window.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last_frame.as_ref()
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> (usize, usize) {
        (self.resolution.width, self.resolution.height)
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn input(&self) -> InputState {
        self.input
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        if !self.open {
            return Err(Error::WindowUpdate("surface is closed".into()));
        }
        if (frame.width, frame.height) != self.size() {
            return Err(Error::WindowUpdate(format!(
                "frame is {}x{}, surface is {}",
                frame.width, frame.height, self.resolution
            )));
        }
        self.last_frame = Some(frame.clone());
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unavailable_toolkit_refuses_to_open() {
        let err = Headless::unavailable().open("tk", &Resolution::new(10, 10)).unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable(_)));
    }

    #[test]
    fn present_checks_frame_size() {
        let mut surface = Headless::default().open("tk", &Resolution::new(4, 2)).unwrap();
        assert!(surface.present(&FrameBuffer::new(2, 2, 0)).is_err());
        surface.present(&FrameBuffer::new(4, 2, 5)).unwrap();
        assert_eq!(surface.frames_presented(), 1);
        assert_eq!(surface.last_frame(), Some(&FrameBuffer::new(4, 2, 5)));
    }

    #[test]
    fn scripted_input_is_reported() {
        let mut surface = Headless::default().open("tk", &Resolution::new(4, 2)).unwrap();
        surface.move_mouse(1.5, 1.0);
        surface.press();
        assert_eq!(surface.input(), InputState { mouse: Some((1.5, 1.0)), left_down: true, escape: false });
        surface.release();
        surface.leave();
        assert_eq!(surface.input(), InputState::default());
    }
}
