// The seam between the widget layer and whatever actually shows pixels.
// `window::Minifb` opens a real OS window; `headless::Headless` keeps
// everything in memory so the app can be driven from tests.

use crate::error::Error;
use crate::types::{FrameBuffer, Resolution};

/// Mouse and ESC state sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    /// Pointer position in window pixels; None when outside the window.
    pub mouse: Option<(f32, f32)>,
    pub left_down: bool,
    /// ESC held; the host decides whether that means quit.
    pub escape: bool,
}

impl InputState {
    /// Pointer position snapped to whole pixels.
    pub fn mouse_pixel(&self) -> Option<(i32, i32)> {
        self.mouse.map(|(x, y)| (x.floor() as i32, y.floor() as i32))
    }
}

/// Opens surfaces. One per app, used once per `create`.
pub trait Toolkit {
    type Surface: Surface;

    fn open(&mut self, title: &str, resolution: &Resolution) -> Result<Self::Surface, Error>;
}

/// An open window.
pub trait Surface {
    fn size(&self) -> (usize, usize);

    /// False once the user closed the window.
    fn is_open(&self) -> bool;

    /// Input as of the last `present`.
    fn input(&self) -> InputState;

    /// Show `frame` and process pending window events once.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;
}
