//! The GUI wrapper: one window, one centered button, one `clicked` flag.
//!
//! Nothing here loops. The host calls [`App::update`] once per frame, and
//! each call reads input, lets the button react, redraws and presents,
//! which pumps the window's events exactly once.
//!
//! ```no_run
//! use hello_button::App;
//!
//! let mut app = App::new();
//! app.create("800x600")?;
//! while app.is_open() && !app.esc_pressed() && !app.clicked() {
//!     app.update()?;
//! }
//! # Ok::<(), hello_button::Error>(())
//! ```

use crate::error::Error;
use crate::surface::{Surface, Toolkit};
use crate::types::{FrameBuffer, Resolution};
use crate::widget::{self, Button};
use crate::window::Minifb;
use std::cell::Cell;
use std::rc::Rc;

/// Label used by [`App::create`].
pub const DEFAULT_BUTTON_TEXT: &str = "Hello Mojo!";
pub const WINDOW_TITLE: &str = "hello-button";
/// Window background; same grey as the idle button face.
pub const BACKGROUND: u32 = widget::FACE;

pub struct App<T: Toolkit = Minifb> {
    toolkit: T,
    surface: Option<T::Surface>,
    resolution: Option<Resolution>,
    button: Option<Button>,
    frame: FrameBuffer,
    // Shared with the button's callback; only ever goes false -> true.
    clicked: Rc<Cell<bool>>,
}

impl App<Minifb> {
    /// An unopened wrapper backed by a real minifb window.
    pub fn new() -> Self {
        Self::with_toolkit(Minifb::default())
    }
}

impl Default for App<Minifb> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Toolkit> App<T> {
    pub fn with_toolkit(toolkit: T) -> Self {
        Self {
            toolkit,
            surface: None,
            resolution: None,
            button: None,
            frame: FrameBuffer::new(0, 0, BACKGROUND),
            clicked: Rc::new(Cell::new(false)),
        }
    }

    /// Open the window at `res` ("WIDTHxHEIGHT", optionally "+X+Y") and place
    /// the default button in its center.
    pub fn create(&mut self, res: &str) -> Result<(), Error> {
        let resolution: Resolution = res.parse()?;
        self.create_with_resolution(resolution)
    }

    /// Same as [`App::create`] with an already parsed geometry.
    /// An existing window is closed first.
    pub fn create_with_resolution(&mut self, resolution: Resolution) -> Result<(), Error> {
        resolution.validate()?;
        self.close();
        let surface = self.toolkit.open(WINDOW_TITLE, &resolution)?;
        let (width, height) = surface.size();
        log::debug!("opened {width}x{height} window");

        self.surface = Some(surface);
        self.resolution = Some(resolution);
        self.frame = FrameBuffer::new(width, height, BACKGROUND);
        self.create_button(DEFAULT_BUTTON_TEXT)
    }

    /// Place a button labelled `label` at the window center, replacing any
    /// previous one. Activating it sets [`App::clicked`].
    pub fn create_button(&mut self, label: &str) -> Result<(), Error> {
        let surface = self.surface.as_ref().ok_or(Error::NotCreated)?;
        let (width, height) = surface.size();

        let flag = Rc::clone(&self.clicked);
        let mut button = Button::new(label, move || mark_clicked(&flag));
        button.place_centered(width, height);
        log::debug!("button {label:?} placed at {:?}", button.rect());

        self.button = Some(button);
        Ok(())
    }

    /// The button callback. Idempotent.
    pub fn click(&mut self) {
        mark_clicked(&self.clicked);
    }

    pub fn clicked(&self) -> bool {
        self.clicked.get()
    }

    /// Pump one frame: input, button, redraw, present.
    ///
    /// # Errors
    ///
    /// [`Error::NotCreated`] before [`App::create`], [`Error::WindowClosed`]
    /// once the window is gone, and whatever presenting the frame reports.
    pub fn update(&mut self) -> Result<(), Error> {
        let Some(surface) = self.surface.as_mut() else {
            return Err(if self.resolution.is_some() { Error::WindowClosed } else { Error::NotCreated });
        };
        if !surface.is_open() {
            return Err(Error::WindowClosed);
        }

        let input = surface.input();
        if let Some(button) = self.button.as_mut() {
            button.handle(input);
        }

        self.frame.fill(BACKGROUND);
        if let Some(button) = &self.button {
            button.render(&mut self.frame);
        }
        surface.present(&self.frame)
    }

    /// True while a window exists and the user has not closed it.
    pub fn is_open(&self) -> bool {
        self.surface.as_ref().is_some_and(|s| s.is_open())
    }

    /// True while ESC is held down in the window.
    pub fn esc_pressed(&self) -> bool {
        self.surface.as_ref().is_some_and(|s| s.input().escape)
    }

    /// Release the window. Later `update` calls report [`Error::WindowClosed`].
    pub fn close(&mut self) {
        if self.surface.take().is_some() {
            log::debug!("window closed");
        }
        self.button = None;
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub fn button(&self) -> Option<&Button> {
        self.button.as_ref()
    }

    pub fn button_label(&self) -> Option<&str> {
        self.button.as_ref().map(Button::label)
    }

    pub fn surface(&self) -> Option<&T::Surface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut T::Surface> {
        self.surface.as_mut()
    }
}

fn mark_clicked(flag: &Cell<bool>) {
    if !flag.replace(true) {
        log::info!("button clicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::Headless;

    #[test]
    fn starts_unclicked_and_unopened() {
        let app = App::new();
        assert!(!app.clicked());
        assert!(!app.is_open());
        assert_eq!(app.resolution(), None);
        assert_eq!(app.button_label(), None);
    }

    #[test]
    fn click_is_idempotent() {
        let mut app = App::new();
        app.click();
        assert!(app.clicked());
        app.click();
        assert!(app.clicked());
    }

    #[test]
    fn needs_a_window_first() {
        let mut app = App::new();
        assert_eq!(app.update(), Err(Error::NotCreated));
        assert_eq!(app.create_button("Hi"), Err(Error::NotCreated));
    }

    #[test]
    fn bad_geometry_is_rejected_before_opening() {
        let mut app = App::with_toolkit(Headless::unavailable());
        // Parse fails first, so the unavailable toolkit is never asked.
        assert!(matches!(app.create("800by600"), Err(Error::InvalidArgument(_))));
        assert!(matches!(app.create("800x600"), Err(Error::ResourceUnavailable(_))));
        assert!(!app.is_open());
    }

    #[test]
    fn close_releases_the_window() {
        let mut app = App::with_toolkit(Headless::default());
        app.create("64x48").unwrap();
        assert!(app.is_open());
        app.close();
        assert!(!app.is_open());
        assert!(app.surface().is_none());
        assert_eq!(app.update(), Err(Error::WindowClosed));
    }
}
