//! Two small, unrelated utilities:
//!
//! - [`gen_random_values`]: a `size × size` grid of uniform values in `[base, base + 1)`.
//! - [`App`]: a window with one centered button, a `clicked` flag and a
//!   manual, one-frame-at-a-time [`App::update`].

pub mod app;
pub mod draw;
pub mod error;
pub mod headless;
pub mod random;
pub mod surface;
pub mod types;
pub mod widget;
pub mod window;

pub use app::{App, DEFAULT_BUTTON_TEXT};
pub use error::Error;
pub use random::{Matrix, gen_random_values, gen_random_values_with};
pub use types::Resolution;
