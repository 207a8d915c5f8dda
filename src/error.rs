// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidArgument(String),     // Bad size, base or resolution string
    ResourceUnavailable(String), // The window could not be opened (no display?)
    WindowUpdate(String),        // Pushing a frame to the window failed
    NotCreated,                  // `create` has not been called yet
    WindowClosed,                // The window is gone; nothing left to pump
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(s) => write!(f, "Invalid argument: {s}"),
            Error::ResourceUnavailable(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::NotCreated => write!(f, "Window has not been created yet"),
            Error::WindowClosed => write!(f, "Window has been closed"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_stage() {
        let e = Error::InvalidArgument("size must be positive".into());
        assert_eq!(e.to_string(), "Invalid argument: size must be positive");
        assert_eq!(
            Error::ResourceUnavailable("no display".into()).to_string(),
            "Window init error: no display"
        );
        assert_eq!(Error::WindowClosed.to_string(), "Window has been closed");
    }
}
