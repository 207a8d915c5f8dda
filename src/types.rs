// Core types shared by the window, the widgets and the drawing helpers.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A `width × height` buffer filled with `color`.
    pub fn new(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Pixel at (x,y), or None outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }
}

/// Axis-aligned rectangle in window pixels. May hang off the window edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// A `width × height` rect whose center sits on the center of the outer area.
    pub fn centered_in(outer_width: usize, outer_height: usize, width: i32, height: i32) -> Self {
        let cx = outer_width as i32 / 2;
        let cy = outer_height as i32 / 2;
        Self { x: cx - width / 2, y: cy - height / 2, width, height }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Window geometry in Tk notation: `[=]WIDTHxHEIGHT` with an optional
/// position `±X±Y`, where each offset may also be written `+-N`.
/// Both dimensions are at most [`Resolution::MAX_DIMENSION`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
    pub position: Option<(i32, i32)>,
}

impl Resolution {
    /// Largest width or height a window may have.
    pub const MAX_DIMENSION: usize = i16::MAX as usize;

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, position: None }
    }

    /// Ok when both dimensions are non-zero and within [`Resolution::MAX_DIMENSION`].
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidArgument(format!("resolution {self} has a zero dimension")));
        }
        if self.width > Self::MAX_DIMENSION || self.height > Self::MAX_DIMENSION {
            return Err(Error::InvalidArgument(format!(
                "resolution {self} exceeds {max}x{max}",
                max = Self::MAX_DIMENSION
            )));
        }
        Ok(())
    }
}

impl FromStr for Resolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::InvalidArgument(format!("resolution {s:?} is not WIDTHxHEIGHT[+X+Y]"));
        let s_trim = s.trim();
        let s_trim = s_trim.strip_prefix('=').unwrap_or(s_trim);

        // Size part runs up to the first sign, the rest is the position.
        let (size, offsets) = match s_trim.find(['+', '-']) {
            Some(at) => s_trim.split_at(at),
            None => (s_trim, ""),
        };
        let (w, h) = size.split_once('x').ok_or_else(bad)?;
        let width: usize = w.parse().map_err(|_| bad())?;
        let height: usize = h.parse().map_err(|_| bad())?;

        let position = if offsets.is_empty() {
            None
        } else {
            Some(parse_offsets(offsets).ok_or_else(bad)?)
        };

        let res = Self { width, height, position };
        res.validate()?;
        Ok(res)
    }
}

// "+10-20" -> (10, -20), "+-5+10" -> (-5, 10). Both halves must carry a sign.
fn parse_offsets(s: &str) -> Option<(i32, i32)> {
    let (x, rest) = take_offset(s)?;
    let (y, rest) = take_offset(rest)?;
    rest.is_empty().then_some((x, y))
}

// One signed offset off the front of `s`, plus whatever follows it.
fn take_offset(s: &str) -> Option<(i32, &str)> {
    let (negative, tail) = if let Some(t) = s.strip_prefix("+-") {
        (true, t)
    } else if let Some(t) = s.strip_prefix('+') {
        (false, t)
    } else {
        (true, s.strip_prefix('-')?)
    };
    let end = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
    if end == 0 {
        return None;
    }
    let n: i32 = tail[..end].parse().ok()?;
    Some((if negative { -n } else { n }, &tail[end..]))
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if let Some((x, y)) = self.position {
            write!(f, "{x:+}{y:+}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_plain_geometry() {
        let res: Resolution = "800x600".parse().unwrap();
        assert_eq!(res, Resolution::new(800, 600));
    }

    #[test]
    fn parses_geometry_with_position() {
        let res: Resolution = "320x240+10-20".parse().unwrap();
        assert_eq!(res, Resolution { width: 320, height: 240, position: Some((10, -20)) });
        assert_eq!(res.to_string(), "320x240+10-20");
    }

    #[test]
    fn rejects_malformed_geometry() {
        for bad in [
            "", "800", "800x", "x600", "0x600", "800x0", "800X600", "-800x600", "800x600+10",
            "800x600++10+2", "800x600+--5+1", "800x600+5+6+7", "axb", "==800x600",
            "4294967296x4294967297", "40000x10", "10x32768",
        ] {
            assert!(
                matches!(bad.parse::<Resolution>(), Err(Error::InvalidArgument(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn parses_tk_offset_variants() {
        let res: Resolution = "=200x100+-5+10".parse().unwrap();
        assert_eq!(res, Resolution { width: 200, height: 100, position: Some((-5, 10)) });
        let res: Resolution = "200x100-3-4".parse().unwrap();
        assert_eq!(res.position, Some((-3, -4)));
    }

    #[test]
    fn largest_window_is_accepted() {
        let max = Resolution::MAX_DIMENSION;
        let res: Resolution = format!("{max}x{max}").parse().unwrap();
        assert_eq!(res, Resolution::new(max, max));
        assert!(Resolution::new(max + 1, 1).validate().is_err());
    }

    #[test]
    fn centered_rect_shares_the_outer_center() {
        let r = Rect::centered_in(800, 600, 120, 40);
        assert_eq!(r, Rect { x: 340, y: 280, width: 120, height: 40 });
        assert_eq!(r.center(), (400, 300));

        // Bigger than the window: still centered, just hangs off the edges.
        let r = Rect::centered_in(50, 50, 100, 20);
        assert_eq!(r.center(), (25, 25));
        assert!(r.x < 0);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect { x: 10, y: 10, width: 5, height: 5 };
        assert!(r.contains(10, 10));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 14));
        assert!(!r.contains(9, 12));
    }
}
