//! HSL to RGB conversion following the CSS3 color module
//! (<http://www.w3.org/TR/css3-color/#hsl-color>).

use std::str::FromStr;

use crate::value::Color;

/// How a channel intensity scaled to `0.0..=255.0` becomes an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Ties go away from zero: 126.5 -> 127, 127.5 -> 128.
    #[default]
    HalfAwayFromZero,
    /// Ties go to the even neighbour: 126.5 -> 126, 127.5 -> 128.
    HalfEven,
}

impl Rounding {
    /// Rounds `x` to the nearest integer, resolving ties by this rule.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Rounding::HalfAwayFromZero => x.round(),
            Rounding::HalfEven => x.round_ties_even(),
        }
    }
}

impl FromStr for Rounding {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-away-from-zero" | "half-up" | "away" => Ok(Rounding::HalfAwayFromZero),
            "half-even" | "even" | "bankers" => Ok(Rounding::HalfEven),
            _ => Err(()),
        }
    }
}

/// Converts hue (degrees), saturation and lightness (percent) to an RGB color.
///
/// Saturation and lightness outside `0..=100` still produce a color; channels that
/// fall outside `0..=255` saturate at the `u8` bounds.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64, rounding: Rounding) -> Color {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;

    // h is in [0, 1), so every offset below stays within one period of [0, 1]
    [
        hue_to_channel(m1, m2, h + 1.0 / 3.0),
        hue_to_channel(m1, m2, h),
        hue_to_channel(m1, m2, h - 1.0 / 3.0),
    ]
    .map(|c| rounding.apply(c * 255.0) as u8)
    .into()
}

/// Interpolates one channel between `m1` and `m2` across the six hue sectors.
///
/// `h` is wrapped by a single +/-1 step only, so callers must keep it in `[-1, 2)`.
fn hue_to_channel(m1: f64, m2: f64, h: f64) -> f64 {
    let mut h = h;
    if h < 0.0 {
        h += 1.0;
    } else if h > 1.0 {
        h -= 1.0;
    }

    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;
