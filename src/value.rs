use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{DEFAULT_PRECISION, MAX_PRECISION};

/// Unit tag carried by a [`Number`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    None,
    Percent,
    /// Any other unit, carried through untouched (`px`, `deg`, `em`, ...).
    Other(String),
}

impl Unit {
    pub fn as_str(&self) -> &str {
        match self {
            Unit::None => "",
            Unit::Percent => "%",
            Unit::Other(unit) => unit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Number {
    pub value: f64,
    pub unit: Unit,
}

impl Number {
    pub fn unitless(value: f64) -> Self {
        Number { value, unit: Unit::None }
    }

    pub fn percent(value: f64) -> Self {
        Number { value, unit: Unit::Percent }
    }

    pub fn with_unit(value: f64, unit: impl Into<String>) -> Self {
        Number { value, unit: Unit::Other(unit.into()) }
    }

    pub fn is_unitless(&self) -> bool {
        self.unit == Unit::None
    }

    /// Renders the value rounded to `precision` decimal places, trailing zeros dropped.
    ///
    /// `precision` is capped at [`MAX_PRECISION`].
    pub fn to_css(&self, precision: usize) -> String {
        let precision = precision.min(MAX_PRECISION);
        let factor = 10f64.powi(precision as i32);
        let scaled = self.value * factor;
        let mut value = if scaled.is_finite() {
            scaled.round() / factor
        } else {
            self.value
        };
        if value == 0.0 {
            // no "-0"
            value = 0.0;
        }
        let mut out = format!("{:.*}", precision, value);
        if out.contains('.') {
            let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
            out.truncate(trimmed);
        }
        out.push_str(self.unit.as_str());
        out
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(DEFAULT_PRECISION))
    }
}

/// An RGB color. Channels are `u8`, so they always lie in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Script value exchanged with the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Number(Number),
    Color(Color),
    String(String),
}

impl Value {
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// CSS text for the value, numbers rounded to `precision` decimal places.
    pub fn to_css(&self, precision: usize) -> String {
        match self {
            Value::Number(number) => number.to_css(precision),
            Value::Color(color) => color.to_hex(),
            Value::String(s) => s.clone(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::String(_) => "string",
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Value::Number(number)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => number.fmt(f),
            Value::Color(color) => color.fmt(f),
            Value::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
