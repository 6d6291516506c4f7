//! Built-in script functions.
//!
//! Each function is a plain Rust function over typed values plus a handler that adapts
//! it to the registry's `&[Value]` calling convention.

use crate::color::{self, Rounding};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::registry::{FunctionMap, Param, ParamKind, Signature};
use crate::value::{Color, Number, Value};

const HSL: Signature = Signature {
    name: "hsl",
    params: &[
        Param { name: "hue", kind: ParamKind::Number },
        Param { name: "saturation", kind: ParamKind::Number },
        Param { name: "lightness", kind: ParamKind::Number },
    ],
};

const PERCENTAGE: Signature = Signature {
    name: "percentage",
    params: &[Param { name: "value", kind: ParamKind::Any }],
};

pub(crate) fn declare(f: &mut FunctionMap) {
    f.declare(HSL, hsl_handler);
    f.declare(PERCENTAGE, percentage_handler);
}

/// Creates a color from hue (degrees), saturation and lightness (percentages).
///
/// Only the numeric payload of each argument is read; units are ignored.
pub fn hsl(hue: &Number, saturation: &Number, lightness: &Number) -> Color {
    hsl_with(hue, saturation, lightness, Rounding::default())
}

pub fn hsl_with(hue: &Number, saturation: &Number, lightness: &Number, rounding: Rounding) -> Color {
    color::hsl_to_rgb(hue.value, saturation.value, lightness.value, rounding)
}

/// Converts a unitless number to a percentage, e.g. `0.5` to `50%`.
pub fn percentage(value: &Number) -> Result<Number> {
    if !value.is_unitless() {
        return Err(Error::not_unitless());
    }
    Ok(Number::percent(value.value * 100.0))
}

fn hsl_handler(config: &Config, args: &[Value]) -> Result<Value> {
    match args {
        [Value::Number(h), Value::Number(s), Value::Number(l)] => {
            Ok(hsl_with(h, s, l, config.rounding).into())
        }
        // FunctionMap::call checks the signature before dispatching, so only direct calls get here
        _ => {
            HSL.check(args)?;
            Err(Error::WrongArity {
                name: HSL.name.to_string(),
                expected: HSL.arity(),
                given: args.len(),
            })
        }
    }
}

fn percentage_handler(_config: &Config, args: &[Value]) -> Result<Value> {
    let value = args
        .first()
        .and_then(Value::as_number)
        .ok_or_else(Error::not_unitless)?;
    percentage(value).map(Value::from)
}

#[cfg(test)]
#[path = "functions_test.rs"]
mod tests;
