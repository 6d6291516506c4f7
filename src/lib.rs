//! Color and percentage functions for a stylesheet script evaluator.
//!
//! The evaluator reaches these either directly ([`functions::hsl`],
//! [`functions::percentage`]) or by name through [`registry::call`].

pub mod color;
pub mod config;
pub mod error;
pub mod functions;
pub mod registry;
pub mod value;

pub use config::Config;
pub use error::{Error, Result};
pub use functions::{hsl, percentage};
pub use value::{Color, Number, Unit, Value};
