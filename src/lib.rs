//! Converts Box2D editor rigid body JSON into the layout the destsol loader reads.

pub mod cli;
pub mod convert;
pub mod error;
pub mod ser;

pub use crate::convert::{convert_file, normalize};
pub use crate::error::{ConvertError, Result, SchemaViolation};
