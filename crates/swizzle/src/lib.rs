//! Build-time generator for vector swizzle accessors.
//!
//! The alias table maps letters of the `xyzw`, `rgba` and `stpq` groups to
//! component indices, the enumerator lists every index tuple an accessor may
//! select, and the emitter turns both into Rust source to be `include!`d by
//! the vector crate. Invalid patterns never reach the output: they are
//! reported as a [`SwizzleError`] while generating.

pub mod alias;
pub mod config;
pub mod emit;
pub mod error;
pub mod pattern;

pub use alias::{parse, AliasGroup};
pub use config::GeneratorConfig;
pub use emit::{generate, Accessor};
pub use error::{Result, SwizzleError};
pub use pattern::{read_patterns, write_patterns, Dimension, Pattern};
