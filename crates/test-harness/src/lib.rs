//! Test harness for the frame generator.
//!
//! - [`stl`] — read-back parser for the binary mesh layout
//! - [`assertions`] — mesh checks with diagnostic context
//! - [`helpers`] — error type and mesh math

pub mod assertions;
pub mod helpers;
pub mod stl;

pub use helpers::HarnessError;
pub use stl::{parse_binary_stl, ParsedStl, RawTriangle};
