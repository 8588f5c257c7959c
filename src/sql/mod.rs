//! Safe SQL builder: identifiers from compile-time allow-lists only, values as parameters.

mod builder;
pub use builder::*;
