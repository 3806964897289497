//! Component configuration sections

mod encoder;
mod namespace;

pub use encoder::*;
pub use namespace::*;
