//! Core application primitives (pipeline, HTTP surface)

pub mod analysis;
pub mod http;

pub use analysis::*;
pub use http::*;
