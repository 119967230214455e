//! Typed request bodies and response shapes for the endpoint catalog.

pub mod body;
pub mod response;

pub use body::*;
pub use response::*;
