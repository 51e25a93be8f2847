#[macro_use]
pub mod macros;

pub mod consts;
pub mod errors;
pub mod file;
pub mod http;
pub mod multipart;

pub use errors::{Error, Result};
