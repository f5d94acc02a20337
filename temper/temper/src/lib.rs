#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]

pub mod components;
pub mod config;
pub mod error;
pub mod html;
pub mod prelude;

pub use components::*;
pub use error::{Error, PaginationError};
pub use html::*;
