// src/lib.rs

#[macro_use]
pub mod macros;

pub mod api;
pub mod config;
pub mod core;
pub mod errors;
pub mod locate;
pub mod locator;

#[cfg(feature = "cli")]
pub mod cli;

pub use api::{find, find_first, Params};
pub use errors::LocateError;
pub use locator::Locator;
