#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

use std::cell::Cell;

pub mod contrib;
mod cursor;
mod logging;
mod scanning;
mod util;

pub mod prelude;

pub(crate) const LOG_TARGET: &str = "scanlet"; // env!("CARGO_PKG_NAME");

thread_local!(pub(crate) static LABEL: Cell<&'static str> = Cell::new(""));
