#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod patch;

#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
