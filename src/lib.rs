pub mod candidate;
pub mod engineer;
pub mod input;
pub mod schedule;
pub mod time;

#[cfg(feature = "wasm")]
pub mod wasm;
