pub mod config;
pub mod convert;

#[cfg(not(target_arch = "wasm32"))]
pub mod records;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
