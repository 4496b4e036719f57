//! Options trade scatter - static 3D scatter plot of options trades
//!
//! One sphere per trade with a non-empty delta:
//! - x: visitation order
//! - y: delta
//! - z: trade time
//! - radius: volume
//! - color: underlying symbol
//!
//! `core` is UI-free and always built. The egui app is behind the `native` or
//! `wasm` feature.

pub mod core;

#[cfg(any(feature = "native", feature = "wasm"))]
pub mod app;
#[cfg(any(feature = "native", feature = "wasm"))]
pub mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web;
