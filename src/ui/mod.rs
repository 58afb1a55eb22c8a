//! Rendering bundles for the terminal

pub mod display;

pub use display::{render_bundle, render_bundles};
