//! Text templates for every generated file.

pub mod payloads;
pub mod render;

pub use render::{render, Slots};
