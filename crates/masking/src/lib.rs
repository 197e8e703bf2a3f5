//! Cutout masking core - interactive raster mask editing
//!
//! This crate provides the mask/cutout editor behind the meme publisher's
//! background-removal flow:
//! - [`surface`] - working and pristine RGBA pixel buffers
//! - [`view`] - viewport/buffer transform with fit, zoom, and pan
//! - [`brush`] - stamp engine for stroke interpolation
//! - [`composite`] - erase and restore circle-stamp operations
//! - [`lasso`] - freehand keep-only region selection
//! - [`history`] - bounded snapshot stack for undo/redo
//! - [`loader`] / [`export`] - image decode and PNG export boundaries
//! - [`session`] - the editing session driven by the host shell

pub mod brush;
pub mod composite;
pub mod constants;
pub mod error;
pub mod export;
pub mod history;
pub mod lasso;
pub mod loader;
pub mod session;
pub mod surface;
pub mod types;
pub mod view;

pub use brush::*;
pub use composite::*;
pub use constants::*;
pub use error::*;
pub use export::*;
pub use history::*;
pub use lasso::*;
pub use loader::*;
pub use session::*;
pub use surface::*;
pub use types::*;
pub use view::*;
