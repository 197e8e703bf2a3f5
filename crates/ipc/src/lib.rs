//! IPC message protocol for the Cutout editor
//!
//! Defines all message types exchanged between the masking core and the host
//! UI shell that embeds it.

pub mod error;
pub mod input;
pub mod messages;

pub use error::*;
pub use input::*;
pub use messages::*;
