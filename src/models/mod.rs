//! Data models for the volume bot
//!
//! Result and data transfer structs shared by commands and services.

pub mod address;
pub mod volume;

pub use address::AccountAddress;
pub use volume::{VolumeOutcome, VolumeReport};
