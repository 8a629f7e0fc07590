//! Data models for pushrelay

pub mod configuration;
pub mod recipient;

pub use configuration::*;
pub use recipient::*;
