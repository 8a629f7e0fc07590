//! # Pushrelay Core Library
//!
//! Routes outbound messages to end-users (push notification pages), operators
//! and group chats (external chat platform).

pub mod delivery;
pub mod error;
pub mod models;
pub mod providers;
pub mod routing;
pub mod services;

pub use delivery::{DeliveryOutcome, Dispatcher};
pub use routing::{ChatDelivery, MessageRouter};
