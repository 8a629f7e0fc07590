//! End-user push delivery: encoding, page templates, push URLs and dispatch

pub mod dispatcher;
pub mod encoding;
pub mod pretty;
pub mod push_url;
pub mod template;
pub mod transport;

pub use dispatcher::{DeliveryOutcome, Dispatcher};
pub use transport::{HttpPushTransport, PushTransport};
