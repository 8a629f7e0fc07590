//! External collaborators consumed by the relay

mod chat_platform;
mod conversation_store;
mod registry;

pub use chat_platform::ChatPlatform;
pub use conversation_store::ConversationStore;
pub use registry::{ApplicationRegistry, StaticApplicationRegistry};
