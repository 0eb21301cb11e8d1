pub mod compose;
pub mod config;
pub mod feed;
pub mod models;
pub mod session;
pub mod time;

mod memory;
pub use memory::MemorySessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use compose::{ComposeLimit, Surface, ValidationError};
pub use config::ClientConfig;
pub use feed::{Entry, Feed};
pub use models::{CommentView, PostView, RecordId, Session, SyncState, UserProfile};
pub use session::SessionStore;
