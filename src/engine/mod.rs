//! Traversal, aggregation, and rate limited bulk delete over a StoreClient.

// region:    --- Modules

mod config;
mod deleter;
mod lister;
mod session;
mod throttle;
mod walker;

pub use self::config::EngineConfig;
pub use self::deleter::{BulkDeleter, DeleteReport, FailedDelete};
pub use self::lister::{list_entries, list_entries_or_empty};
pub use self::session::Session;
pub use self::throttle::Throttle;
pub use self::walker::{SkippedPath, TreeWalker, Walk};

// endregion: --- Modules
