//! Traverse, size, and bulk delete the folders and objects of an AWS Elemental MediaStore container.

// region:    --- Modules

pub mod consts;
pub mod engine;
mod error;
pub mod msw;
mod prelude;

pub use crate::engine::{EngineConfig, Session};
pub use crate::prelude::{Error, Result};

// endregion: --- Modules
