pub mod common;
pub mod sync;

pub use common::SyncOptions;
pub use sync::SyncCommand;
