//! Block patching of translation modules.
//!
//! Each file goes through the same steps: duplicate blocks are cut,
//! duplicate keys pruned, the block is installed when absent, and every key
//! of the language's table is upserted. The result is validated before it is
//! written.

pub mod dedup;
mod error;
pub mod install;
pub mod runner;
pub mod upsert;

pub use dedup::{
    dedupe_blocks,
    prune_duplicate_keys,
};
pub use error::PatchError;
pub use install::install_block;
pub use runner::{
    BatchReport,
    Changes,
    FileOutcome,
    FileReport,
    LanguageTable,
    Patcher,
    TextPatch,
};
pub use upsert::{
    UpsertOutcome,
    upsert_entry,
};
