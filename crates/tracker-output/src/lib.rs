//! SQL output for `TrackingLog` imports.
//!
//! Rows are rendered as tuples for the target dialect and grouped into
//! `INSERT ... VALUES` statements of bounded size, written either to one
//! file or to one file per statement.

mod error;
mod literal;
mod naming;
mod shard;
mod writer;

// === Error Types ===
pub use error::{OutputError, Result};

// === Rendering ===
pub use literal::{
    SqlRenderer, bool_literal, escape_text, quote_identifier, table_reference, text_literal,
    timestamp_literal, uuid_literal,
};

// === Writers ===
pub use shard::{WrittenFile, shard_count, shard_file_name, shard_paths, write_sharded};
pub use writer::{BatchWriter, WriteStats, create_file, render_script, write_sql_file};

// === Output Locations ===
pub use naming::{OutputLayout, input_stem};
