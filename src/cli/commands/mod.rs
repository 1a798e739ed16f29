//! Command implementations.
//!
//! Each command loads the store through the configured filesystem,
//! performs one operation, and saves when something changed.

pub mod add;
pub mod backup;
pub mod completions;
pub mod delete;
pub mod import;
pub mod list;
pub mod restore;
pub mod search;

use serde::Serialize;

use crate::Result;

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value)?;
    println!("{json_output}");
    Ok(())
}
