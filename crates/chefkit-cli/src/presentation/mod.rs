//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no network or filesystem work.

pub mod console;
pub mod inventory;

pub use console::ConsoleEmitter;
pub use inventory::format_inventory;
