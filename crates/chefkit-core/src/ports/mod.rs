//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the download pipeline expects from
//! infrastructure. They use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP client types in any signature
//! - Errors are expressed in the port's own vocabulary
//! - Traits are object-safe so they can be injected as `Arc<dyn ...>`

mod cookbook_source;
mod event_emitter;

pub use cookbook_source::{CookbookSourceError, CookbookSourcePort, CookbookSourceResult};
pub use event_emitter::{CookbookEventEmitter, NoopCookbookEmitter};
