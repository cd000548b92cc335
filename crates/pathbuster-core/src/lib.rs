//! pathbuster Core - Foundation types and pure scan logic
//!
//! This crate provides the building blocks shared by the engine and the CLI:
//! - `Target`: a normalized scan target and its probe bases
//! - `FoundEntry`: a recorded discovery (URL + status)
//! - Candidate URL construction and extension normalization
//! - Wordlist and targets-file readers
//! - `Error`/`Result`: workspace-wide error handling

pub mod candidate;
pub mod entry;
pub mod error;
pub mod target;
pub mod wordlist;

// Re-export commonly used types at crate root
pub use candidate::{build_candidates, normalize_extension, parse_extensions};
pub use entry::FoundEntry;
pub use error::{Error, Result};
pub use target::Target;
