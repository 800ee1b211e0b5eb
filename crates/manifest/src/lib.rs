//! Workspace manifest maintenance for the milas plugin workspace
//!
//! Provides the manifest document model and the operations the
//! workspace-manager tool performs: ensuring the plugin sub-projects are
//! listed in `workspace.members`, and renaming the plugin-manager package
//! across member manifests after template instantiation.
//!
//! The whole document is loaded, mutated in memory, and written back; only
//! the fields an operation names are touched.

mod document;
mod error;
mod members;
mod rename;

pub use document::Manifest;
pub use error::{Error, Result};
pub use members::{ensure_members, MemberOutcome, MemberReport};
pub use rename::{rename_dependency, rename_package, DEPENDENCY_SECTIONS};
