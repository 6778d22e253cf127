//! Scaffgen Core Library
//!
//! Options model, defaulting, and validation for the scaffold generator.

pub mod error;
pub mod options;

pub use error::{ScaffoldError, ScaffoldResult};
pub use options::{Profile, ProjectOptions, ResolvedOptions, ScaffoldOptions, DEFAULT_RUNTIME};
