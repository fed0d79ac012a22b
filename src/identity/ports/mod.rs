//! Port contracts for resolving callers.

pub mod directory;

pub use directory::{DirectoryError, DirectoryResult, PrincipalDirectory};
