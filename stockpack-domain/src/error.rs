//! Error types for stockpack-domain.
//!
//! Most package operations are total: duplicate adds, absent removals and empty queries report
//! through `bool`, `Option` or an empty `Vec`. Only operations with no meaningful answer fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageError {
    /// `remove_first` was called on a package with no entries.
    #[error("empty package: there is no first item to remove")]
    EmptyPackage,
}

/// Result type alias using PackageError.
pub type PackageResult<T> = Result<T, PackageError>;
