//! The compatibility matrix and the analytics computed from it.

pub mod error;
pub mod families;
mod matrix;
pub mod pivot;
pub mod stats;

pub use error::{MatrixError, Result};
pub use families::{Family, LanguageMetadata, OTHER_FAMILY, metadata};
pub use matrix::{CompatibilityMatrix, Row};

#[cfg(test)]
pub(crate) use matrix::matrix_from;
