//! numbering
//!
//! Ancestor-numbering arithmetic.
//!
//! # Overview
//!
//! Two complementary numbering schemes index a pedigree:
//!
//! - **Sosa-Stradonitz** numbers count ancestors: root = 1, father = 2N,
//!   mother = 2N + 1. The arithmetic lives on [`crate::core::types::Sosa`];
//!   this module adds the derived [`AncestorPath`] walk from the root to a
//!   numbered ancestor.
//! - **d'Aboville** paths count descendants by birth order per generation;
//!   see [`crate::core::types::Daboville`] for the path arithmetic
//!   (extension and the complement operation `parent`).
//!
//! All operations are pure integer/string computations with no I/O and no
//! shared state; they may be called freely from concurrent contexts.

pub mod path;

pub use path::{AncestorPath, Step};
