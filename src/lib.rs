//! Ahnentafel - genealogical name derivation and pedigree numbering
//!
//! Ahnentafel is a library and single-binary tool (`ahn`) for the two rule
//! engines behind pedigree charts: surname traditions (how names propagate
//! between relatives under a cultural convention) and ancestor numbering
//! (Sosa-Stradonitz and d'Aboville arithmetic, with kinship labels).
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engines)
//! - [`core`] - Domain types, name parsing, and configuration
//! - [`numbering`] - Sosa-Stradonitz / d'Aboville arithmetic
//! - [`kinship`] - Kinship naming behind a locale-keyed trait
//! - [`tradition`] - Surname traditions behind a capability trait
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. Invalid Sosa numbers and d'Aboville paths are unrepresentable
//! 2. Name derivation is total: malformed input degrades, it never fails
//! 3. Every engine operation is pure and deterministic
//! 4. Locale and tradition are explicit parameters, never ambient state

pub mod cli;
pub mod core;
pub mod kinship;
pub mod numbering;
pub mod tradition;
pub mod ui;
