//! core
//!
//! Core domain types and configuration for Ahnentafel.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Sosa, Daboville, Sex
//! - [`name`] - GEDCOM personal-name parsing
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Name parsing is total; numeric parsing validates at construction
//! - Everything here is pure and synchronous

pub mod config;
pub mod name;
pub mod types;
