//! kinship::traits
//!
//! Kinship-namer trait definition.
//!
//! # Design
//!
//! Turning an ancestor walk into a human-readable label ("paternal
//! grandmother") is a localization concern, so it sits behind a trait.
//! The active locale is whatever implementation the caller passes in;
//! nothing reads ambient locale state.

use thiserror::Error;

use crate::numbering::Step;

/// Errors from kinship-namer selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KinshipError {
    /// The requested locale has no registered namer.
    #[error("unsupported locale '{locale}'; available locales: {available}")]
    UnsupportedLocale {
        /// The locale tag that was requested
        locale: String,
        /// Comma-separated list of registered locales
        available: String,
    },
}

/// Maps an ancestor walk to a localized kinship term.
///
/// Implementations decide the label for the empty walk (the root
/// individual); the built-in English namer answers `"self"`.
pub trait KinshipNamer: std::fmt::Debug {
    /// The locale tag this namer serves (e.g. `"en"`).
    fn locale(&self) -> &'static str;

    /// The kinship term for a walk in nearest-root-first order.
    fn name_for_path(&self, path: &[Step]) -> String;
}
