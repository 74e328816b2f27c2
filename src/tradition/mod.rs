//! tradition
//!
//! Surname traditions: cultural rule sets for deriving the names of
//! children, parents, and spouses.
//!
//! # Design
//!
//! Each tradition implements the [`SurnameTradition`] capability trait;
//! callers select a concrete variant through [`create_tradition`] by its
//! registry tag rather than importing implementations directly. All
//! derivations are pure and infallible: malformed input degrades to the
//! tradition's "nothing derivable" template.
//!
//! # Example
//!
//! ```
//! use ahnentafel::core::name::GedcomName;
//! use ahnentafel::core::types::Sex;
//! use ahnentafel::tradition::create_tradition;
//!
//! let tradition = create_tradition("spanish").unwrap();
//! let father = GedcomName::parse("Gabriel /Garcia/ /Iglesias/");
//! let mother = GedcomName::parse("Maria /Ruiz/ /Lorca/");
//! let child = tradition.new_child_names(&father, &mother, Sex::Male);
//! assert_eq!(child.name, "/Garcia/ /Ruiz/");
//! ```

mod default;
mod icelandic;
mod lithuanian;
mod matrilineal;
mod paternal;
mod patrilineal;
mod polish;
mod portuguese;
mod spanish;
pub mod traits;

pub use default::DefaultTradition;
pub use icelandic::IcelandicTradition;
pub use lithuanian::LithuanianTradition;
pub use matrilineal::MatrilinealTradition;
pub use paternal::PaternalTradition;
pub use patrilineal::PatrilinealTradition;
pub use polish::PolishTradition;
pub use portuguese::PortugueseTradition;
pub use spanish::SpanishTradition;
pub use traits::{NameTemplate, SurnameTradition};

use thiserror::Error;

/// Errors from tradition selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TraditionError {
    /// The requested tag has no registered tradition.
    #[error("unknown surname tradition '{tag}'; available traditions: {available}")]
    Unknown {
        /// The tag that was requested
        tag: String,
        /// Comma-separated list of registered tags
        available: String,
    },
}

/// Registered surname traditions.
///
/// Use [`Tradition::all`] to enumerate them, e.g. for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tradition {
    Default,
    Patrilineal,
    Matrilineal,
    Paternal,
    Spanish,
    Portuguese,
    Polish,
    Lithuanian,
    Icelandic,
}

impl Tradition {
    /// All registered traditions, in listing order.
    pub fn all() -> &'static [Tradition] {
        &[
            Tradition::Default,
            Tradition::Patrilineal,
            Tradition::Matrilineal,
            Tradition::Paternal,
            Tradition::Spanish,
            Tradition::Portuguese,
            Tradition::Polish,
            Tradition::Lithuanian,
            Tradition::Icelandic,
        ]
    }

    /// The registry tag, as used in configuration files and on the
    /// command line.
    pub fn name(&self) -> &'static str {
        match self {
            Tradition::Default => "default",
            Tradition::Patrilineal => "patrilineal",
            Tradition::Matrilineal => "matrilineal",
            Tradition::Paternal => "paternal",
            Tradition::Spanish => "spanish",
            Tradition::Portuguese => "portuguese",
            Tradition::Polish => "polish",
            Tradition::Lithuanian => "lithuanian",
            Tradition::Icelandic => "icelandic",
        }
    }

    /// Parse a tag into a tradition.
    ///
    /// # Example
    ///
    /// ```
    /// use ahnentafel::tradition::Tradition;
    ///
    /// assert_eq!(Tradition::parse("spanish"), Some(Tradition::Spanish));
    /// assert_eq!(Tradition::parse("klingon"), None);
    /// ```
    pub fn parse(tag: &str) -> Option<Tradition> {
        Tradition::all()
            .iter()
            .copied()
            .find(|t| t.name() == tag.to_ascii_lowercase())
    }

    /// Instantiate the rule set for this tradition.
    pub fn create(&self) -> Box<dyn SurnameTradition> {
        match self {
            Tradition::Default => Box::new(DefaultTradition),
            Tradition::Patrilineal => Box::new(PatrilinealTradition),
            Tradition::Matrilineal => Box::new(MatrilinealTradition),
            Tradition::Paternal => Box::new(PaternalTradition),
            Tradition::Spanish => Box::new(SpanishTradition),
            Tradition::Portuguese => Box::new(PortugueseTradition),
            Tradition::Polish => Box::new(PolishTradition),
            Tradition::Lithuanian => Box::new(LithuanianTradition),
            Tradition::Icelandic => Box::new(IcelandicTradition),
        }
    }
}

impl std::fmt::Display for Tradition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Create a tradition from its registry tag.
///
/// This is the primary entry point for commands and configuration,
/// keeping them independent of concrete implementations.
///
/// # Errors
///
/// Returns `TraditionError::Unknown` for an unregistered tag, naming the
/// valid alternatives.
pub fn create_tradition(tag: &str) -> Result<Box<dyn SurnameTradition>, TraditionError> {
    match Tradition::parse(tag) {
        Some(tradition) => Ok(tradition.create()),
        None => Err(TraditionError::Unknown {
            tag: tag.to_string(),
            available: valid_tradition_names().join(", "),
        }),
    }
}

/// Valid tradition tags for configuration validation.
pub fn valid_tradition_names() -> Vec<&'static str> {
    Tradition::all().iter().map(Tradition::name).collect()
}

/// Replace a surname's ending according to an ordered suffix table.
///
/// The first matching suffix wins, so longer suffixes must come first in
/// the table. A surname matching no suffix is returned unchanged.
pub(crate) fn inflect(surname: &str, rules: &[(&str, &str)]) -> String {
    for (suffix, replacement) in rules {
        if let Some(stem) = surname.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    surname.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod registry {
        use super::*;

        #[test]
        fn every_tag_round_trips() {
            for tradition in Tradition::all() {
                assert_eq!(Tradition::parse(tradition.name()), Some(*tradition));
            }
        }

        #[test]
        fn parse_is_case_insensitive() {
            assert_eq!(Tradition::parse("Spanish"), Some(Tradition::Spanish));
            assert_eq!(Tradition::parse("SPANISH"), Some(Tradition::Spanish));
        }

        #[test]
        fn unknown_tag() {
            assert_eq!(Tradition::parse("klingon"), None);
            assert_eq!(Tradition::parse(""), None);
        }

        #[test]
        fn created_rule_set_reports_its_tag() {
            for tradition in Tradition::all() {
                assert_eq!(tradition.create().name(), tradition.name());
            }
        }

        #[test]
        fn display_matches_name() {
            assert_eq!(Tradition::Spanish.to_string(), "spanish");
        }
    }

    mod factory {
        use super::*;

        #[test]
        fn creates_by_tag() {
            let tradition = create_tradition("icelandic").unwrap();
            assert_eq!(tradition.name(), "icelandic");
            assert!(!tradition.has_surnames());
        }

        #[test]
        fn unknown_tag_names_the_alternatives() {
            let err = create_tradition("klingon").unwrap_err();
            let TraditionError::Unknown { tag, available } = err;
            assert_eq!(tag, "klingon");
            assert!(available.contains("spanish"));
            assert!(available.contains("default"));
        }

        #[test]
        fn valid_names_match_registry() {
            let names = valid_tradition_names();
            assert_eq!(names.len(), Tradition::all().len());
            assert!(names.contains(&"paternal"));
        }
    }

    mod inflect {
        use super::*;

        #[test]
        fn first_matching_suffix_wins() {
            let rules = &[("ius", "iūtė"), ("us", "utė")];
            assert_eq!(super::super::inflect("Paulius", rules), "Pauliūtė");
            assert_eq!(super::super::inflect("Butkus", rules), "Butkutė");
        }

        #[test]
        fn no_match_passes_through() {
            assert_eq!(super::super::inflect("Smith", &[("ski", "ska")]), "Smith");
        }
    }
}
