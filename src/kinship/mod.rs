//! kinship
//!
//! Kinship naming: turning ancestor walks into human-readable terms.
//!
//! # Design
//!
//! The numbering engine produces walks ([`crate::numbering::AncestorPath`]);
//! what a walk is *called* ("maternal grandfather") is a locale concern
//! kept behind the [`KinshipNamer`] trait. Callers select a namer through
//! [`for_locale`] and pass it explicitly — there is no ambient locale
//! state.
//!
//! # Example
//!
//! ```
//! use ahnentafel::core::types::Sosa;
//! use ahnentafel::kinship::{for_locale, relationship_name};
//!
//! let namer = for_locale("en").unwrap();
//! let sosa = Sosa::new(4).unwrap();
//! assert_eq!(relationship_name(sosa, namer.as_ref()), "paternal grandfather");
//! ```

pub mod english;
pub mod mock;
pub mod traits;

pub use english::EnglishKinship;
pub use mock::PathEcho;
pub use traits::{KinshipError, KinshipNamer};

use crate::core::types::Sosa;
use crate::numbering::Step;

/// Locale tags with a registered namer.
///
/// This is the list configuration is validated against.
pub fn available_locales() -> &'static [&'static str] {
    &["en"]
}

/// Select the kinship namer for a locale tag.
///
/// # Errors
///
/// Returns `KinshipError::UnsupportedLocale` for a tag with no registered
/// namer, naming the available tags.
///
/// # Example
///
/// ```
/// use ahnentafel::kinship::for_locale;
///
/// assert!(for_locale("en").is_ok());
/// assert!(for_locale("tlh").is_err());
/// ```
pub fn for_locale(locale: &str) -> Result<Box<dyn KinshipNamer>, KinshipError> {
    match locale.to_ascii_lowercase().as_str() {
        "en" => Ok(Box::new(EnglishKinship)),
        _ => Err(KinshipError::UnsupportedLocale {
            locale: locale.to_string(),
            available: available_locales().join(", "),
        }),
    }
}

/// The kinship term for a Sosa-numbered ancestor.
///
/// Walks the ancestry path and hands it to the namer; the namer decides
/// the label for the root's empty walk.
pub fn relationship_name(sosa: Sosa, namer: &dyn KinshipNamer) -> String {
    let path: Vec<Step> = sosa.ancestry().collect();
    namer.name_for_path(&path)
}
