//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Sosa`] - Validated Sosa-Stradonitz ancestor number
//! - [`Daboville`] - Validated d'Aboville descendant path
//! - [`Sex`] - GEDCOM sex code (M/F/U)
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use ahnentafel::core::types::{Sosa, Daboville, Sex};
//!
//! // Valid constructions
//! let root = Sosa::new(1).unwrap();
//! let path = Daboville::new("1.2.1.").unwrap();
//! let sex: Sex = "M".parse().unwrap();
//!
//! // Invalid constructions fail at creation time
//! assert!(Sosa::new(0).is_err());
//! assert!(Daboville::new("1.2.1").is_err());
//! assert!("X".parse::<Sex>().is_err());
//! ```

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid sosa number: {0}")]
    InvalidSosa(String),

    #[error("invalid d'aboville number: {0}")]
    InvalidDaboville(String),

    #[error("invalid sex code: {0}")]
    InvalidSex(String),
}

/// A validated Sosa-Stradonitz ancestor number.
///
/// Sosa numbers index a pedigree: the root individual is 1, the father of
/// individual N is 2N, and the mother is 2N + 1. Zero is not a valid Sosa
/// number.
///
/// Arithmetic is exact `u64` arithmetic; 63 generations fit comfortably,
/// which is far beyond any real pedigree.
///
/// # Example
///
/// ```
/// use ahnentafel::core::types::Sosa;
///
/// let root = Sosa::ROOT;
/// assert_eq!(root.father().get(), 2);
/// assert_eq!(root.mother().get(), 3);
/// assert_eq!(root.father().child(), Some(root));
///
/// // Zero is rejected
/// assert!(Sosa::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Sosa(u64);

impl Sosa {
    /// The root individual of a pedigree.
    pub const ROOT: Sosa = Sosa(1);

    /// Create a new validated Sosa number.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidSosa` for zero.
    pub fn new(n: u64) -> Result<Self, TypeError> {
        if n == 0 {
            return Err(TypeError::InvalidSosa(
                "sosa numbers start at 1 (the root individual)".into(),
            ));
        }
        Ok(Self(n))
    }

    /// Get the number as a plain integer.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The Sosa number of this individual's father (2N).
    pub fn father(&self) -> Sosa {
        Sosa(self.0 * 2)
    }

    /// The Sosa number of this individual's mother (2N + 1).
    pub fn mother(&self) -> Sosa {
        Sosa(self.0 * 2 + 1)
    }

    /// The Sosa number of the child this ancestor belongs to (⌊N/2⌋).
    ///
    /// Returns `None` for the root, which is nobody's ancestor.
    ///
    /// # Example
    ///
    /// ```
    /// use ahnentafel::core::types::Sosa;
    ///
    /// let grandmother = Sosa::new(5).unwrap();
    /// assert_eq!(grandmother.child(), Some(Sosa::new(2).unwrap()));
    /// assert_eq!(Sosa::ROOT.child(), None);
    /// ```
    pub fn child(&self) -> Option<Sosa> {
        if self.0 == 1 {
            None
        } else {
            Some(Sosa(self.0 / 2))
        }
    }

    /// Generation depth, counting the root as generation 1.
    ///
    /// Sosa 2 and 3 (the parents) are generation 2, 4..=7 are generation 3,
    /// and so on: the generation is the bit length of the number.
    pub fn generation(&self) -> u32 {
        u64::BITS - self.0.leading_zeros()
    }

    /// Whether this is the root individual.
    pub fn is_root(&self) -> bool {
        self.0 == 1
    }

    /// Whether this position is a father (even numbers).
    pub fn is_father(&self) -> bool {
        self.0 % 2 == 0
    }

    /// Whether this position is a mother (odd numbers above the root).
    pub fn is_mother(&self) -> bool {
        self.0 > 1 && self.0 % 2 == 1
    }
}

impl TryFrom<u64> for Sosa {
    type Error = TypeError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Sosa> for u64 {
    fn from(sosa: Sosa) -> Self {
        sosa.0
    }
}

impl std::str::FromStr for Sosa {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u64 = s
            .parse()
            .map_err(|_| TypeError::InvalidSosa(format!("not a number: '{s}'")))?;
        Self::new(n)
    }
}

impl std::fmt::Display for Sosa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated d'Aboville descendant path.
///
/// D'Aboville numbers identify descendants: each dot-terminated segment is a
/// birth-order position within a generation, so `"1.2.1."` is the first
/// child of the second child of individual 1. Paths always end in `.` and
/// every segment is at least 1.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
/// use ahnentafel::core::types::Daboville;
///
/// let path = Daboville::new("1.2.1.").unwrap();
/// assert_eq!(path.generation(), 3);
/// assert_eq!(path.parent().unwrap().as_str(), "1.2.");
///
/// let third = NonZeroU32::new(3).unwrap();
/// assert_eq!(path.child(third).as_str(), "1.2.1.3.");
///
/// // Missing terminal dot and empty segments are rejected
/// assert!(Daboville::new("1.2.1").is_err());
/// assert!(Daboville::new("1..2.").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Daboville(String);

impl Daboville {
    /// Create a new validated d'Aboville path.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidDaboville` if the path is empty, is not
    /// dot-terminated, or contains a segment that is not a positive number.
    pub fn new(path: impl Into<String>) -> Result<Self, TypeError> {
        let path = path.into();
        Self::validate(&path)?;
        Ok(Self(path))
    }

    /// The path of the progenitor, `"1."`.
    pub fn root() -> Self {
        Self("1.".to_string())
    }

    /// Validate a d'Aboville path.
    fn validate(path: &str) -> Result<(), TypeError> {
        if path.is_empty() {
            return Err(TypeError::InvalidDaboville("path cannot be empty".into()));
        }
        if !path.ends_with('.') {
            return Err(TypeError::InvalidDaboville("path must end with '.'".into()));
        }
        for segment in path[..path.len() - 1].split('.') {
            if segment.is_empty() {
                return Err(TypeError::InvalidDaboville(
                    "path segments cannot be empty".into(),
                ));
            }
            match segment.parse::<u32>() {
                Ok(0) => {
                    return Err(TypeError::InvalidDaboville(
                        "birth-order positions start at 1".into(),
                    ));
                }
                Ok(_) => {}
                Err(_) => {
                    return Err(TypeError::InvalidDaboville(format!(
                        "segment '{segment}' is not a number"
                    )));
                }
            }
        }
        Ok(())
    }

    /// The ancestor's path: this path with its last segment stripped.
    ///
    /// Returns `None` for a single-segment path, since the empty string is
    /// not a valid path.
    pub fn parent(&self) -> Option<Daboville> {
        let trimmed = &self.0[..self.0.len() - 1];
        trimmed
            .rfind('.')
            .map(|idx| Daboville(self.0[..=idx].to_string()))
    }

    /// Extend the path with a child at the given birth-order position.
    pub fn child(&self, position: NonZeroU32) -> Daboville {
        Daboville(format!("{}{}.", self.0, position))
    }

    /// Generation depth: the number of segments.
    pub fn generation(&self) -> usize {
        self.0.split_terminator('.').count()
    }

    /// Birth-order positions, outermost generation first.
    pub fn segments(&self) -> Vec<u32> {
        self.0
            .split_terminator('.')
            .filter_map(|s| s.parse().ok())
            .collect()
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Daboville {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Daboville> for String {
    fn from(path: Daboville) -> Self {
        path.0
    }
}

impl std::str::FromStr for Daboville {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Daboville {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Daboville {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A GEDCOM sex code.
///
/// Parsed from the single letters `M`, `F`, and `U` (case-insensitive).
/// The name-derivation engines accept `Unknown` everywhere and degrade to
/// their "nothing derivable" output rather than failing.
///
/// # Example
///
/// ```
/// use ahnentafel::core::types::Sex;
///
/// assert_eq!("m".parse::<Sex>().unwrap(), Sex::Male);
/// assert_eq!(Sex::Female.as_letter(), "F");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

impl Sex {
    /// The GEDCOM letter for this sex.
    pub fn as_letter(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Unknown => "U",
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "M" => Ok(Sex::Male),
            "F" => Ok(Sex::Female),
            "U" => Ok(Sex::Unknown),
            _ => Err(TypeError::InvalidSex(format!(
                "expected M, F or U, got '{s}'"
            ))),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_letter())
    }
}
