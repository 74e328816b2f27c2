//! core::name
//!
//! GEDCOM personal-name parsing.
//!
//! # Features
//!
//! - Split a raw `Given /Surname/ /Surname2/` string into its parts
//! - First-word / last-word helpers for compound surnames
//! - Surname-particle detection (`van`, `von`, `de la`, ...)
//!
//! # Permissiveness
//!
//! Parsing is total. Malformed input (unterminated `/` spans, missing
//! parts, empty strings) degrades to empty parts rather than failing, so
//! the name-derivation engines downstream stay infallible. Callers that
//! need strict validation must perform it before parsing.

/// A parsed GEDCOM personal name.
///
/// GEDCOM encodes surnames between slashes: `Gabriel /Garcia/ /Iglesias/`
/// has the given name `Gabriel` and the surname tokens `Garcia` and
/// `Iglesias`. Instances are immutable snapshots of the raw record.
///
/// # Example
///
/// ```
/// use ahnentafel::core::name::GedcomName;
///
/// let name = GedcomName::parse("Gabriel /Garcia/ /Iglesias/");
/// assert_eq!(name.given(), "Gabriel");
/// assert_eq!(name.surname(0), Some("Garcia"));
/// assert_eq!(name.surname(1), Some("Iglesias"));
/// assert_eq!(name.surname(2), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomName {
    given: String,
    surnames: Vec<String>,
}

impl GedcomName {
    /// Parse a raw GEDCOM name string.
    ///
    /// Never fails: an unterminated surname span is ignored, and an empty
    /// string parses to an empty name.
    ///
    /// # Example
    ///
    /// ```
    /// use ahnentafel::core::name::GedcomName;
    ///
    /// let empty = GedcomName::parse("");
    /// assert!(empty.is_empty());
    ///
    /// // The trailing span never closes, so it is not a surname
    /// let partial = GedcomName::parse("Gabriel /Garcia");
    /// assert_eq!(partial.given(), "Gabriel");
    /// assert_eq!(partial.surnames(), &[] as &[String]);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut surnames = Vec::new();
        let mut given = "";
        let mut seen_surname = false;
        let mut remainder = raw;

        loop {
            match remainder.find('/') {
                None => {
                    if !seen_surname {
                        given = remainder;
                    }
                    break;
                }
                Some(start) => {
                    if !seen_surname {
                        given = &remainder[..start];
                    }
                    let after = &remainder[start + 1..];
                    match after.find('/') {
                        // Unterminated span: not a surname
                        None => break,
                        Some(end) => {
                            surnames.push(after[..end].trim().to_string());
                            seen_surname = true;
                            remainder = &after[end + 1..];
                        }
                    }
                }
            }
        }

        GedcomName {
            given: given.trim().to_string(),
            surnames,
        }
    }

    /// The given-name part (text before the first surname span).
    pub fn given(&self) -> &str {
        &self.given
    }

    /// All surname tokens, in record order.
    pub fn surnames(&self) -> &[String] {
        &self.surnames
    }

    /// The surname token at `index`, if present and non-empty.
    pub fn surname(&self, index: usize) -> Option<&str> {
        self.surnames
            .get(index)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Whether the name carries no information at all.
    pub fn is_empty(&self) -> bool {
        self.given.is_empty() && self.surnames.iter().all(String::is_empty)
    }
}

/// The first whitespace-separated word of a surname token.
///
/// Compound surnames (`Garcia Iglesias`) and conjunction-joined surnames
/// (`Garcia y Iglesias`) collapse to their first word.
///
/// # Example
///
/// ```
/// use ahnentafel::core::name::first_word;
///
/// assert_eq!(first_word("Garcia y Iglesias"), "Garcia");
/// assert_eq!(first_word("Garcia"), "Garcia");
/// assert_eq!(first_word(""), "");
/// ```
pub fn first_word(surname: &str) -> &str {
    surname.split_whitespace().next().unwrap_or("")
}

/// The last whitespace-separated word of a surname token.
pub fn last_word(surname: &str) -> &str {
    surname.split_whitespace().last().unwrap_or("")
}

/// Surname particles recognized by [`split_particle`], longest first so
/// that `van der` wins over `van`.
const SURNAME_PREFIXES: &[&str] = &[
    "van der", "van den", "van de", "von der", "de la", "de las", "de los", "della", "del", "des",
    "de", "da", "das", "dos", "do", "di", "du", "van", "von", "ter", "ten", "te", "zu", "la", "le",
    "el", "al", "af", "av", "ab", "ap", "op", "uit",
];

/// Split a surname token into its particle prefix and core.
///
/// The particle match is case-insensitive and must be followed by a space;
/// a bare particle (`"van"`) is treated as a whole surname.
///
/// # Example
///
/// ```
/// use ahnentafel::core::name::split_particle;
///
/// assert_eq!(split_particle("van Gogh"), (Some("van"), "Gogh"));
/// assert_eq!(split_particle("de la Cruz"), (Some("de la"), "Cruz"));
/// assert_eq!(split_particle("Garcia"), (None, "Garcia"));
/// assert_eq!(split_particle("van"), (None, "van"));
/// ```
pub fn split_particle(surname: &str) -> (Option<&str>, &str) {
    for prefix in SURNAME_PREFIXES {
        let plen = prefix.len();
        if surname.len() > plen
            && surname.is_char_boundary(plen)
            && surname[..plen].eq_ignore_ascii_case(prefix)
            && surname.as_bytes()[plen] == b' '
        {
            return (Some(&surname[..plen]), surname[plen + 1..].trim_start());
        }
    }
    (None, surname)
}
