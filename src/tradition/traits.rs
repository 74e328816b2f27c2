//! tradition::traits
//!
//! Surname-tradition trait definition and the derived-name template type.
//!
//! # Design
//!
//! A surname tradition is a cultural rule set for how names propagate
//! between relatives. Every operation is a pure function from parsed
//! names to a [`NameTemplate`]; none of them can fail. Malformed or empty
//! input degrades to the tradition's "nothing derivable" template so that
//! chart editing flows never stall on bad records.

use serde::Serialize;

use crate::core::name::{split_particle, GedcomName};
use crate::core::types::Sex;

/// Derived name fields, keyed by their GEDCOM tags.
///
/// `NAME` is always present; the other fields only when the tradition
/// derives them. Presence is meaningful: a missing `SURN` means the
/// tradition had nothing to say, while an empty `SURN` means it derived
/// an empty surname. JSON serialization preserves the distinction by
/// omitting absent fields.
///
/// # Example
///
/// ```
/// use ahnentafel::tradition::NameTemplate;
///
/// let template = NameTemplate::new("/Garcia/ /Ruiz/").with_surn("Garcia,Ruiz");
/// assert_eq!(template.name, "/Garcia/ /Ruiz/");
/// assert_eq!(template.surn.as_deref(), Some("Garcia,Ruiz"));
/// assert_eq!(template.marnm, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameTemplate {
    /// The derived `NAME` value, with surnames between slashes.
    #[serde(rename = "NAME")]
    pub name: String,

    /// Derived given name, for patronymic traditions.
    #[serde(rename = "GIVN", skip_serializing_if = "Option::is_none")]
    pub givn: Option<String>,

    /// Surname particle (`van`, `de la`, ...).
    #[serde(rename = "SPFX", skip_serializing_if = "Option::is_none")]
    pub spfx: Option<String>,

    /// Derived surname(s), comma-joined when several contribute.
    #[serde(rename = "SURN", skip_serializing_if = "Option::is_none")]
    pub surn: Option<String>,

    /// Married name, for traditions where a spouse adopts one.
    #[serde(rename = "_MARNM", skip_serializing_if = "Option::is_none")]
    pub marnm: Option<String>,
}

impl NameTemplate {
    /// A template with only a `NAME` value.
    pub fn new(name: impl Into<String>) -> Self {
        NameTemplate {
            name: name.into(),
            givn: None,
            spfx: None,
            surn: None,
            marnm: None,
        }
    }

    /// The single-slot unknown name, `"//"`.
    pub fn unknown() -> Self {
        Self::new("//")
    }

    /// The two-slot unknown name, `"// //"`, for double-surname
    /// traditions.
    pub fn unknown_pair() -> Self {
        Self::new("// //")
    }

    /// A template carrying one whole surname token: `NAME` is `/token/`
    /// and the particle, if any, is split into `SPFX`/`SURN`.
    pub fn for_surname(token: &str) -> Self {
        let (spfx, core) = split_particle(token);
        let mut template = Self::new(format!("/{token}/"));
        template.spfx = spfx.map(str::to_string);
        template.surn = Some(core.to_string());
        template
    }

    /// Set the derived given name.
    pub fn with_givn(mut self, givn: impl Into<String>) -> Self {
        self.givn = Some(givn.into());
        self
    }

    /// Set the derived surname value.
    pub fn with_surn(mut self, surn: impl Into<String>) -> Self {
        self.surn = Some(surn.into());
        self
    }

    /// Set the married-name value.
    pub fn with_marnm(mut self, marnm: impl Into<String>) -> Self {
        self.marnm = Some(marnm.into());
        self
    }

    /// Present fields in GEDCOM tag order, for display.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("NAME", self.name.as_str())];
        if let Some(givn) = &self.givn {
            fields.push(("GIVN", givn));
        }
        if let Some(spfx) = &self.spfx {
            fields.push(("SPFX", spfx));
        }
        if let Some(surn) = &self.surn {
            fields.push(("SURN", surn));
        }
        if let Some(marnm) = &self.marnm {
            fields.push(("_MARNM", marnm));
        }
        fields
    }
}

/// A cultural rule set for deriving the names of relatives.
///
/// Implementations are stateless and every method is deterministic;
/// the same inputs always produce the same template.
pub trait SurnameTradition: std::fmt::Debug {
    /// The tradition's registry tag (e.g. `"spanish"`).
    fn name(&self) -> &'static str;

    /// Whether this tradition tracks family surnames at all.
    fn has_surnames(&self) -> bool {
        true
    }

    /// Whether spouses adopt a name on marriage under this tradition.
    fn has_married_names(&self) -> bool {
        false
    }

    /// Derive a child's name fields from its parents' names.
    fn new_child_names(
        &self,
        father: &GedcomName,
        mother: &GedcomName,
        sex: Sex,
    ) -> NameTemplate;

    /// Derive a parent's name fields from a child's name.
    fn new_parent_names(&self, child: &GedcomName, sex: Sex) -> NameTemplate;

    /// Derive a spouse's name fields from the other spouse's name.
    fn new_spouse_names(&self, spouse: &GedcomName, sex: Sex) -> NameTemplate;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_surname_splits_particles() {
        let template = NameTemplate::for_surname("van Gogh");
        assert_eq!(template.name, "/van Gogh/");
        assert_eq!(template.spfx.as_deref(), Some("van"));
        assert_eq!(template.surn.as_deref(), Some("Gogh"));
    }

    #[test]
    fn for_surname_without_particle() {
        let template = NameTemplate::for_surname("Kowalski");
        assert_eq!(template.name, "/Kowalski/");
        assert_eq!(template.spfx, None);
        assert_eq!(template.surn.as_deref(), Some("Kowalski"));
    }

    #[test]
    fn fields_in_tag_order() {
        let template = NameTemplate::new("/Nowak/")
            .with_surn("Nowak")
            .with_marnm("/Nowakowa/");
        assert_eq!(
            template.fields(),
            vec![
                ("NAME", "/Nowak/"),
                ("SURN", "Nowak"),
                ("_MARNM", "/Nowakowa/"),
            ]
        );
    }

    #[test]
    fn json_omits_absent_fields() {
        let json = serde_json::to_string(&NameTemplate::unknown()).unwrap();
        assert_eq!(json, r#"{"NAME":"//"}"#);
    }

    #[test]
    fn json_keeps_empty_surn() {
        let json =
            serde_json::to_string(&NameTemplate::unknown_pair().with_surn("")).unwrap();
        assert_eq!(json, r#"{"NAME":"// //","SURN":""}"#);
    }
}
