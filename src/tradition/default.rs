//! tradition::default
//!
//! The no-derivation baseline: surnames exist, but nothing propagates
//! automatically.

use crate::core::name::GedcomName;
use crate::core::types::Sex;

use super::traits::{NameTemplate, SurnameTradition};

/// Surnames are tracked but never derived; every operation yields the
/// unknown name `"//"` for the user to fill in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTradition;

impl SurnameTradition for DefaultTradition {
    fn name(&self) -> &'static str {
        "default"
    }

    fn new_child_names(
        &self,
        _father: &GedcomName,
        _mother: &GedcomName,
        _sex: Sex,
    ) -> NameTemplate {
        NameTemplate::unknown()
    }

    fn new_parent_names(&self, _child: &GedcomName, _sex: Sex) -> NameTemplate {
        NameTemplate::unknown()
    }

    fn new_spouse_names(&self, _spouse: &GedcomName, _sex: Sex) -> NameTemplate {
        NameTemplate::unknown()
    }
}
