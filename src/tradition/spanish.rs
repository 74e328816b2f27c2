//! tradition::spanish
//!
//! The Spanish double-surname convention.
//!
//! A child carries two surnames: the father's first surname, then the
//! mother's first surname. Compound surnames (`Garcia Iglesias`,
//! `Garcia y Iglesias`) contribute only their first word. Surnames do
//! not change at marriage.

use crate::core::name::{first_word, GedcomName};
use crate::core::types::Sex;

use super::traits::{NameTemplate, SurnameTradition};

/// Spanish double surnames: `/Padre1/ /Madre1/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishTradition;

impl SpanishTradition {
    /// A parent's contribution: the first word of their first surname
    /// token, or the empty string when there is nothing to contribute.
    fn contribution(parent: &GedcomName) -> &str {
        parent.surname(0).map(first_word).unwrap_or("")
    }
}

impl SurnameTradition for SpanishTradition {
    fn name(&self) -> &'static str {
        "spanish"
    }

    fn new_child_names(
        &self,
        father: &GedcomName,
        mother: &GedcomName,
        _sex: Sex,
    ) -> NameTemplate {
        let from_father = Self::contribution(father);
        let from_mother = Self::contribution(mother);

        let surn = [from_father, from_mother]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(",");

        // The SURN key is always present, even when empty: the tradition
        // did derive surnames, there just were none to inherit.
        NameTemplate::new(format!("/{from_father}/ /{from_mother}/")).with_surn(surn)
    }

    fn new_parent_names(&self, child: &GedcomName, sex: Sex) -> NameTemplate {
        let index = match sex {
            Sex::Male => 0,
            Sex::Female => 1,
            Sex::Unknown => return NameTemplate::unknown_pair(),
        };
        match child.surname(index).map(first_word).filter(|s| !s.is_empty()) {
            Some(surname) => NameTemplate::new(format!("/{surname}/ //")).with_surn(surname),
            None => NameTemplate::unknown_pair(),
        }
    }

    fn new_spouse_names(&self, _spouse: &GedcomName, _sex: Sex) -> NameTemplate {
        NameTemplate::unknown_pair()
    }
}
