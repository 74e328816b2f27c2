//! tradition::portuguese
//!
//! The Portuguese double-surname convention.
//!
//! The mirror of the Spanish rule: a child carries the mother's last
//! surname, then the father's last surname, and compound surnames
//! contribute their final word. The paternal surname therefore sits in
//! the second slot.

use crate::core::name::{last_word, GedcomName};
use crate::core::types::Sex;

use super::traits::{NameTemplate, SurnameTradition};

/// Portuguese double surnames: `/Mãe2/ /Pai2/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortugueseTradition;

impl PortugueseTradition {
    /// A parent's contribution: the last word of their last surname
    /// token, or the empty string when there is nothing to contribute.
    fn contribution(parent: &GedcomName) -> &str {
        parent
            .surnames()
            .last()
            .map(|token| last_word(token))
            .unwrap_or("")
    }
}

impl SurnameTradition for PortugueseTradition {
    fn name(&self) -> &'static str {
        "portuguese"
    }

    fn new_child_names(
        &self,
        father: &GedcomName,
        mother: &GedcomName,
        _sex: Sex,
    ) -> NameTemplate {
        let from_father = Self::contribution(father);
        let from_mother = Self::contribution(mother);

        let surn = [from_mother, from_father]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(",");

        NameTemplate::new(format!("/{from_mother}/ /{from_father}/")).with_surn(surn)
    }

    fn new_parent_names(&self, child: &GedcomName, sex: Sex) -> NameTemplate {
        // The child's second surname is paternal, the first maternal.
        let index = match sex {
            Sex::Male => 1,
            Sex::Female => 0,
            Sex::Unknown => return NameTemplate::unknown_pair(),
        };
        match child.surname(index).map(last_word).filter(|s| !s.is_empty()) {
            Some(surname) => NameTemplate::new(format!("/{surname}/ //")).with_surn(surname),
            None => NameTemplate::unknown_pair(),
        }
    }

    fn new_spouse_names(&self, _spouse: &GedcomName, _sex: Sex) -> NameTemplate {
        NameTemplate::unknown_pair()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> GedcomName {
        GedcomName::parse(raw)
    }

    #[test]
    fn child_takes_last_surnames_mother_first() {
        let template = PortugueseTradition.new_child_names(
            &name("José /Santos/ /Silva/"),
            &name("Ana /Costa/ /Pereira/"),
            Sex::Male,
        );
        assert_eq!(
            template,
            NameTemplate::new("/Pereira/ /Silva/").with_surn("Pereira,Silva")
        );
    }

    #[test]
    fn compound_surnames_collapse_to_last_word() {
        let template = PortugueseTradition.new_child_names(
            &name("José /Santos Silva/"),
            &name("Ana /Costa Pereira/"),
            Sex::Female,
        );
        assert_eq!(
            template,
            NameTemplate::new("/Pereira/ /Silva/").with_surn("Pereira,Silva")
        );
    }

    #[test]
    fn empty_parents_yield_empty_slots() {
        let template =
            PortugueseTradition.new_child_names(&name(""), &name(""), Sex::Unknown);
        assert_eq!(template, NameTemplate::new("// //").with_surn(""));
    }

    #[test]
    fn father_from_second_surname() {
        let template = PortugueseTradition
            .new_parent_names(&name("José /Pereira/ /Silva/"), Sex::Male);
        assert_eq!(template, NameTemplate::new("/Silva/ //").with_surn("Silva"));
    }

    #[test]
    fn mother_from_first_surname() {
        let template = PortugueseTradition
            .new_parent_names(&name("José /Pereira/ /Silva/"), Sex::Female);
        assert_eq!(
            template,
            NameTemplate::new("/Pereira/ //").with_surn("Pereira")
        );
    }

    #[test]
    fn unknown_sex_has_no_surn_key() {
        let template = PortugueseTradition
            .new_parent_names(&name("José /Pereira/ /Silva/"), Sex::Unknown);
        assert_eq!(template, NameTemplate::unknown_pair());
    }

    #[test]
    fn marriage_never_changes_surnames() {
        let template =
            PortugueseTradition.new_spouse_names(&name("Ana /Costa/ /Pereira/"), Sex::Male);
        assert_eq!(template, NameTemplate::unknown_pair());
    }
}
